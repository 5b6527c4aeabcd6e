//! Network layer: REST helpers, wire types, and the error taxonomy.

pub mod api;
pub mod error;
pub mod types;
