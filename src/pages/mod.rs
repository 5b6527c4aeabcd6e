//! Top-level routed pages.

pub mod admin;
pub mod dashboard;
pub mod landing;
pub mod login;
pub mod register;
