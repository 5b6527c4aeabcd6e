//! Reusable UI components.

pub mod calculator;
pub mod guard;
pub mod header;
pub mod notices;
pub mod send_money;
pub mod transactions;
