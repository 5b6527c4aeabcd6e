//! # remity-web
//!
//! Leptos + WASM front-end for the Remity remittance service: a marketing
//! landing page with a conversion calculator, login/registration, and
//! role-gated user and admin dashboards backed by the remote REST API.
//!
//! The crate is client-side rendered. All business logic (quoting, state
//! transitions, compliance review, payouts) lives behind the API; this code
//! holds session state, guards routes, and renders what the server sends.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
