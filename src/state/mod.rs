//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `guard`, `quote`, ...) as plain
//! data structures with pure transition methods, so the invariants are
//! testable on the host. Components hold them in `RwSignal`s provided via
//! context and do the async wiring.

pub mod guard;
pub mod notices;
pub mod quote;
pub mod send;
pub mod session;
