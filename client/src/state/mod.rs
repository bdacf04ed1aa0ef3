//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat`, `documents`, `session`) so components
//! depend on small focused models provided through Leptos context.

pub mod chat;
pub mod documents;
pub mod session;
