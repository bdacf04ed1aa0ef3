//! Networking modules for the answer-service exchange.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` sends questions, `types` defines the wire schema, and `normalize`
//! turns a decoded envelope into display data.

pub mod api;
pub mod normalize;
pub mod types;
