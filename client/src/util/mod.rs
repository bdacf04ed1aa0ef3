//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure heuristics
//! from page and component logic to improve reuse and testability.

pub mod classify;
pub mod clock;
pub mod markdown;
