//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat column and the document panel while reading
//! shared state from Leptos context providers.

pub mod chat_header;
pub mod chat_input;
pub mod chat_message;
pub mod crop_selector;
pub mod document_card;
pub mod document_sidebar;
pub mod welcome_panel;
