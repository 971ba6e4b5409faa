//! Discord interaction handlers
//!
//! Handlers for interactions that are not commands: button clicks, form
//! submissions and dropdown choices.

/// Archive picker: button → date form → name dropdown
pub mod interactions;
