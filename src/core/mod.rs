//! Core archive logic, independent of the chat framework.

/// Role gate for archive writes
pub mod access;
/// Append-only action log
pub mod action_log;
/// Archive store operations
pub mod archive;
/// Request handling shared by text commands, slash commands and components
pub mod commands;
/// Reply texts and listing layout
pub mod format;
/// Selection sessions of the date → name picker
pub mod session;
/// Archive token validation
pub mod validation;
