//! Bot layer - Discord-specific interface and command handlers
//!
//! This module wires the archive into poise: commands, the interaction
//! router for the picker, startup tasks and the shared bot context.

/// Discord command implementations
pub mod commands;
/// Framework construction, error hook and startup tasks
pub mod framework;
/// Discord interaction handlers (buttons, forms, dropdowns)
pub mod handlers;
/// Embeds and message components
pub mod ui;

use crate::{
    config::AppConfig,
    core::{
        access::RoleGate, action_log::ActionLogger, commands::ArchiveContext,
        session::SessionStore,
    },
    errors::Error,
};
use sea_orm::DatabaseConnection;
use std::{sync::Arc, time::Duration};

/// Poise context used by all commands.
pub type Context<'a> = poise::Context<'a, BotData, Error>;

/// Shared data available to all bot commands and interaction handlers.
///
/// Everything a request needs is reachable from here; handlers receive it
/// explicitly instead of touching global state.
pub struct BotData {
    /// Database connection for all archive operations
    pub database: DatabaseConnection,
    /// Loaded configuration
    pub app_config: Arc<AppConfig>,
    /// Append-only action log
    pub action_log: ActionLogger,
    /// Write permission check
    pub role_gate: RoleGate,
    /// Open name selectors
    pub sessions: SessionStore,
}

impl BotData {
    /// Builds the bot context from configuration and a connected database.
    #[must_use]
    pub fn new(database: DatabaseConnection, app_config: Arc<AppConfig>) -> Self {
        let archive = &app_config.archive;
        let action_log = ActionLogger::new(archive.action_log_path.clone());
        let role_gate = RoleGate::new(archive.allowed_role_ids.iter().copied());
        let sessions = SessionStore::new(Duration::from_secs(archive.selection_timeout_secs));

        Self {
            database,
            app_config,
            action_log,
            role_gate,
            sessions,
        }
    }

    /// Handles passed to the archive request functions.
    #[must_use]
    pub const fn archive(&self) -> ArchiveContext<'_> {
        ArchiveContext {
            db: &self.database,
            action_log: &self.action_log,
            role_gate: &self.role_gate,
        }
    }
}
