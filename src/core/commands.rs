//! Framework-agnostic archive command handling.
//!
//! Each function runs one user request end to end: role gate, token
//! validation, store access and action logging. The result is an outcome
//! value the bot layer turns into a reply. Storage errors never escape; they
//! are logged and reported as `Failed`. Failed requests write no action
//! record. A save is recorded through [`record_saved`] once its confirmation
//! has been delivered.

use crate::core::{
    access::RoleGate,
    action_log::ActionLogger,
    archive::{self, EntryDetail, EntrySummary},
    session::{Selection, SessionStore},
    validation::is_valid_token,
};
use sea_orm::DatabaseConnection;

/// Handles shared by every archive request.
#[derive(Debug, Clone, Copy)]
pub struct ArchiveContext<'a> {
    /// Archive database
    pub db: &'a DatabaseConnection,
    /// Action log sink
    pub action_log: &'a ActionLogger,
    /// Write permission check
    pub role_gate: &'a RoleGate,
}

/// The user issuing a request.
#[derive(Debug, Clone, Copy)]
pub struct Actor<'a> {
    /// Display identity written to the action log
    pub tag: &'a str,
    /// Roles the user holds in the server
    pub role_ids: &'a [u64],
}

/// How a command was invoked; slash invocations are tagged in the action log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Prefix-triggered text command
    Text,
    /// Native slash command
    Slash,
}

impl Surface {
    fn action(self, base: &str) -> String {
        match self {
            Self::Text => base.to_string(),
            Self::Slash => format!("{base} (slash)"),
        }
    }
}

/// Outcome of [`save_entry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Actor holds none of the allowed roles
    Denied,
    /// Date token failed validation
    InvalidDate,
    /// Name token failed validation
    InvalidName,
    /// Entry stored
    Saved,
    /// Storage error, details only in the process log
    Failed,
}

/// Outcome of [`list_entries`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOutcome {
    /// All entries, newest date first
    Entries(Vec<EntrySummary>),
    /// Nothing archived yet
    Empty,
    /// Storage error
    Failed,
}

/// Outcome of [`browse_date`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseOutcome {
    /// Date token failed validation
    InvalidDate,
    /// No entries under this date
    Empty,
    /// Entries found; a selection session was opened for them
    Candidates(Vec<EntryDetail>),
    /// Storage error
    Failed,
}

impl ArchiveContext<'_> {
    fn record(&self, actor: &Actor<'_>, action: &str, detail: &str) {
        if let Err(e) = self.action_log.log(actor.tag, action, detail) {
            tracing::warn!(
                "Failed to write action log {}: {e}",
                self.action_log.path().display()
            );
        }
    }
}

/// Records that the archive entry point was opened, e.g. via `!archive`.
pub fn open_archive(ctx: &ArchiveContext<'_>, actor: &Actor<'_>, invocation: &str, channel: &str) {
    ctx.record(actor, &format!("Used {invocation}"), &format!("Channel: {channel}"));
}

/// Saves a new entry after the role gate and token validation pass.
///
/// Writes no action record; call [`record_saved`] after confirming.
pub async fn save_entry(
    ctx: &ArchiveContext<'_>,
    actor: &Actor<'_>,
    surface: Surface,
    date: &str,
    name: &str,
    message: &str,
) -> SaveOutcome {
    if !ctx.role_gate.is_authorized(actor.role_ids) {
        tracing::info!("{} denied archive write", actor.tag);
        return SaveOutcome::Denied;
    }
    if !is_valid_token(date) {
        return SaveOutcome::InvalidDate;
    }
    if !is_valid_token(name) {
        return SaveOutcome::InvalidName;
    }

    match archive::insert(ctx.db, date, name, message).await {
        Ok(()) => SaveOutcome::Saved,
        Err(e) => {
            tracing::error!("Failed to save archive entry {date} / {name}: {e}");
            SaveOutcome::Failed
        }
    }
}

/// Appends the action record of a saved entry.
pub fn record_saved(ctx: &ArchiveContext<'_>, actor: &Actor<'_>, surface: Surface, date: &str, name: &str) {
    ctx.record(
        actor,
        &surface.action("Saved Archive"),
        &format!("Date: {date} | Name: {name}"),
    );
}

/// Lists every entry.
pub async fn list_entries(ctx: &ArchiveContext<'_>, actor: &Actor<'_>, surface: Surface) -> ListOutcome {
    match archive::list_all(ctx.db).await {
        Ok(entries) if entries.is_empty() => ListOutcome::Empty,
        Ok(entries) => {
            ctx.record(
                actor,
                &surface.action("Viewed All Archives"),
                &format!("Total: {}", entries.len()),
            );
            ListOutcome::Entries(entries)
        }
        Err(e) => {
            tracing::error!("Failed to list archive entries: {e}");
            ListOutcome::Failed
        }
    }
}

/// Looks up the entries of `date` and opens selection session `session_id` for them.
pub async fn browse_date(
    ctx: &ArchiveContext<'_>,
    sessions: &SessionStore,
    actor: &Actor<'_>,
    session_id: u64,
    date: &str,
) -> BrowseOutcome {
    if !is_valid_token(date) {
        return BrowseOutcome::InvalidDate;
    }

    match archive::find_by_date(ctx.db, date).await {
        Ok(entries) if entries.is_empty() => BrowseOutcome::Empty,
        Ok(entries) => {
            sessions.open(session_id, date, entries.clone());
            ctx.record(actor, "Viewed Archive List", &format!("Date: {date}"));
            BrowseOutcome::Candidates(entries)
        }
        Err(e) => {
            tracing::error!("Failed to read archive entries for {date}: {e}");
            BrowseOutcome::Failed
        }
    }
}

/// Resolves a dropdown choice of session `session_id`.
pub fn pick_entry(
    ctx: &ArchiveContext<'_>,
    sessions: &SessionStore,
    actor: &Actor<'_>,
    session_id: u64,
    index: usize,
) -> Selection {
    let selection = sessions.select(session_id, index);
    if let Selection::Found { date, entry } = &selection {
        ctx.record(actor, "Viewed Archive Entry", &format!("{date} - {}", entry.name));
    }
    selection
}
