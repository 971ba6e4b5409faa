//! Database configuration module.
//!
//! Handles the `SQLite` connection and the `Archive` table. The table is
//! created with raw SQL rather than from the entity so its layout stays
//! exactly `Archive(Date TEXT, Name TEXT, Message TEXT)`, which keeps files
//! written by earlier deployments readable.

use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};
use std::path::Path;

/// Default database location, created on first use.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/Archive.db?mode=rwc";

const CREATE_ARCHIVE_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS Archive (Date TEXT, Name TEXT, Message TEXT)";

/// Gets the database URL from `DATABASE_URL` or returns the default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Creates the parent directory of a file-backed `SQLite` URL.
fn ensure_parent_dir(database_url: &str) -> Result<()> {
    let Some(rest) = database_url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    let file = rest.split('?').next().unwrap_or_default();
    if let Some(parent) = Path::new(file).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Establishes a connection to the database named by [`get_database_url`].
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    ensure_parent_dir(&database_url)?;
    tracing::debug!("Connecting to database at {database_url}");
    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates the `Archive` table if it does not exist yet.
pub async fn ensure_archive_table<C>(db: &C) -> Result<()>
where
    C: ConnectionTrait,
{
    db.execute_unprepared(CREATE_ARCHIVE_TABLE).await?;
    Ok(())
}
