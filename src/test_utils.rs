//! Shared test utilities.
//!
//! Helpers for in-memory archive databases and throwaway action logs.

use crate::{
    core::{access::RoleGate, action_log::ActionLogger, archive, commands::ArchiveContext},
    errors::Result,
};
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

/// Creates an in-memory `SQLite` database with the `Archive` table.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::ensure_archive_table(&db).await?;
    Ok(db)
}

/// Inserts `(date, name, message)` rows without going through the role gate.
pub async fn seed_entries(db: &DatabaseConnection, rows: &[(&str, &str, &str)]) -> Result<()> {
    for (date, name, message) in rows {
        archive::insert(db, date, name, message).await?;
    }
    Ok(())
}

/// Database, action log and role gate for command-level tests.
///
/// The action log lives in a temporary directory removed on drop.
pub struct TestEnv {
    pub db: DatabaseConnection,
    pub logger: ActionLogger,
    pub gate: RoleGate,
    _dir: TempDir,
}

impl TestEnv {
    /// Fresh database plus a gate allowing `allowed_roles`.
    pub async fn new(allowed_roles: &[u64]) -> Result<Self> {
        Ok(Self::with_db(setup_test_db().await?, allowed_roles))
    }

    /// Same as [`TestEnv::new`] but over a caller-prepared database.
    #[allow(clippy::expect_used)]
    pub fn with_db(db: DatabaseConnection, allowed_roles: &[u64]) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let logger = ActionLogger::new(dir.path().join("logs").join("archive_action_log.txt"));
        Self {
            db,
            logger,
            gate: RoleGate::new(allowed_roles.iter().copied()),
            _dir: dir,
        }
    }

    pub fn context(&self) -> ArchiveContext<'_> {
        ArchiveContext {
            db: &self.db,
            action_log: &self.logger,
            role_gate: &self.gate,
        }
    }
}
