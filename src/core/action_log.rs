//! Append-only log of archive actions.
//!
//! Every call opens the file, appends one line and closes it again, so a
//! crash never loses an acknowledged action. Lines look like
//! `[YYYY-MM-DD HH:MM:SS] <actor> | <action> | <detail>` with UTC timestamps.

use crate::errors::Result;
use chrono::{DateTime, Utc};
use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

/// Writes action records to a plain-text file.
#[derive(Debug, Clone)]
pub struct ActionLogger {
    path: PathBuf,
}

impl ActionLogger {
    /// Creates a logger appending to `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record stamped with the current time.
    pub fn log(&self, actor: &str, action: &str, detail: &str) -> Result<()> {
        self.log_at(Utc::now(), actor, action, detail)
    }

    /// Appends one record stamped with `at`.
    pub fn log_at(&self, at: DateTime<Utc>, actor: &str, action: &str, detail: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let line = format_line(at, actor, action, detail);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;

        tracing::info!(actor, action, detail, "archive action");
        Ok(())
    }
}

/// Renders one log line, including the trailing newline.
#[must_use]
pub fn format_line(at: DateTime<Utc>, actor: &str, action: &str, detail: &str) -> String {
    format!(
        "[{}] {actor} | {action} | {detail}\n",
        at.format("%Y-%m-%d %H:%M:%S")
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_line() {
        let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(
            format_line(at, "alice", "Saved Archive", "Date: 2025-01-01 | Name: Alice"),
            "[2025-01-02 03:04:05] alice | Saved Archive | Date: 2025-01-01 | Name: Alice\n"
        );
    }

    #[test]
    fn test_log_creates_directory_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let logger = ActionLogger::new(dir.path().join("logs").join("actions.txt"));
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

        logger.log_at(at, "alice", "Used !archive", "Channel: 1").unwrap();
        logger.log_at(at, "bob", "Viewed All Archives", "Total: 3").unwrap();

        let contents = std::fs::read_to_string(logger.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines,
            vec![
                "[2025-01-01 00:00:00] alice | Used !archive | Channel: 1",
                "[2025-01-01 00:00:00] bob | Viewed All Archives | Total: 3",
            ]
        );
    }

    #[test]
    fn test_log_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actions.txt");
        std::fs::write(&path, "earlier line\n").unwrap();

        ActionLogger::new(&path).log("carol", "Saved Archive", "x").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("earlier line\n"));
        assert!(contents.ends_with("carol | Saved Archive | x\n"));
    }
}
