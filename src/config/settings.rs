//! Application settings loaded from `config.toml` and the environment.
//!
//! Every key is optional. A missing file yields the defaults of the first
//! deployment, so the bot runs with nothing but `DISCORD_BOT_TOKEN` set.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Role ids allowed to write to the archive when none are configured.
pub const DEFAULT_ALLOWED_ROLE_IDS: [u64; 2] = [1_329_910_265_264_869_387, 1_329_910_241_835_352_064];

/// Channel that receives the documentation embed when none is configured.
pub const DEFAULT_DOC_CHANNEL_ID: u64 = 1_343_686_645_815_181_382;

/// Top-level bot configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for text commands
    pub prefix: String,
    /// Guild that also gets a guild-scoped command registration
    pub guild_id: Option<u64>,
    /// Text of the "watching" presence
    pub activity: String,
    /// Archive feature settings
    pub archive: ArchiveConfig,
}

/// Settings of the archive feature.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Roles whose members may save entries
    pub allowed_role_ids: Vec<u64>,
    /// Channel for the startup documentation embed; `None` disables the post
    pub doc_channel_id: Option<u64>,
    /// Append-only action log file
    pub action_log_path: PathBuf,
    /// Idle seconds before a name selector expires
    pub selection_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prefix: "!".to_string(),
            guild_id: None,
            activity: "High Rock".to_string(),
            archive: ArchiveConfig::default(),
        }
    }
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            allowed_role_ids: DEFAULT_ALLOWED_ROLE_IDS.to_vec(),
            doc_channel_id: Some(DEFAULT_DOC_CHANNEL_ID),
            action_log_path: PathBuf::from("logs").join("archive_action_log.txt"),
            selection_timeout_secs: 60,
        }
    }
}

/// Parses configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads configuration from `path`, falling back to defaults if the file does not exist.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::info!("No config file at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    tracing::debug!("Loading configuration from {}", path.display());
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;
    parse_config(&contents)
}

/// Loads configuration from `CONFIG_PATH` (default `config.toml`) and applies
/// environment overrides.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let mut config = load_config(path)?;

    if let Ok(raw) = std::env::var("GUILD_ID") {
        let guild_id = raw.trim().parse::<u64>().map_err(|e| Error::Config {
            message: format!("GUILD_ID must be an integer: {e}"),
        })?;
        config.guild_id = (guild_id != 0).then_some(guild_id);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.prefix, "!");
        assert_eq!(config.activity, "High Rock");
        assert_eq!(config.archive.allowed_role_ids, DEFAULT_ALLOWED_ROLE_IDS.to_vec());
        assert_eq!(config.archive.doc_channel_id, Some(DEFAULT_DOC_CHANNEL_ID));
        assert_eq!(config.archive.selection_timeout_secs, 60);
        assert_eq!(
            config.archive.action_log_path,
            PathBuf::from("logs/archive_action_log.txt")
        );
    }

    #[test]
    fn test_parse_archive_section() {
        let toml_str = r#"
            prefix = "?"
            guild_id = 42

            [archive]
            allowed_role_ids = [1, 2, 3]
            action_log_path = "/tmp/actions.txt"
            selection_timeout_secs = 30
        "#;

        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.prefix, "?");
        assert_eq!(config.guild_id, Some(42));
        assert_eq!(config.archive.allowed_role_ids, vec![1, 2, 3]);
        assert_eq!(config.archive.selection_timeout_secs, 30);
        assert_eq!(config.archive.action_log_path, PathBuf::from("/tmp/actions.txt"));
        // Untouched keys keep their defaults
        assert_eq!(config.archive.doc_channel_id, Some(DEFAULT_DOC_CHANNEL_ID));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = parse_config("prefix = [");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.prefix, "!");
    }
}
