/// Database configuration and connection management
pub mod database;

/// Bot settings from config.toml and environment variables
pub mod settings;

pub use settings::{AppConfig, ArchiveConfig};
