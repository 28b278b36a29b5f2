//! # App Configuration
//!
//! Optional TOML configuration for the binary. Precedence, highest first:
//! CLI flags, environment (`INVENPRO_LOG_FORMAT`), config file, built-in
//! defaults. The core never reads configuration; only the binary does.

use invenpro_core::InventoryError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default snapshot database path when neither flag nor config provides one.
pub const DEFAULT_DATABASE: &str = "invenpro.db";

/// Settings accepted from the config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path to the snapshot database.
    pub database: Option<PathBuf>,
    /// Log output format: "text" or "json".
    pub log_format: Option<String>,
}

impl AppConfig {
    /// Load a config file, failing on unreadable or malformed content.
    ///
    /// A missing `--config` flag means defaults; a present flag pointing at a
    /// broken file is an error, not a silent fallback.
    pub fn load(path: &Path) -> Result<Self, InventoryError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            InventoryError::Storage(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        toml::from_str(&raw).map_err(|e| {
            InventoryError::Serialization(format!("Invalid config '{}': {}", path.display(), e))
        })
    }

    /// Resolve the database path: flag, then config, then default.
    #[must_use]
    pub fn resolve_database(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.database.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config: AppConfig =
            toml::from_str("database = \"data/shop.db\"\nlog_format = \"json\"").expect("parse");
        assert_eq!(config.database, Some(PathBuf::from("data/shop.db")));
        assert_eq!(config.log_format.as_deref(), Some("json"));
    }

    #[test]
    fn empty_config_is_valid() {
        let config: AppConfig = toml::from_str("").expect("parse");
        assert!(config.database.is_none());
    }

    #[test]
    fn flag_wins_over_config() {
        let config = AppConfig {
            database: Some(PathBuf::from("from-config.db")),
            log_format: None,
        };
        assert_eq!(
            config.resolve_database(Some(PathBuf::from("from-flag.db"))),
            PathBuf::from("from-flag.db")
        );
        assert_eq!(
            config.resolve_database(None),
            PathBuf::from("from-config.db")
        );
    }

    #[test]
    fn defaults_apply_last() {
        let config = AppConfig::default();
        assert_eq!(
            config.resolve_database(None),
            PathBuf::from(DEFAULT_DATABASE)
        );
    }
}
