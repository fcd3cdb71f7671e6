//! # Application Configuration
//!
//! Where collections live and how the service logs.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     ZAVA_DATA_DIR=/srv/zava/data                                       │
//! │     ZAVA_LOG=debug                                                     │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     explicit path, else $ZAVA_CONFIG, else                             │
//! │     ~/.config/inventory/config.toml (Linux)                            │
//! │     ~/Library/Application Support/com.zava.inventory/config.toml       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     /code/data if present, else ./data; pretty JSON; info,zava=debug   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [storage]
//! data_dir = "/code/data"   # optional
//! pretty = true
//!
//! [logging]
//! filter = "info,zava=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

use zava_store::DataConfig;

use crate::logging::DEFAULT_LOG_FILTER;

/// Environment variable naming the config file.
pub const ENV_CONFIG: &str = "ZAVA_CONFIG";

/// Environment variable overriding `storage.data_dir`.
pub const ENV_DATA_DIR: &str = "ZAVA_DATA_DIR";

/// Environment variable overriding `logging.filter`.
pub const ENV_LOG: &str = "ZAVA_LOG";

// =============================================================================
// Errors
// =============================================================================

/// Configuration load failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// =============================================================================
// Sections
// =============================================================================

/// `[storage]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Data directory. When unset the container/local default applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Pretty-print collection files.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_true() -> bool {
    true
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            data_dir: None,
            pretty: true,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directives, used when `RUST_LOG` is not set.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_filter(),
        }
    }
}

// =============================================================================
// App Config
// =============================================================================

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, `$ZAVA_CONFIG`, or the platform path)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = config_path
            .or_else(|| std::env::var_os(ENV_CONFIG).map(PathBuf::from))
            .or_else(Self::default_config_path);

        let mut config = match path {
            Some(path) if path.exists() => {
                info!(?path, "Loading config from file");
                Self::from_toml(&std::fs::read_to_string(&path)?)?
            }
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document; missing sections and keys take defaults.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(dir) = &self.storage.data_dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("storage.data_dir must not be empty".into()));
            }
        }

        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Invalid("logging.filter must not be empty".into()));
        }

        Ok(())
    }

    /// Applies environment overrides read through `lookup`.
    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup(ENV_DATA_DIR) {
            debug!(data_dir = %dir, "Overriding data directory from environment");
            self.storage.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(filter) = lookup(ENV_LOG) {
            self.logging.filter = filter;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "zava", "inventory")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Storage configuration with the data directory resolved.
    pub fn data_config(&self) -> DataConfig {
        DataConfig::resolve(self.storage.data_dir.clone()).pretty(self.storage.pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.storage.pretty);
        assert!(config.storage.data_dir.is_none());
        assert_eq!(config.logging.filter, "info,zava=debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_takes_defaults() {
        let config = AppConfig::from_toml("[storage]\ndata_dir = \"/srv/zava\"\n").unwrap();
        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/srv/zava")));
        assert!(config.storage.pretty);
        assert_eq!(config.logging.filter, DEFAULT_LOG_FILTER);

        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = AppConfig::from_toml("[storage\npretty = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [(ENV_DATA_DIR, "/tmp/zava-data"), (ENV_LOG, "warn")]
            .into_iter()
            .collect();

        let mut config = AppConfig::default();
        config.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/tmp/zava-data")));
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();
        config.logging.filter = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = AppConfig::default();
        config.storage.data_dir = Some(PathBuf::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\npretty = false\n").unwrap();

        let config = AppConfig::load(Some(path)).unwrap();
        assert!(!config.storage.pretty);
        assert!(!config.data_config().pretty);
    }

    #[test]
    fn test_data_config_uses_explicit_dir() {
        let mut config = AppConfig::default();
        config.storage.data_dir = Some(PathBuf::from("/srv/zava"));
        assert_eq!(config.data_config().data_dir, PathBuf::from("/srv/zava"));
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(toml_str.contains("[storage]"));
        assert!(toml_str.contains("[logging]"));
    }
}
