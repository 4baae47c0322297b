//! Key-space configuration file
//!
//! JSON object, every field optional:
//!
//! ```json
//! {
//!   "key_size_limit": 10000,
//!   "system_key_size_limit": 30000,
//!   "split_key_size_limit": 5000,
//!   "storage_engine": "ssd-2",
//!   "random_seed": 42
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::StorageEngineKind;
use crate::observability::{log_event_with_fields, Event};

use super::errors::{ConfigError, ConfigResult};
use super::limits::KeyLimits;

/// Key-space configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyspaceConfig {
    /// Largest user key in bytes (default 10000)
    #[serde(default = "default_key_size_limit")]
    pub key_size_limit: usize,

    /// Largest system key in bytes (default 30000)
    #[serde(default = "default_system_key_size_limit")]
    pub system_key_size_limit: usize,

    /// Separator search bound in bytes (default 5000)
    #[serde(default = "default_split_key_size_limit")]
    pub split_key_size_limit: usize,

    /// Engine for newly created clusters (default "ssd-2")
    #[serde(default = "default_storage_engine")]
    pub storage_engine: StorageEngineKind,

    /// Seed for reproducible random boundaries; drawn from the OS when absent
    #[serde(default)]
    pub random_seed: Option<u64>,
}

fn default_key_size_limit() -> usize {
    10_000
}
fn default_system_key_size_limit() -> usize {
    30_000
}
fn default_split_key_size_limit() -> usize {
    default_key_size_limit() / 2
}
fn default_storage_engine() -> StorageEngineKind {
    StorageEngineKind::SsdBtreeV2
}

impl Default for KeyspaceConfig {
    fn default() -> Self {
        Self {
            key_size_limit: default_key_size_limit(),
            system_key_size_limit: default_system_key_size_limit(),
            split_key_size_limit: default_split_key_size_limit(),
            storage_engine: default_storage_engine(),
            random_seed: None,
        }
    }
}

impl KeyspaceConfig {
    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|e| {
            let err = ConfigError::read(&display, e);
            log_event_with_fields(
                Event::ConfigRejected,
                &[("path", &display), ("reason", &err.to_string())],
            );
            err
        })?;

        let config = Self::from_json_str(&content).map_err(|err| {
            log_event_with_fields(
                Event::ConfigRejected,
                &[("path", &display), ("reason", err.message())],
            );
            err
        })?;

        log_event_with_fields(
            Event::ConfigLoaded,
            &[
                ("path", &display),
                ("split_key_size_limit", &config.split_key_size_limit.to_string()),
                ("storage_engine", config.storage_engine.name()),
            ],
        );
        Ok(config)
    }

    /// Parse and validate configuration from JSON text
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: KeyspaceConfig = serde_json::from_str(content).map_err(ConfigError::parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> ConfigResult<()> {
        if self.key_size_limit == 0 {
            return Err(ConfigError::invalid("key_size_limit must be > 0"));
        }
        if self.split_key_size_limit == 0 {
            return Err(ConfigError::invalid("split_key_size_limit must be > 0"));
        }
        if self.split_key_size_limit > self.key_size_limit {
            return Err(ConfigError::invalid(format!(
                "split_key_size_limit ({}) must not exceed key_size_limit ({})",
                self.split_key_size_limit, self.key_size_limit
            )));
        }
        if self.system_key_size_limit < self.key_size_limit {
            return Err(ConfigError::invalid(format!(
                "system_key_size_limit ({}) must be at least key_size_limit ({})",
                self.system_key_size_limit, self.key_size_limit
            )));
        }
        Ok(())
    }
}

impl KeyLimits for KeyspaceConfig {
    fn key_size_limit(&self) -> usize {
        self.key_size_limit
    }

    fn system_key_size_limit(&self) -> usize {
        self.system_key_size_limit
    }

    fn split_key_size_limit(&self) -> usize {
        self.split_key_size_limit
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::config::ConfigErrorCode;
    use crate::key::Key;

    #[test]
    fn test_defaults() {
        let config = KeyspaceConfig::default();
        assert_eq!(config.key_size_limit, 10_000);
        assert_eq!(config.system_key_size_limit, 30_000);
        assert_eq!(config.split_key_size_limit, 5_000);
        assert_eq!(config.storage_engine, StorageEngineKind::SsdBtreeV2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = KeyspaceConfig::from_json_str("{}").unwrap();
        assert_eq!(config, KeyspaceConfig::default());
    }

    #[test]
    fn test_engine_alias_accepted() {
        let config = KeyspaceConfig::from_json_str(r#"{"storage_engine": "redwood"}"#).unwrap();
        assert_eq!(config.storage_engine, StorageEngineKind::SsdRedwoodV1);
    }

    #[test]
    fn test_unknown_engine_rejected() {
        let err = KeyspaceConfig::from_json_str(r#"{"storage_engine": "btree"}"#).unwrap_err();
        assert_eq!(err.code(), ConfigErrorCode::Parse);
        assert!(err.message().contains("btree"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = KeyspaceConfig::from_json_str(r#"{"key_limit": 5}"#).unwrap_err();
        assert_eq!(err.code(), ConfigErrorCode::Parse);
    }

    #[test]
    fn test_split_limit_above_key_limit_rejected() {
        let err = KeyspaceConfig::from_json_str(
            r#"{"key_size_limit": 100, "split_key_size_limit": 101}"#,
        )
        .unwrap_err();
        assert_eq!(err.code(), ConfigErrorCode::Invalid);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = KeyspaceConfig::from_json_str(r#"{"split_key_size_limit": 0}"#).unwrap_err();
        assert_eq!(err.code(), ConfigErrorCode::Invalid);
    }

    #[test]
    fn test_max_key_size_depends_on_key_space() {
        let config = KeyspaceConfig::default();
        assert_eq!(config.max_key_size(&Key::from("user")), 10_000);
        assert_eq!(config.max_key_size(&Key::from(&[0xFFu8, b'/'])), 30_000);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"split_key_size_limit": 16, "random_seed": 7}}"#).unwrap();

        let config = KeyspaceConfig::load(file.path()).unwrap();
        assert_eq!(config.split_key_size_limit, 16);
        assert_eq!(config.random_seed, Some(7));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = KeyspaceConfig::load(&dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.code(), ConfigErrorCode::Read);
    }
}
