//! Store configuration
//!
//! Resolved from, in increasing priority: built-in defaults, environment
//! (`DATABASE_URL`, `TASKCTL_MAX_CONNECTIONS`), then a TOML file such as
//! `~/.taskctl/config.toml`:
//!
//! ```toml
//! database_url = "postgres://localhost/tasks"
//! max_connections = 5
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/tasks";

/// Kept low: the store serves one process.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl StoreConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Defaults overridden by `DATABASE_URL` and `TASKCTL_MAX_CONNECTIONS`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(raw) = env::var("TASKCTL_MAX_CONNECTIONS") {
            config.max_connections = raw.trim().parse().map_err(|_| {
                StoreError::config(format!("TASKCTL_MAX_CONNECTIONS is not a number: '{raw}'"))
            })?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| StoreError::config(format!("invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            StoreError::config(format!("failed to read {}: {e}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "loaded store config");
        Self::from_toml_str(&content)
    }

    /// `~/.taskctl/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".taskctl/config.toml")
    }

    fn validate(&self) -> Result<()> {
        if self.database_url.trim().is_empty() {
            return Err(StoreError::config("database_url cannot be empty"));
        }
        if self.max_connections == 0 {
            return Err(StoreError::config("max_connections must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_full_file() {
        let config = StoreConfig::from_toml_str(
            r#"
            database_url = "postgres://tasks@db/tracker"
            max_connections = 12
            "#,
        )
        .unwrap();
        assert_eq!(config.database_url, "postgres://tasks@db/tracker");
        assert_eq!(config.max_connections, 12);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config =
            StoreConfig::from_toml_str(r#"database_url = "postgres://localhost/x""#).unwrap();
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn rejects_zero_connections() {
        let err = StoreConfig::from_toml_str(
            r#"
            database_url = "postgres://localhost/x"
            max_connections = 0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::Config { .. }));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = StoreConfig::from_toml_str("database_url = ").unwrap_err();
        assert!(err.to_string().contains("invalid TOML"));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"database_url = "postgres://file/tasks""#).unwrap();

        let config = StoreConfig::load(file.path()).unwrap();
        assert_eq!(config.database_url, "postgres://file/tasks");
    }

    #[test]
    fn load_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = StoreConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, StoreError::Config { .. }));
    }
}
