//! Configuration resolution for the CLI
//!
//! Priority order (highest to lowest):
//! 1. `--database-url`
//! 2. `--config <PATH>`, or `~/.taskctl/config.toml` when it exists
//! 3. `DATABASE_URL` / `TASKCTL_MAX_CONNECTIONS` (after loading `.env` files)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use taskctl_storage::StoreConfig;

/// Load `.env` from the current directory, then `~/.taskctl/.env`.
///
/// Runs before tracing is installed so `RUST_LOG` from a `.env` file takes
/// effect; returns the files it loaded for logging once the subscriber is up.
/// dotenvy never overwrites variables that are already set, so the current
/// directory wins over the home directory and the real environment wins over both.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded.push(env_file);
        }
    }

    loaded
}

/// `~/.taskctl`
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".taskctl"))
}

pub fn resolve(database_url: Option<&str>, config_file: Option<&Path>) -> Result<StoreConfig> {
    let mut config = match config_file {
        Some(path) => StoreConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => {
            let default_path = StoreConfig::config_path();
            if default_path.exists() {
                StoreConfig::load(&default_path)?
            } else {
                StoreConfig::from_env()?
            }
        }
    };

    if let Some(url) = database_url {
        config.database_url = url.to_string();
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "database_url = \"postgres://file/tasks\"\nmax_connections = 3\n",
        )
        .unwrap();

        let from_file = resolve(None, Some(&path)).unwrap();
        assert_eq!(from_file.database_url, "postgres://file/tasks");
        assert_eq!(from_file.max_connections, 3);

        let overridden = resolve(Some("postgres://flag/tasks"), Some(&path)).unwrap();
        assert_eq!(overridden.database_url, "postgres://flag/tasks");
        assert_eq!(overridden.max_connections, 3);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let err = resolve(None, Some(Path::new("/nonexistent/taskctl.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }
}
