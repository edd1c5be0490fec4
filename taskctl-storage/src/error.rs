//! Error types for taskctl-storage

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Pool could not be established (malformed URL, unreachable server)
    #[error("connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// Single-row lookup matched nothing
    #[error("not found: task '{id}'")]
    NotFound { id: i64 },

    /// Statement failed or a row did not decode into a task
    #[error("query error: {0}")]
    Query(#[from] sqlx::Error),

    #[error("configuration error: {reason}")]
    Config { reason: String },
}

impl StoreError {
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// True when the error means "no such task" rather than an infrastructure fault.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = StoreError::NotFound { id: 42 };
        assert_eq!(err.to_string(), "not found: task '42'");
        assert!(err.is_not_found());
    }

    #[test]
    fn sqlx_errors_become_query_errors() {
        let err: StoreError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, StoreError::Query(sqlx::Error::PoolClosed)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn config_error_display() {
        let err = StoreError::config("max_connections must be positive");
        assert_eq!(
            err.to_string(),
            "configuration error: max_connections must be positive"
        );
    }
}
