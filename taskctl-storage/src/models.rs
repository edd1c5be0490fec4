//! Domain model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A unit of work with authorship, assignment, timestamps and free text.
///
/// Timestamps are epoch seconds. Zero in `closed`, `author_id` or
/// `assigned_id` means "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub opened: i64,
    pub closed: i64,
    pub author_id: i64,
    pub assigned_id: i64,
    pub title: String,
    pub content: String,
}

impl Task {
    /// Task carrying only the fields `TaskStore::new_task` persists.
    pub fn draft(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed != 0
    }
}
