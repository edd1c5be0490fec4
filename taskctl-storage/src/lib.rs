//! taskctl-storage: PostgreSQL task store
//!
//! Typed CRUD over the `tasks` table, with tag lookups reading through the
//! `labels` / `tasks_labels` association. The schema is owned elsewhere; this
//! crate only issues parameterized statements against it.

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use config::StoreConfig;
pub use db::TaskStore;
pub use error::{Result, StoreError};
pub use models::Task;
