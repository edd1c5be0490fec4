//! Database layer - the task store
//!
//! # Design Principles
//!
//! - One pool owned by an explicitly constructed `TaskStore` (no globals)
//! - One statement per operation, no transactions
//! - Tag lookups are a single semi-join - no N+1 queries

pub mod tasks;

pub use tasks::TaskStore;
