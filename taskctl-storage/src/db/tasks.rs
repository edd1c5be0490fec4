//! Task store
//!
//! Each operation issues exactly one parameterized statement:
//! - lookups share the `TASK_COLUMNS` projection and decode through `Task: FromRow`
//! - tag lookup: correlated EXISTS over the association (no N+1)
//! - update/delete: affected-row count is logged, never turned into an error

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{debug, info, instrument};

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::models::Task;

/// Projection shared by every lookup. Unset integer columns read back as 0;
/// the casts let `INTEGER`/`SERIAL` columns decode into `i64`.
const TASK_COLUMNS: &str = r#"
    t.id::BIGINT AS id,
    COALESCE(t.opened, 0)::BIGINT AS opened,
    COALESCE(t.closed, 0)::BIGINT AS closed,
    COALESCE(t.author_id, 0)::BIGINT AS author_id,
    COALESCE(t.assigned_id, 0)::BIGINT AS assigned_id,
    t.title,
    t.content
"#;

/// Handle over the task tables. Clones share one pool.
#[derive(Debug, Clone)]
pub struct TaskStore {
    pool: PgPool,
}

impl TaskStore {
    /// Connect with default pool settings.
    pub async fn connect(database_url: &str) -> Result<Self> {
        Self::connect_with(&StoreConfig::new(database_url)).await
    }

    /// One connection is established eagerly, so a malformed URL or an
    /// unreachable server is reported here rather than on first use.
    pub async fn connect_with(config: &StoreConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .map_err(StoreError::Connection)?;

        info!(
            max_connections = config.max_connections,
            "connected to task store"
        );
        Ok(Self { pool })
    }

    /// Wrap an existing pool (tests, callers that share a pool).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close the pool, waiting for checked-out connections to be returned.
    /// Later operations on any clone fail with `StoreError::Query`.
    pub async fn close(&self) {
        self.pool.close().await;
        debug!("task store closed");
    }

    /// Tasks created by `author_id`, in no particular order.
    #[instrument(skip(self))]
    pub async fn tasks_by_author(&self, author_id: i64) -> Result<Vec<Task>> {
        let tasks: Vec<Task> = sqlx::query_as(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks t WHERE t.author_id = $1"
        ))
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = tasks.len(), "fetched tasks by author");
        Ok(tasks)
    }

    /// Tasks linked to a label named exactly `tag` (case-sensitive).
    #[instrument(skip(self))]
    pub async fn tasks_by_tag(&self, tag: &str) -> Result<Vec<Task>> {
        let tasks: Vec<Task> = sqlx::query_as(&format!(
            r#"
            SELECT {TASK_COLUMNS}
            FROM tasks t
            WHERE EXISTS (
                SELECT 1
                FROM tasks_labels tl
                JOIN labels l ON l.id = tl.label_id
                WHERE tl.task_id = t.id
                AND l.name = $1
            )
            "#
        ))
        .bind(tag)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = tasks.len(), "fetched tasks by tag");
        Ok(tasks)
    }

    #[instrument(skip(self))]
    pub async fn task_by_id(&self, id: i64) -> Result<Task> {
        let task: Task = sqlx::query_as(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks t WHERE t.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound { id })?;

        Ok(task)
    }

    /// Insert a task and return its store-assigned id.
    ///
    /// Only `title` and `content` are written. `opened`, `closed`, `author_id`
    /// and `assigned_id` are ignored and take the column defaults; set them
    /// afterwards with [`TaskStore::update_task`].
    #[instrument(skip(self, task), fields(title = %task.title))]
    pub async fn new_task(&self, task: &Task) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO tasks (title, content)
            VALUES ($1, $2)
            RETURNING id::BIGINT
            "#,
        )
        .bind(&task.title)
        .bind(&task.content)
        .fetch_one(&self.pool)
        .await?;

        debug!(id, "created task");
        Ok(id)
    }

    /// Overwrite every mutable column of the row `task.id`.
    ///
    /// A missing id matches zero rows and still returns `Ok(())`.
    #[instrument(skip(self, task), fields(id = task.id))]
    pub async fn update_task(&self, task: &Task) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET opened = $1,
                closed = $2,
                author_id = $3,
                assigned_id = $4,
                title = $5,
                content = $6
            WHERE id = $7
            "#,
        )
        .bind(task.opened)
        .bind(task.closed)
        .bind(task.author_id)
        .bind(task.assigned_id)
        .bind(&task.title)
        .bind(&task.content)
        .bind(task.id)
        .execute(&self.pool)
        .await?;

        debug!(rows = result.rows_affected(), "updated task");
        Ok(())
    }

    /// Delete a task (idempotent).
    #[instrument(skip(self))]
    pub async fn delete_task_by_id(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(rows = result.rows_affected(), "deleted task");
        Ok(())
    }
}
