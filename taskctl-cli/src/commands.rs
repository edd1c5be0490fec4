//! Subcommand handlers - one store call each

use anyhow::{Context, Result};
use clap::Args;
use taskctl_storage::{StoreError, Task, TaskStore};

use crate::output::{render_task, render_tasks, OutputFormat};

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Task title
    #[arg(long)]
    pub title: String,

    /// Task body
    #[arg(long, default_value = "")]
    pub content: String,
}

/// Every field is required: update replaces the whole row.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Task ID to overwrite
    pub id: i64,

    /// Opened timestamp (epoch seconds)
    #[arg(long)]
    pub opened: i64,

    /// Closed timestamp (epoch seconds, 0 = open)
    #[arg(long)]
    pub closed: i64,

    /// Author user ID
    #[arg(long)]
    pub author_id: i64,

    /// Assigned user ID (0 = unassigned)
    #[arg(long)]
    pub assigned_id: i64,

    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub content: String,
}

impl From<UpdateArgs> for Task {
    fn from(args: UpdateArgs) -> Self {
        Task {
            id: args.id,
            opened: args.opened,
            closed: args.closed,
            author_id: args.author_id,
            assigned_id: args.assigned_id,
            title: args.title,
            content: args.content,
        }
    }
}

pub async fn by_author(store: &TaskStore, author_id: i64, format: OutputFormat) -> Result<()> {
    let tasks = store
        .tasks_by_author(author_id)
        .await
        .with_context(|| format!("Failed to list tasks for author {author_id}"))?;
    println!("{}", render_tasks(&tasks, format)?);
    Ok(())
}

pub async fn by_tag(store: &TaskStore, tag: &str, format: OutputFormat) -> Result<()> {
    let tasks = store
        .tasks_by_tag(tag)
        .await
        .with_context(|| format!("Failed to list tasks tagged '{tag}'"))?;
    println!("{}", render_tasks(&tasks, format)?);
    Ok(())
}

pub async fn show(store: &TaskStore, id: i64, format: OutputFormat) -> Result<()> {
    match store.task_by_id(id).await {
        Ok(task) => {
            println!("{}", render_task(&task, format)?);
            Ok(())
        }
        Err(StoreError::NotFound { id }) => anyhow::bail!("task {id} not found"),
        Err(e) => Err(e).with_context(|| format!("Failed to load task {id}")),
    }
}

pub async fn create(store: &TaskStore, args: CreateArgs) -> Result<()> {
    let id = store
        .new_task(&Task::draft(args.title, args.content))
        .await
        .context("Failed to create task")?;
    println!("{id}");
    Ok(())
}

pub async fn update(store: &TaskStore, args: UpdateArgs) -> Result<()> {
    let task = Task::from(args);
    store
        .update_task(&task)
        .await
        .with_context(|| format!("Failed to update task {}", task.id))
}

pub async fn delete(store: &TaskStore, id: i64) -> Result<()> {
    store
        .delete_task_by_id(id)
        .await
        .with_context(|| format!("Failed to delete task {id}"))
}
