//! taskctl CLI - inspect and edit tasks in the PostgreSQL task store
//!
//! Each subcommand maps to exactly one `TaskStore` operation:
//! - `by-author`, `by-tag`, `show` read
//! - `create`, `update`, `delete` write

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use taskctl_storage::TaskStore;

mod commands;
mod config;
mod output;
mod tracing_setup;

use output::OutputFormat;
use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "taskctl",
    author,
    version,
    about = "Query and edit tasks stored in PostgreSQL"
)]
struct Cli {
    /// PostgreSQL connection URL (overrides config file and DATABASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    database_url: Option<String>,

    /// Config file (default: ~/.taskctl/config.toml if present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Enable debug logging (per-query spans)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List tasks created by an author
    ByAuthor {
        /// Author user ID
        author_id: i64,
    },
    /// List tasks carrying a label (exact, case-sensitive name)
    ByTag {
        /// Label name
        tag: String,
    },
    /// Show a single task
    Show {
        /// Task ID
        id: i64,
    },
    /// Create a task from a title and content; prints the new ID
    Create(commands::CreateArgs),
    /// Overwrite every field of a task
    Update(commands::UpdateArgs),
    /// Delete a task (no error if it does not exist)
    Delete {
        /// Task ID
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_files = config::load_dotenv();
    init_tracing(&TracingConfig { debug: cli.debug })?;
    for path in &env_files {
        tracing::debug!("Loaded .env from {}", path.display());
    }

    let store_config = config::resolve(cli.database_url.as_deref(), cli.config.as_deref())?;
    let store = TaskStore::connect_with(&store_config)
        .await
        .context("Failed to connect to the task database")?;

    let result = run(&store, cli.command, cli.format).await;
    store.close().await;
    result
}

async fn run(store: &TaskStore, command: Commands, format: OutputFormat) -> Result<()> {
    match command {
        Commands::ByAuthor { author_id } => commands::by_author(store, author_id, format).await,
        Commands::ByTag { tag } => commands::by_tag(store, &tag, format).await,
        Commands::Show { id } => commands::show(store, id, format).await,
        Commands::Create(args) => commands::create(store, args).await,
        Commands::Update(args) => commands::update(store, args).await,
        Commands::Delete { id } => commands::delete(store, id).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn update_requires_every_field() {
        let err = Cli::try_parse_from(["taskctl", "update", "1", "--title", "Fixed"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn update_builds_full_task() {
        let cli = Cli::try_parse_from([
            "taskctl",
            "update",
            "1",
            "--opened",
            "1000",
            "--closed",
            "2000",
            "--author-id",
            "5",
            "--assigned-id",
            "7",
            "--title",
            "Fixed",
            "--content",
            "patched",
        ])
        .unwrap();

        let Commands::Update(args) = cli.command else {
            panic!("expected update");
        };
        let task = taskctl_storage::Task::from(args);
        assert_eq!(task.id, 1);
        assert_eq!(task.closed, 2000);
        assert_eq!(task.assigned_id, 7);
        assert_eq!(task.content, "patched");
    }

    #[test]
    fn format_flag_is_global() {
        let cli = Cli::try_parse_from(["taskctl", "by-tag", "bug", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
