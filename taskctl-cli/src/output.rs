//! Rendering tasks for the terminal

use anyhow::Result;
use chrono::DateTime;
use clap::ValueEnum;
use taskctl_storage::Task;

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

pub fn render_tasks(tasks: &[Task], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tasks)?),
        OutputFormat::Table if tasks.is_empty() => Ok("No tasks found".to_string()),
        OutputFormat::Table => {
            let mut out = format!(
                "{:<6} {:<26} {:<26} {:<8} {:<8} {}",
                "ID", "OPENED", "CLOSED", "AUTHOR", "ASSIGNEE", "TITLE"
            );
            for task in tasks {
                out.push('\n');
                out.push_str(&format!(
                    "{:<6} {:<26} {:<26} {:<8} {:<8} {}",
                    task.id,
                    format_timestamp(task.opened),
                    format_closed(task),
                    format_user(task.author_id),
                    format_user(task.assigned_id),
                    task.title
                ));
            }
            Ok(out)
        }
    }
}

pub fn render_task(task: &Task, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(task)?),
        OutputFormat::Table => Ok(format!(
            "id:       {}\ntitle:    {}\nopened:   {}\nclosed:   {}\nauthor:   {}\nassignee: {}\n\n{}",
            task.id,
            task.title,
            format_timestamp(task.opened),
            format_closed(task),
            format_user(task.author_id),
            format_user(task.assigned_id),
            task.content
        )),
    }
}

/// Epoch seconds as RFC 3339; 0 means unset.
fn format_timestamp(secs: i64) -> String {
    if secs == 0 {
        return "-".to_string();
    }
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| secs.to_string())
}

fn format_closed(task: &Task) -> String {
    if task.is_closed() {
        format_timestamp(task.closed)
    } else {
        "open".to_string()
    }
}

fn format_user(id: i64) -> String {
    if id == 0 {
        "-".to_string()
    } else {
        id.to_string()
    }
}
