//! # Add Command
//!
//! Records a new task. Bad optional fields are dropped with a warning so a
//! half-valid invocation still captures the task.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use chrono::Local;

use crate::{
    config::Config,
    date::{self, DueDate},
    storage,
    task::{Priority, TaskStore},
    ui,
};

/// Arguments for the add command
#[derive(Debug, Clone)]
pub struct AddArgs {
    pub description: String,
    pub priority: Option<String>,
    pub due: Option<String>,
    pub time: Option<String>,
    pub tags: Option<String>,
    pub note: Option<String>,
}

/// Executes the add command.
pub fn execute(args: AddArgs) -> Result<()> {
    let config = Config::load()?;
    let path = storage::task_file_path(&config)?;

    let priority = parse_priority(args.priority.as_deref());
    let due = parse_due(args.due.as_deref(), args.time.as_deref());

    // A missing task file just means this is the first task.
    let tasks = storage::load(&path)?.unwrap_or_default();
    let mut store = TaskStore::from_tasks(tasks);

    let task = store.add(args.description, priority, due, args.tags, args.note);
    ui::print_success("Added", task);

    storage::save(&path, store.tasks())
}

/// Parses the priority, dropping it with a warning when invalid.
fn parse_priority(input: Option<&str>) -> Option<Priority> {
    let input = input?;
    match input.parse() {
        Ok(priority) => Some(priority),
        Err(_) => {
            ui::print_warning("The priority given is not valid. Removing it.");
            None
        }
    }
}

/// Parses the due date and time, dropping whichever part is invalid.
/// A past date is kept; it only draws a warning.
fn parse_due(date_input: Option<&str>, time_input: Option<&str>) -> Option<DueDate> {
    let date_input = date_input?;

    let (day, format) = match date::parse_due_date(date_input) {
        Ok(parsed) => parsed,
        Err(err) => {
            ui::print_warning(&format!("{err}. Removing it."));
            return None;
        }
    };

    if day < Local::now().date_naive() {
        ui::print_warning("The due date provided occurs in the past.");
    }

    let time = time_input.and_then(|input| match date::parse_due_time(input) {
        Ok(time) => Some(time),
        Err(_) => {
            ui::print_warning("Invalid time format. Dropping the due time.");
            None
        }
    });

    Some(match time {
        Some(time) => DueDate::with_time(day, format, time),
        None => DueDate::new(day, format),
    })
}
