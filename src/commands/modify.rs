//! # Modify Command
//!
//! Changes exactly one field of an existing task. Unlike add, a bad priority
//! or date here is fatal; the command would otherwise silently do nothing.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use chrono::Local;

use crate::{
    config::Config,
    date::{self, DueDate},
    error::FatalError,
    storage,
    task::TaskUpdate,
    ui,
};

/// Arguments for the modify command. Exactly one field is set; the CLI
/// enforces this before the command runs.
#[derive(Debug, Clone)]
pub struct ModifyArgs {
    pub id: String,
    pub description: Option<String>,
    pub completed: bool,
    pub priority: Option<String>,
    pub due: Option<String>,
    pub time: Option<String>,
    pub tags: Option<String>,
    pub note: Option<String>,
}

/// Executes the modify command.
pub fn execute(args: ModifyArgs) -> Result<()> {
    let config = Config::load()?;
    let path = storage::task_file_path(&config)?;
    let mut store = super::load_store(&path)?;

    // Validate before touching the store, so a bad value never half-applies.
    let update = build_update(&args)?;

    let id = args.id.parse::<u32>().ok();
    let modified = id.is_some_and(|id| store.modify(id, update));

    if modified {
        if let Some(task) = id.and_then(|id| store.find(id)) {
            ui::print_success("Modified", task);
        }
    } else {
        ui::print_warning(&format!("{} is not an existing task!", args.id));
    }

    storage::save(&path, store.tasks())
}

/// Turns the one present field into an update, validating as it goes.
fn build_update(args: &ModifyArgs) -> Result<TaskUpdate> {
    if let Some(description) = &args.description {
        return Ok(TaskUpdate::Description(description.clone()));
    }

    if let Some(input) = &args.priority {
        let priority = input.parse().map_err(|_| FatalError::InvalidPriority {
            input: input.clone(),
        })?;
        return Ok(TaskUpdate::Priority(priority));
    }

    if let Some(input) = &args.due {
        let (day, format) =
            date::parse_due_date(input).map_err(|_| FatalError::InvalidDate {
                input: input.clone(),
            })?;

        if day < Local::now().date_naive() {
            ui::print_warning("The due date provided occurs in the past.");
        }

        // The time stays lenient: dropping it leaves the default 11:59 PM.
        let time = args.time.as_deref().and_then(|input| {
            match date::parse_due_time(input) {
                Ok(time) => Some(time),
                Err(_) => {
                    ui::print_warning("Invalid time format. Dropping the due time.");
                    None
                }
            }
        });

        let due = match time {
            Some(time) => DueDate::with_time(day, format, time),
            None => DueDate::new(day, format),
        };
        return Ok(TaskUpdate::Due(due));
    }

    if let Some(tags) = &args.tags {
        return Ok(TaskUpdate::Tags(tags.clone()));
    }

    if let Some(note) = &args.note {
        return Ok(TaskUpdate::Note(note.clone()));
    }

    Ok(TaskUpdate::Completed)
}
