//! # Priority Command
//!
//! Lists tasks grouped by priority: high, medium, low, unprioritized, then
//! completed.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{config::Config, storage, task::query, ui};

/// Arguments for the priority command
#[derive(Debug, Clone, Copy)]
pub struct PriorityArgs {
    /// Show absolute dates instead of humanized ones
    pub absolute: bool,
}

/// Executes the priority command.
pub fn execute(args: &PriorityArgs) -> Result<()> {
    let config = Config::load()?;
    let path = storage::task_file_path(&config)?;
    let store = super::load_store(&path)?;

    if store.is_empty() {
        println!("There are no tasks to display!");
    } else {
        let view = query::by_priority(store.tasks());
        ui::render_by_priority(&view, args.absolute || config.absolute_dates());
    }

    storage::save(&path, store.tasks())
}
