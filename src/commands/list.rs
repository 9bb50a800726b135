//! # List Command
//!
//! Lists every task in ID order.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{config::Config, storage, task::query, ui};

/// Arguments for the list command
#[derive(Debug, Clone, Copy)]
pub struct ListArgs {
    /// Show absolute dates instead of humanized ones
    pub absolute: bool,
}

/// Executes the list command.
pub fn execute(args: &ListArgs) -> Result<()> {
    let config = Config::load()?;
    let path = storage::task_file_path(&config)?;
    let store = super::load_store(&path)?;

    if store.is_empty() {
        println!("There are no tasks to display!");
    } else {
        let view = query::by_id(store.tasks());
        ui::render_tasks(&view, args.absolute || config.absolute_dates());
    }

    storage::save(&path, store.tasks())
}
