//! # Search Command
//!
//! Case-insensitive search across descriptions, notes, and tags.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{config::Config, storage, ui};

/// Arguments for the search command
#[derive(Debug, Clone)]
pub struct SearchArgs {
    /// Word or phrase to look for
    pub term: String,
    /// Show absolute dates instead of humanized ones
    pub absolute: bool,
}

/// Executes the search command.
pub fn execute(args: &SearchArgs) -> Result<()> {
    let config = Config::load()?;
    let path = storage::task_file_path(&config)?;
    let store = super::load_store(&path)?;

    let matches = store.search(&args.term);
    if matches.is_empty() {
        println!("There were no tasks containing \"{}\".", args.term);
    } else {
        ui::render_tasks(&matches, args.absolute || config.absolute_dates());
    }

    storage::save(&path, store.tasks())
}
