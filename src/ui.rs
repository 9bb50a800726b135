//! # UI Utilities
//!
//! Table rendering, date humanization, and the color treatment of
//! priorities and deadlines.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use chrono::{DateTime, Duration, Local};
use owo_colors::OwoColorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    constants::{
        COL_CREATED_WIDTH, COL_DESCRIPTION_WIDTH, COL_DUE_WIDTH, COL_ID_WIDTH, COL_NOTE_WIDTH,
        COL_PRIORITY_WIDTH, COL_TAGS_WIDTH,
    },
    date,
    task::query::{self, Highlight, PriorityView},
    task::Task,
};

/// Marker appended to descriptions of tasks that carry a note.
const NOTE_MARKER: &str = " *";

// =============================================================================
// Messages
// =============================================================================

/// Prints a warning with a yellow prefix.
pub fn print_warning(warning: &str) {
    eprintln!("{} {}", "warning:".yellow(), warning);
}

/// Prints a success message for a task.
///
/// Format: `✓ {verb} task {id}: {description}`
pub fn print_success(verb: &str, task: &Task) {
    println!(
        "{} {} task {}: {}",
        "✓".green(),
        verb,
        task.id(),
        task.description()
    );
}

// =============================================================================
// Tables
// =============================================================================

/// Renders tasks as a table in the given order, ID column first.
pub fn render_tasks(tasks: &[&Task], absolute: bool) {
    let now = Local::now();
    print_header(false);
    for task in tasks {
        println!("{}", task_row(task, absolute, now, false));
    }
    print_legend();
}

/// Renders the priority view as a single table, priority column first.
/// Buckets appear back to back in display order without separators.
pub fn render_by_priority(view: &PriorityView, absolute: bool) {
    let now = Local::now();
    print_header(true);
    for (_, tasks) in view.buckets() {
        for task in tasks {
            println!("{}", task_row(task, absolute, now, true));
        }
    }
    print_legend();
}

/// Renders a single task with its full note.
pub fn render_detail(task: &Task) {
    println!();
    println!(
        "{} {} {} {}",
        center("ID", COL_ID_WIDTH),
        center("Pri", COL_PRIORITY_WIDTH),
        pad("Description", COL_DESCRIPTION_WIDTH),
        pad("Note", COL_NOTE_WIDTH),
    );
    println!(
        "{} {} {} {}",
        "-".repeat(COL_ID_WIDTH),
        "-".repeat(COL_PRIORITY_WIDTH),
        "-".repeat(COL_DESCRIPTION_WIDTH),
        "-".repeat(COL_NOTE_WIDTH),
    );
    println!(
        "{} {} {} {}",
        center(&task.id().to_string(), COL_ID_WIDTH),
        priority_cell(task),
        pad(task.description(), COL_DESCRIPTION_WIDTH),
        pad(task.note().unwrap_or(""), COL_NOTE_WIDTH),
    );
}

fn print_header(priority_first: bool) {
    let (first, second) = if priority_first {
        ("Pri", "ID")
    } else {
        ("ID", "Pri")
    };
    println!();
    println!(
        "{} {} {} {} {} {}",
        center(first, COL_ID_WIDTH),
        center(second, COL_PRIORITY_WIDTH),
        pad("Due", COL_DUE_WIDTH),
        pad("Created", COL_CREATED_WIDTH),
        pad("Description", COL_DESCRIPTION_WIDTH),
        pad("Tags", COL_TAGS_WIDTH),
    );
    println!(
        "{} {} {} {} {} {}",
        "-".repeat(COL_ID_WIDTH),
        "-".repeat(COL_PRIORITY_WIDTH),
        "-".repeat(COL_DUE_WIDTH),
        "-".repeat(COL_CREATED_WIDTH),
        "-".repeat(COL_DESCRIPTION_WIDTH),
        "-".repeat(COL_TAGS_WIDTH),
    );
}

fn print_legend() {
    println!();
    println!(
        "Legend: Not Due  {}  {}  {}  {}",
        "Upcoming".cyan().bold(),
        "Due".blue().bold(),
        "Overdue".red().bold(),
        "Completed".dimmed(),
    );
}

fn task_row(task: &Task, absolute: bool, now: DateTime<Local>, priority_first: bool) -> String {
    let id = center(&task.id().to_string(), COL_ID_WIDTH);
    let priority_plain = center(
        &task.priority().map(|p| p.to_string()).unwrap_or_default(),
        COL_PRIORITY_WIDTH,
    );

    let due_text = task.due().map_or_else(String::new, |due| {
        if absolute {
            due.to_string()
        } else {
            humanize(due.deadline(), now)
        }
    });
    let due_plain = pad(&due_text, COL_DUE_WIDTH);

    let created_text = if absolute {
        task.created_at().format("%m/%d/%Y").to_string()
    } else {
        humanize(task.created_at(), now)
    };
    let created = pad(&created_text, COL_CREATED_WIDTH);

    let marker = if task.note().is_some() { NOTE_MARKER } else { "" };
    let description = pad(
        &format!(
            "{}{marker}",
            truncate(task.description(), COL_DESCRIPTION_WIDTH - marker.len())
        ),
        COL_DESCRIPTION_WIDTH,
    );

    let tags = pad(task.tags().unwrap_or(""), COL_TAGS_WIDTH);

    // Completed rows are dimmed wholesale and never urgency-colored.
    if task.completed() {
        let row = if priority_first {
            format!("{priority_plain} {id} {due_plain} {created} {description} {tags}")
        } else {
            format!("{id} {priority_plain} {due_plain} {created} {description} {tags}")
        };
        return row.dimmed().to_string();
    }

    let priority = match task.priority() {
        Some(p) => paint(&priority_plain, query::priority_highlight(p)),
        None => priority_plain,
    };
    let due = match task.due() {
        Some(d) => paint(
            &due_plain,
            query::due_highlight(date::urgency(d.deadline(), now)),
        ),
        None => due_plain,
    };

    if priority_first {
        format!("{priority} {id} {due} {created} {description} {tags}")
    } else {
        format!("{id} {priority} {due} {created} {description} {tags}")
    }
}

fn priority_cell(task: &Task) -> String {
    let plain = center(
        &task.priority().map(|p| p.to_string()).unwrap_or_default(),
        COL_PRIORITY_WIDTH,
    );
    match task.priority() {
        Some(p) => paint(&plain, query::priority_highlight(p)),
        None => plain,
    }
}

/// Wraps text in the color treatment for a highlight.
fn paint(text: &str, highlight: Highlight) -> String {
    match highlight {
        Highlight::Caution => text.yellow().bold().to_string(),
        Highlight::Notice => text.blue().bold().to_string(),
        Highlight::Critical => text.red().bold().to_string(),
        Highlight::Distant => text.cyan().bold().to_string(),
        Highlight::Muted => text.dimmed().to_string(),
    }
}

// =============================================================================
// Dates
// =============================================================================

/// Renders an instant relative to `now`, like `in 3 days` or `2 hours ago`.
pub fn humanize(instant: DateTime<Local>, now: DateTime<Local>) -> String {
    let delta = instant.signed_duration_since(now);
    let future = delta > Duration::zero();
    let secs = delta.num_seconds().unsigned_abs();

    let phrase = match secs {
        0..=44 => return "just now".to_string(),
        45..=89 => "a minute".to_string(),
        90..=2_699 => format!("{} minutes", (secs + 30) / 60),
        2_700..=5_399 => "an hour".to_string(),
        5_400..=79_199 => format!("{} hours", (secs + 1_800) / 3_600),
        79_200..=129_599 => "a day".to_string(),
        129_600..=2_246_399 => format!("{} days", (secs + 43_200) / 86_400),
        2_246_400..=3_887_999 => "a month".to_string(),
        3_888_000..=27_647_999 => format!("{} months", (secs + 1_296_000) / 2_592_000),
        27_648_000..=47_347_199 => "a year".to_string(),
        _ => format!("{} years", (secs + 15_768_000) / 31_536_000),
    };

    if future {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

// =============================================================================
// String Utilities
// =============================================================================

/// Truncates a string to the given display width, adding an ellipsis if
/// truncated. Width-aware, so wide characters count for two columns.
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Left-justifies a string to the given display width.
pub fn pad(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - w))
    }
}

/// Centers a string in the given display width.
pub fn center(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        return s.to_string();
    }
    let left = (width - w) / 2;
    let right = width - w - left;
    format!("{}{s}{}", " ".repeat(left), " ".repeat(right))
}
