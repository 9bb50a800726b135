//! # tsk CLI
//!
//! Command-line interface for the tasklist task manager.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use clap::{ArgGroup, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;

use tasklist::commands::{
    self, AddArgs, DeleteArgs, DisplayArgs, ListArgs, ModifyArgs, PriorityArgs, SearchArgs,
};
use tasklist::error::FatalError;

const GLOBAL_HELP: &str = "\
Configuration File:
  ~/.config/tasklist/config      Global configuration (task file path, date display)

Priorities:
  L  Low      shown in yellow
  M  Medium   shown in blue
  H  High     shown in red

Due Dates:
  Dates accept /, - or . as separator (e.g. 3/1/2025, 03-01-25, 3.1.25) and
  redisplay exactly as typed. Times use the form h:mm AM/PM and default to
  11:59 PM when omitted.

Getting Started:
  tsk add \"My first task\"        Record a task
  tsk list                       List all tasks
  tsk priority                   Group tasks by priority
  tsk modify 1 -c                Mark task 1 as completed

Learn more:
  tsk <COMMAND> --help           Show detailed help for a command";

#[derive(Parser)]
#[command(name = "tsk")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Command-line task manager with priorities, due dates, tags, and notes")]
#[command(
    long_about = "tsk is a command-line task manager. Tasks are stored in a single YAML file in \
your home directory, so the whole list is easy to read, back up, and sync.

Each task has a numeric ID, an optional priority, and optional due date, tags, and note. \
Due dates remember exactly how you typed them and come back in the same spelling. \
Listings color-code priorities and deadlines so the next thing to do stands out."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    #[command(
        long_about = "Add a new task to the list.\n\n\
The description is required; everything else is optional. A malformed priority, \
date, or time is dropped with a warning and the task is still recorded. A due \
date in the past is kept, with a warning.\n\n\
The due date keeps the separator and digit widths you typed, so '3/1/2025' \
always redisplays as '3/1/2025'. Without --time, due dates fall at 11:59 PM.",
        after_help = "Examples:\n  \
tsk add \"Buy milk\"\n  \
tsk add \"Write report\" -p H -d 3/1/2025\n  \
tsk add \"Call dentist\" -d 03-01-25 --time \"7:30 AM\"\n  \
tsk add \"Refactor parser\" -t \"work rust\" -n \"Start with the lexer\"\n\n\
Output: Prints the ID assigned to the new task."
    )]
    Add {
        /// What needs doing
        description: String,

        /// Priority: L, M, or H
        #[arg(short, long)]
        priority: Option<String>,

        /// Due date, e.g. 3/1/2025 or 03-01-25
        #[arg(short, long)]
        due: Option<String>,

        /// Due time in the form h:mm AM/PM (requires --due)
        #[arg(long, requires = "due")]
        time: Option<String>,

        /// Words to associate with the task
        #[arg(short, long)]
        tags: Option<String>,

        /// A lengthier description of the task
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List all tasks in ID order
    #[command(
        long_about = "List every task in ID order.\n\n\
Dates display humanized by default ('in 3 days'); pass -a for absolute dates \
in the spelling they were entered with. An asterisk after the description \
marks tasks that carry a note; 'tsk display <ID>' shows it.",
        after_help = "Examples:\n  \
tsk list               List with humanized dates\n  \
tsk list -a            List with absolute dates"
    )]
    List {
        /// Show absolute dates instead of humanized ones
        #[arg(short, long)]
        absolute: bool,
    },

    /// List tasks grouped by priority
    #[command(
        long_about = "List tasks grouped by priority.\n\n\
Groups appear in order: high, medium, low, unprioritized, completed. A \
completed task always lands in the completed group, whatever its priority. \
Within each group, tasks with a due date come first, earliest deadline first.",
        after_help = "Examples:\n  \
tsk priority           Grouped listing with humanized dates\n  \
tsk priority -a        Grouped listing with absolute dates"
    )]
    Priority {
        /// Show absolute dates instead of humanized ones
        #[arg(short, long)]
        absolute: bool,
    },

    /// Display a single task, including its note
    #[command(
        long_about = "Display one task in full.\n\n\
The list views truncate long descriptions and omit notes; this view shows \
both in full. An ID that does not match any task prints a warning and the \
command still succeeds.",
        after_help = "Examples:\n  \
tsk display 3          Show task 3 with its note"
    )]
    Display {
        /// ID of the task to show
        id: String,
    },

    /// Search tasks for a word or phrase
    #[command(
        long_about = "Search tasks for a word or phrase.\n\n\
The match is case-insensitive and runs over descriptions, notes, and tags. \
Matching tasks display in the usual table, in ID order.",
        after_help = "Examples:\n  \
tsk search report\n  \
tsk search \"dentist appointment\"\n  \
tsk search rust -a"
    )]
    Search {
        /// Word or phrase to look for
        term: String,

        /// Show absolute dates instead of humanized ones
        #[arg(short, long)]
        absolute: bool,
    },

    /// Modify one field of an existing task
    #[command(
        group = ArgGroup::new("field").required(true),
        long_about = "Modify exactly one field of an existing task.\n\n\
Give the task ID and one of: a new description, -c to mark completed, -p for \
priority, -d for due date (optionally with --time), -t for tags, or -n for \
the note. Exactly one field per invocation.\n\n\
Unlike add, an invalid priority or date here is an error and nothing changes.",
        after_help = "Examples:\n  \
tsk modify 3 \"New description\"\n  \
tsk modify 3 -c                     Mark completed\n  \
tsk modify 3 -p M                   Change priority\n  \
tsk modify 3 -d 4/1/2025 --time \"9:00 AM\"\n  \
tsk modify 3 -n \"Waiting on review\""
    )]
    Modify {
        /// ID of the task to change
        id: String,

        /// New description
        #[arg(group = "field")]
        description: Option<String>,

        /// Mark the task as completed
        #[arg(short, long, group = "field")]
        completed: bool,

        /// New priority: L, M, or H
        #[arg(short, long, group = "field")]
        priority: Option<String>,

        /// New due date, e.g. 4/1/2025
        #[arg(short, long, group = "field")]
        due: Option<String>,

        /// Due time in the form h:mm AM/PM (requires --due)
        #[arg(long, requires = "due")]
        time: Option<String>,

        /// New tags
        #[arg(short, long, group = "field")]
        tags: Option<String>,

        /// New note
        #[arg(short, long, group = "field")]
        note: Option<String>,
    },

    /// Delete a task
    #[command(
        long_about = "Delete a task.\n\n\
The remaining tasks are renumbered so IDs always run 1..N without gaps; the \
task that was number 3 becomes number 2 when task 1 goes away.",
        after_help = "Examples:\n  \
tsk delete 3           Remove task 3 and renumber"
    )]
    Delete {
        /// ID of the task to remove
        id: String,
    },

    /// Generate shell completion scripts
    #[command(
        long_about = "Generate a completion script for your shell and print it to stdout.\n\n\
Supported shells: bash, zsh, fish, elvish, powershell.",
        after_help = "Examples:\n  \
tsk completions zsh > ~/.zfunc/_tsk\n  \
tsk completions bash > ~/.local/share/bash-completion/completions/tsk"
    )]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        let code = err
            .downcast_ref::<FatalError>()
            .map_or(1, FatalError::exit_code);
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Add {
            description,
            priority,
            due,
            time,
            tags,
            note,
        } => commands::add(AddArgs {
            description,
            priority,
            due,
            time,
            tags,
            note,
        }),

        Commands::List { absolute } => commands::list(&ListArgs { absolute }),

        Commands::Priority { absolute } => commands::priority(&PriorityArgs { absolute }),

        Commands::Display { id } => commands::display(&DisplayArgs { id }),

        Commands::Search { term, absolute } => commands::search(&SearchArgs { term, absolute }),

        Commands::Modify {
            id,
            description,
            completed,
            priority,
            due,
            time,
            tags,
            note,
        } => commands::modify(ModifyArgs {
            id,
            description,
            completed,
            priority,
            due,
            time,
            tags,
            note,
        }),

        Commands::Delete { id } => commands::delete(&DeleteArgs { id }),

        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),
    }
}
