//! # Integration Tests: `add` Command
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use chrono::{NaiveDate, NaiveTime};

use common::TestEnv;
use tasklist::commands::{self, AddArgs};
use tasklist::Priority;

/// An `add` invocation with only a description.
fn plain(description: &str) -> AddArgs {
    AddArgs {
        description: description.to_string(),
        priority: None,
        due: None,
        time: None,
        tags: None,
        note: None,
    }
}

#[test]
fn test_add_creates_task_file() {
    let env = TestEnv::new();
    assert!(!env.task_file_path().exists());

    commands::add(plain("Buy milk")).unwrap();

    let tasks = env.load_tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id(), 1);
    assert_eq!(tasks[0].description(), "Buy milk");
    assert!(tasks[0].priority().is_none());
    assert!(tasks[0].due().is_none());
    assert!(tasks[0].tags().is_none());
    assert!(tasks[0].note().is_none());
    assert!(!tasks[0].completed());
}

#[test]
fn test_add_assigns_sequential_ids() {
    let env = TestEnv::new();

    commands::add(plain("First")).unwrap();
    commands::add(plain("Second")).unwrap();
    commands::add(plain("Third")).unwrap();

    let tasks = env.load_tasks();
    let ids: Vec<u32> = tasks.iter().map(tasklist::Task::id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_add_with_priority_tags_and_note() {
    let env = TestEnv::new();

    commands::add(AddArgs {
        description: "File taxes".to_string(),
        priority: Some("H".to_string()),
        due: None,
        time: None,
        tags: Some("finance, paperwork".to_string()),
        note: Some("Gather receipts first".to_string()),
    })
    .unwrap();

    let tasks = env.load_tasks();
    assert_eq!(tasks[0].priority(), Some(Priority::High));
    assert_eq!(tasks[0].tags(), Some("finance, paperwork"));
    assert_eq!(tasks[0].note(), Some("Gather receipts first"));
}

#[test]
fn test_add_accepts_lowercase_priority() {
    let env = TestEnv::new();

    let mut args = plain("Water plants");
    args.priority = Some("m".to_string());
    commands::add(args).unwrap();

    assert_eq!(env.load_tasks()[0].priority(), Some(Priority::Medium));
}

#[test]
fn test_add_drops_invalid_priority() {
    let env = TestEnv::new();

    let mut args = plain("Walk dog");
    args.priority = Some("urgent".to_string());
    commands::add(args).unwrap();

    // The task is still created, just without the bad priority.
    let tasks = env.load_tasks();
    assert_eq!(tasks.len(), 1);
    assert!(tasks[0].priority().is_none());
}

#[test]
fn test_add_drops_invalid_due_date() {
    let env = TestEnv::new();

    let mut args = plain("Review report");
    args.due = Some("2/30/2030".to_string());
    commands::add(args).unwrap();

    let tasks = env.load_tasks();
    assert_eq!(tasks.len(), 1);
    assert!(tasks[0].due().is_none());
}

#[test]
fn test_add_keeps_past_due_date() {
    let env = TestEnv::new();

    let mut args = plain("Overdue already");
    args.due = Some("1/1/2020".to_string());
    commands::add(args).unwrap();

    // Past dates only warn; the task keeps its deadline.
    let due = env.load_tasks()[0].due().copied().unwrap();
    assert_eq!(due.date(), NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
}

#[test]
fn test_add_with_explicit_time() {
    let env = TestEnv::new();

    let mut args = plain("Dentist");
    args.due = Some("3/1/2030".to_string());
    args.time = Some("9:30 AM".to_string());
    commands::add(args).unwrap();

    let due = env.load_tasks()[0].due().copied().unwrap();
    assert!(due.has_explicit_time());
    assert_eq!(due.time(), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
}

#[test]
fn test_add_defaults_due_time_to_end_of_day() {
    let env = TestEnv::new();

    let mut args = plain("Submit form");
    args.due = Some("3/1/2030".to_string());
    commands::add(args).unwrap();

    let due = env.load_tasks()[0].due().copied().unwrap();
    assert!(!due.has_explicit_time());
    assert_eq!(due.time(), NaiveTime::from_hms_opt(23, 59, 0).unwrap());
}

#[test]
fn test_add_drops_invalid_time_but_keeps_date() {
    let env = TestEnv::new();

    let mut args = plain("Call bank");
    args.due = Some("3/1/2030".to_string());
    // Leading zero in the hour is not accepted.
    args.time = Some("09:30 AM".to_string());
    commands::add(args).unwrap();

    let due = env.load_tasks()[0].due().copied().unwrap();
    assert!(!due.has_explicit_time());
    assert_eq!(due.date(), NaiveDate::from_ymd_opt(2030, 3, 1).unwrap());
}

#[test]
fn test_add_preserves_date_spelling() {
    let env = TestEnv::new();

    let mut args = plain("Renew passport");
    args.due = Some("3/1/2030".to_string());
    commands::add(args).unwrap();

    let due = env.load_tasks()[0].due().copied().unwrap();
    assert_eq!(due.to_string(), "3/1/2030");

    // The spelling survives in the file itself as a format descriptor.
    let content = env.read_task_file();
    assert!(content.contains("M/D/YYYY"));
    assert!(content.contains("2030-03-01"));
}

#[test]
fn test_add_preserves_two_digit_year_spelling() {
    let env = TestEnv::new();

    let mut args = plain("Archive records");
    args.due = Some("5-23-15".to_string());
    commands::add(args).unwrap();

    let due = env.load_tasks()[0].due().copied().unwrap();
    assert_eq!(due.date(), NaiveDate::from_ymd_opt(2015, 5, 23).unwrap());
    assert_eq!(due.to_string(), "5-23-15");
}

#[test]
fn test_add_appends_to_existing_file() {
    let env = TestEnv::new();

    commands::add(plain("First")).unwrap();
    commands::add(plain("Second")).unwrap();

    let tasks = env.load_tasks();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].description(), "First");
    assert_eq!(tasks[1].description(), "Second");
}
