//! # Integration Tests: Configuration
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use std::fs;

use common::TestEnv;
use tasklist::commands::{self, AddArgs, ListArgs};
use tasklist::FatalError;

fn seed(description: &str) {
    commands::add(AddArgs {
        description: description.to_string(),
        priority: None,
        due: None,
        time: None,
        tags: None,
        note: None,
    })
    .unwrap();
}

#[test]
fn test_missing_config_uses_default_location() {
    let env = TestEnv::new();

    seed("Buy milk");

    assert!(env.task_file_path().exists());
}

#[test]
fn test_config_redirects_the_task_file() {
    let env = TestEnv::new();
    let custom = env.home().join("work").join("items.yml");
    fs::create_dir_all(custom.parent().unwrap()).unwrap();
    env.write_config(&format!("task_file = \"{}\"\n", custom.display()));

    seed("Buy milk");

    assert!(custom.exists());
    assert!(!env.task_file_path().exists());

    let content = fs::read_to_string(&custom).unwrap();
    assert!(content.contains("Buy milk"));
}

#[test]
fn test_config_absolute_dates_applies_to_views() {
    let env = TestEnv::new();
    env.write_config("absolute_dates = true\n");

    seed("Buy milk");

    commands::list(&ListArgs { absolute: false }).unwrap();
}

#[test]
fn test_malformed_config_is_an_error() {
    let env = TestEnv::new();
    env.write_config("task_file = [\n");

    let err = commands::list(&ListArgs { absolute: false }).unwrap_err();

    // A broken config is a plain error, not one of the scripted exits.
    assert!(err.downcast_ref::<FatalError>().is_none());
}
