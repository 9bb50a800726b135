//! # Test Utilities
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.
//!
//! Shared harness for the integration tests. Every test runs against a
//! throwaway home directory so nothing touches the real task file, and a
//! global lock serializes tests because the home override is thread-local
//! state shared with the command layer.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tempfile::TempDir;

use tasklist::config::set_home_override;
use tasklist::constants::{CONFIG_DIR, CONFIG_FILENAME, TASK_FILE_NAME};
use tasklist::storage;
use tasklist::Task;

// =============================================================================
// Test Environment
// =============================================================================

/// Tests mutate the process-wide home override, so they must not overlap.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// An isolated environment with a temporary home directory.
///
/// Creating a `TestEnv` points the crate's home lookup at a fresh temp
/// directory; dropping it restores the real lookup. Hold it for the whole
/// test.
pub struct TestEnv {
    #[allow(dead_code)]
    test_guard: MutexGuard<'static, ()>,
    home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        // A test that panicked while holding the lock poisons it; the
        // environment it left behind is gone, so the lock is still usable.
        let test_guard = TEST_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let home_dir = TempDir::new().unwrap();
        set_home_override(Some(home_dir.path().to_path_buf()));

        Self {
            test_guard,
            home_dir,
        }
    }

    #[allow(dead_code)]
    pub fn home(&self) -> &Path {
        self.home_dir.path()
    }

    /// Default location of the task file inside the temporary home.
    #[allow(dead_code)]
    pub fn task_file_path(&self) -> PathBuf {
        self.home().join(TASK_FILE_NAME)
    }

    /// Location of the config file inside the temporary home.
    #[allow(dead_code)]
    pub fn config_path(&self) -> PathBuf {
        self.home()
            .join(".config")
            .join(CONFIG_DIR)
            .join(CONFIG_FILENAME)
    }

    /// Writes a config file, creating the directory chain as needed.
    #[allow(dead_code)]
    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Writes raw YAML to the default task file location.
    #[allow(dead_code)]
    pub fn write_task_file(&self, content: &str) {
        fs::write(self.task_file_path(), content).unwrap();
    }

    /// Reads the default task file verbatim.
    #[allow(dead_code)]
    pub fn read_task_file(&self) -> String {
        fs::read_to_string(self.task_file_path()).unwrap()
    }

    /// Loads the tasks persisted at the default location.
    ///
    /// Panics if the file is missing, since tests that expect an absent
    /// file assert on that directly.
    #[allow(dead_code)]
    pub fn load_tasks(&self) -> Vec<Task> {
        storage::load(&self.task_file_path()).unwrap().unwrap()
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        set_home_override(None);
    }
}
