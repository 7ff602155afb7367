#![expect(
    clippy::unwrap_used,
    reason = "Test utilities use .unwrap() for brevity"
)]

//! Shared test utilities for unit tests.
//!
//! Only compiled during testing (`#[cfg(test)]`).

use crate::controls::{ActionRunner, Confirmer, SystemAction};
use std::collections::VecDeque;
use std::sync::Mutex;
use tempfile::TempDir;

/// Serializes tests that modify `OPKR_SETTINGS_HOME`.
static SETTINGS_HOME_LOCK: Mutex<()> = Mutex::new(());

/// Create a temporary test directory that is removed when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Confirmer that answers from a fixed script and records every prompt.
///
/// Once the script runs out every further prompt is declined.
#[derive(Debug, Default)]
pub struct ScriptedConfirmer {
    answers: VecDeque<bool>,
    prompts: Vec<String>,
}

impl ScriptedConfirmer {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, oldest first.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}

/// Runner that records actions instead of performing them.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    performed: Mutex<Vec<SystemAction>>,
}

impl RecordingRunner {
    /// Actions requested so far, oldest first.
    pub fn performed(&self) -> Vec<SystemAction> {
        self.performed.lock().unwrap().clone()
    }
}

impl ActionRunner for RecordingRunner {
    fn perform(&self, action: &SystemAction) {
        self.performed.lock().unwrap().push(*action);
    }
}

/// RAII guard that points `OPKR_SETTINGS_HOME` at a temp directory for a test
/// scope and restores the previous value when dropped.
///
/// # Safety Considerations
///
/// `std::env::set_var` and `std::env::remove_var` are unsafe because other
/// threads may read the environment concurrently. The guard holds
/// `SETTINGS_HOME_LOCK` for its whole lifetime, so tests that touch the
/// variable run one at a time, and the original value is restored on drop
/// even if the test panics.
pub struct SettingsHomeGuard {
    original: Option<String>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only code that modifies environment variables under a global lock"
)]
impl SettingsHomeGuard {
    /// Set `OPKR_SETTINGS_HOME` to the given temp directory.
    pub fn new(temp_dir: &TempDir) -> Self {
        // A panicking test poisons the lock; the guarded state is still fine.
        let lock = SETTINGS_HOME_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let original = std::env::var(crate::config::SETTINGS_HOME_ENV).ok();
        // SAFETY: SETTINGS_HOME_LOCK serializes every writer of this variable
        // and the previous value is restored on drop.
        unsafe {
            std::env::set_var(crate::config::SETTINGS_HOME_ENV, temp_dir.path());
        }
        Self {
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only code that restores environment variables under a global lock"
)]
impl Drop for SettingsHomeGuard {
    fn drop(&mut self) {
        // SAFETY: the lock is still held by this guard.
        if let Some(ref original) = self.original {
            unsafe {
                std::env::set_var(crate::config::SETTINGS_HOME_ENV, original);
            }
        } else {
            unsafe {
                std::env::remove_var(crate::config::SETTINGS_HOME_ENV);
            }
        }
    }
}
