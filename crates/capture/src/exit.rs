// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Joel Baranick

//! Substitutable exit handling.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Exit codes used by consulate commands
pub mod exit_codes {
    /// Successful execution
    pub const SUCCESS: i32 = 0;
    /// General error (bad config, failed command)
    pub const ERROR: i32 = 1;
    /// Command line usage error
    pub const USAGE: i32 = 2;
}

/// Callable used by commands in place of `std::process::exit`.
///
/// The process handler terminates; handlers installed by the harness return
/// normally, so callers must `return` after invoking it.
#[derive(Clone)]
pub struct ExitHandler {
    inner: Arc<dyn Fn(i32) + Send + Sync>,
}

impl ExitHandler {
    /// Wrap an arbitrary function
    pub fn new(f: impl Fn(i32) + Send + Sync + 'static) -> Self {
        Self { inner: Arc::new(f) }
    }

    /// Handler that terminates the current process with the given code
    pub fn process() -> Self {
        Self::new(|code| std::process::exit(code))
    }

    /// Request exit with `code`
    pub fn call(&self, code: i32) {
        (self.inner)(code)
    }

    /// Whether both handles refer to the same installed function
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ExitHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExitHandler").finish_non_exhaustive()
    }
}

/// Records requested exit codes instead of terminating.
///
/// Only the most recent code is kept.
#[derive(Clone, Debug, Default)]
pub struct ExitRecorder {
    last: Arc<Mutex<Option<i32>>>,
}

impl ExitRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler that stores each code into this recorder
    pub fn handler(&self) -> ExitHandler {
        let last = Arc::clone(&self.last);
        ExitHandler::new(move |code| {
            *last.lock() = Some(code);
        })
    }

    /// Last recorded code, if the handler was ever called
    pub fn last(&self) -> Option<i32> {
        *self.last.lock()
    }

    /// Last recorded code, or 0 when the handler was never called
    pub fn code(&self) -> i32 {
        self.last().unwrap_or(exit_codes::SUCCESS)
    }
}

#[cfg(test)]
#[path = "exit_tests.rs"]
mod tests;
