// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Joel Baranick

//! Centralized environment variable access.
//!
//! All runtime environment variables used by consulate are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::path::PathBuf;

/// `CONSULATE_CONFIG` — Config file used when `--config` is not given.
pub fn config_path() -> Option<PathBuf> {
    non_empty(names::CONSULATE_CONFIG).map(PathBuf::from)
}

/// `CONSULATE_LOG` — Tracing filter directives (e.g. `consulate=debug`).
pub fn log_filter() -> Option<String> {
    non_empty(names::CONSULATE_LOG)
}

/// `NO_COLOR` — Disables coloured diagnostics when set to anything.
pub fn no_color() -> bool {
    std::env::var_os(names::NO_COLOR).is_some()
}

/// `HOME` — User's home directory.
pub fn home() -> Option<PathBuf> {
    non_empty(names::HOME).map(PathBuf::from)
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
