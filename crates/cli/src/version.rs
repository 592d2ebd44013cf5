// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Joel Baranick

//! The `version` subcommand.

use consulate_capture::{exit_codes, Environment};
use std::io::Write;

/// Package version baked in at build time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version line as printed by `consulate version`
pub fn render() -> String {
    format!("consulate version {}\n", VERSION)
}

/// Print the version to stderr
pub fn run(env: &mut Environment) -> i32 {
    match env.stderr().write_all(render().as_bytes()) {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            tracing::warn!(error = %e, "failed to write version");
            exit_codes::ERROR
        }
    }
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
