// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Joel Baranick

//! Tracing subscriber setup for the binary.
//!
//! Tracing output always goes to the real process stderr, never to an
//! [`Environment`](consulate_capture::Environment) stream, so it does not
//! show up in captured command output.

use tracing_subscriber::EnvFilter;

/// Filter used when `CONSULATE_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    let directives = crate::env::log_filter();
    let (filter, invalid) = build_filter(directives.as_deref());

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok();

    if installed {
        if let Some(directives) = invalid {
            tracing::warn!(%directives, "ignoring invalid CONSULATE_LOG");
        }
    }
}

/// Parse directives, falling back to [`DEFAULT_FILTER`].
///
/// Returns the rejected directives alongside the fallback filter.
fn build_filter(directives: Option<&str>) -> (EnvFilter, Option<String>) {
    match directives {
        None => (EnvFilter::new(DEFAULT_FILTER), None),
        Some(d) => match EnvFilter::try_new(d) {
            Ok(filter) => (filter, None),
            Err(_) => (EnvFilter::new(DEFAULT_FILTER), Some(d.to_string())),
        },
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
