// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Joel Baranick

//! Environment variables read by test-capture.

/// Name of the variable that switches fixtures into update mode.
pub const TEST_CAPTURE_UPDATE: &str = "TEST_CAPTURE_UPDATE";

/// `TEST_CAPTURE_UPDATE` — Rewrite fixtures when set to exactly `1`.
pub fn update_fixtures() -> bool {
    std::env::var(TEST_CAPTURE_UPDATE).is_ok_and(|v| v.trim() == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
