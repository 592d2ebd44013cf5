// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Joel Baranick

//! Golden fixture storage and comparison for consulate tests.
//!
//! Captured command output is compared against reference files stored as
//! `<dir>/<id>.golden`. Setting `TEST_CAPTURE_UPDATE=1` rewrites the
//! fixtures from the captured output instead of comparing.

mod diff;
mod env;
mod fixtures;

pub use diff::unified_diff;
pub use fixtures::{update_requested, FixtureError, Fixtures, FIXTURE_EXTENSION, UPDATE_ENV};
