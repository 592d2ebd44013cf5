// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Joel Baranick

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for command-level tests.

#![allow(dead_code)]

use consulate::ConfigSources;
use consulate_capture::{ExecutionResult, Harness};
use std::path::PathBuf;
use test_capture::Fixtures;

/// Golden fixtures for this crate
pub fn fixtures() -> Fixtures {
    Fixtures::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/golden"))
}

/// Path to a file under `tests/testdata`
pub fn testdata(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/testdata")
        .join(name)
}

/// Run `consulate` with `args` (program name excluded) and capture everything.
///
/// Only `--config` can select a config file; `CONSULATE_CONFIG` and `$HOME`
/// are not consulted.
pub fn execute_cli(args: &[&str]) -> ExecutionResult {
    execute_cli_with(args, &ConfigSources::default())
}

/// Like [`execute_cli`] with explicit config sources
pub fn execute_cli_with(args: &[&str], sources: &ConfigSources) -> ExecutionResult {
    let argv: Vec<String> = std::iter::once("consulate")
        .chain(args.iter().copied())
        .map(String::from)
        .collect();
    Harness::new()
        .run(|env| consulate::run_with(argv, env, sources))
        .expect("failed to set up capture")
}

/// A temporary home directory holding `.consulate.toml` with `content`
pub fn home_with_config(content: &str) -> tempfile::TempDir {
    let home = tempfile::tempdir().expect("failed to create home dir");
    std::fs::write(home.path().join(".consulate.toml"), content)
        .expect("failed to write home config");
    home
}

/// Fail with a diff when `actual` differs from the fixture for `id`
pub fn assert_golden(id: &str, actual: &[u8]) {
    if let Err(e) = fixtures().check(id, actual) {
        panic!("{}", e);
    }
}
