// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Joel Baranick

//! Test capture CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use test_capture::{unified_diff, Fixtures};

/// Compare captured output against golden fixtures
#[derive(Parser, Debug)]
#[command(name = "test-capture")]
#[command(about = "Compare and update golden test fixtures")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a unified diff of two files; exits 1 when they differ
    Diff { expected: PathBuf, actual: PathBuf },

    /// Store the contents of a file as the fixture for an id
    Accept {
        /// Fixture directory
        #[arg(long, default_value = "tests/fixtures/golden")]
        dir: PathBuf,
        id: String,
        actual: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Diff { expected, actual } => {
            let expected_bytes = tokio::fs::read(&expected).await?;
            let actual_bytes = tokio::fs::read(&actual).await?;
            let diff = unified_diff(
                &expected_bytes,
                &actual_bytes,
                &expected.display().to_string(),
                &actual.display().to_string(),
            );
            if diff.is_empty() {
                return Ok(ExitCode::SUCCESS);
            }
            print!("{}", diff);
            Ok(ExitCode::FAILURE)
        }
        Command::Accept { dir, id, actual } => {
            let contents = tokio::fs::read(&actual).await?;
            let fixtures = Fixtures::new(dir).with_update(true);
            fixtures.get(&id, &contents)?;
            println!("{}", fixtures.path(&id)?.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}
