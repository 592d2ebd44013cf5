// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Joel Baranick

//! Command line argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Consul health check CLI
#[derive(Parser, Debug, Clone)]
#[command(name = "consulate", version, about = "Consul health check CLI")]
#[command(subcommand_required = true, arg_required_else_help = true)]
pub struct Cli {
    /// Config file (default: $HOME/.consulate.toml, or $CONSULATE_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the version of consulate
    Version,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
