// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Joel Baranick

//! Diagnostic output helpers for consistent error/warning formatting.
//!
//! Diagnostics go to the environment's stderr. ANSI colour is used only when
//! that stream is a terminal and `NO_COLOR` is unset.

use consulate_capture::{Environment, OutputStream};
use std::io::Write;

/// Print an error message to the environment's stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(env: &mut Environment, msg: impl std::fmt::Display) {
    let stderr = env.stderr();
    let colored = use_color(stderr);
    write_error(stderr, msg, colored);
}

/// Write an error message to a writer with explicit colour flag.
fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, colored: bool) {
    if colored {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
}

/// Print a warning message to the environment's stderr.
///
/// Displays in yellow when stderr is a terminal, plain text otherwise.
pub fn print_warning(env: &mut Environment, msg: impl std::fmt::Display) {
    let stderr = env.stderr();
    let colored = use_color(stderr);
    write_warning(stderr, msg, colored);
}

/// Write a warning message to a writer with explicit colour flag.
fn write_warning<W: Write>(writer: &mut W, msg: impl std::fmt::Display, colored: bool) {
    if colored {
        let _ = writeln!(writer, "\x1b[33mWarning: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Warning: {}", msg);
    }
}

fn use_color(stream: &OutputStream) -> bool {
    stream.is_terminal() && !crate::env::no_color()
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
