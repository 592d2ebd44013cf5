// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Joel Baranick

#![allow(clippy::unwrap_used)]

use super::*;
use consulate_capture::ExitHandler;

#[test]
fn error_plain_text_when_not_terminal() {
    let mut buf = Vec::new();
    write_error(&mut buf, "something went wrong", false);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output, "Error: something went wrong\n");
}

#[test]
fn error_with_ansi_when_colored() {
    let mut buf = Vec::new();
    write_error(&mut buf, "something went wrong", true);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output, "\x1b[31mError: something went wrong\x1b[0m\n");
}

#[test]
fn warning_plain_text_when_not_terminal() {
    let mut buf = Vec::new();
    write_warning(&mut buf, "something might be wrong", false);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output, "Warning: something might be wrong\n");
}

#[test]
fn warning_with_ansi_when_colored() {
    let mut buf = Vec::new();
    write_warning(&mut buf, "something might be wrong", true);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output, "\x1b[33mWarning: something might be wrong\x1b[0m\n");
}

#[test]
fn error_with_format_args() {
    let mut buf = Vec::new();
    write_error(&mut buf, format_args!("failed after {} attempts", 3), false);
    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output, "Error: failed after 3 attempts\n");
}

#[test]
fn print_error_goes_to_environment_stderr() {
    let (mut env, stdout, stderr) = Environment::buffered(ExitHandler::new(|_| {}));
    print_error(&mut env, "bad config");
    print_warning(&mut env, "deprecated flag");

    assert!(stdout.is_empty());
    assert_eq!(
        stderr.to_string_lossy(),
        "Error: bad config\nWarning: deprecated flag\n"
    );
}
