// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Joel Baranick

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn test_equal_inputs_produce_no_diff() {
    assert_eq!(unified_diff(b"same\n", b"same\n", "expected", "actual"), "");
}

#[test]
fn test_diff_has_headers_and_changes() {
    let diff = unified_diff(
        b"consulate version 0.1.0\n",
        b"consulate version 0.2.0\n",
        "expected",
        "actual",
    );

    assert!(diff.contains("--- expected"), "diff was: {}", diff);
    assert!(diff.contains("+++ actual"), "diff was: {}", diff);
    assert!(diff.contains("-consulate version 0.1.0"), "diff was: {}", diff);
    assert!(diff.contains("+consulate version 0.2.0"), "diff was: {}", diff);
}

#[test]
fn test_unchanged_lines_are_context() {
    let diff = unified_diff(b"a\nb\nc\n", b"a\nB\nc\n", "e", "a");
    assert!(diff.contains(" a\n"), "diff was: {}", diff);
    assert!(diff.contains("-b\n"), "diff was: {}", diff);
    assert!(diff.contains("+B\n"), "diff was: {}", diff);
}

#[test]
fn test_invalid_utf8_still_reports_difference() {
    let diff = unified_diff(&[0xff, 0xfe], &[0xfe, 0xff], "e", "a");
    assert!(!diff.is_empty());
}
