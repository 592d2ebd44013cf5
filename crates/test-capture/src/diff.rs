// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Joel Baranick

//! Human-readable diffs between expected and captured bytes.

use similar::TextDiff;

const CONTEXT_RADIUS: usize = 3;

/// Line-based unified diff of two byte sequences.
///
/// Invalid UTF-8 is replaced before diffing. Returns an empty string when
/// the inputs are equal.
pub fn unified_diff(
    expected: &[u8],
    actual: &[u8],
    expected_label: &str,
    actual_label: &str,
) -> String {
    if expected == actual {
        return String::new();
    }
    let expected = String::from_utf8_lossy(expected);
    let actual = String::from_utf8_lossy(actual);
    let rendered = TextDiff::from_lines(expected.as_ref(), actual.as_ref())
        .unified_diff()
        .context_radius(CONTEXT_RADIUS)
        .header(expected_label, actual_label)
        .to_string();

    if rendered.is_empty() {
        // Lossy decoding hid the difference.
        format!("--- {expected_label}\n+++ {actual_label}\n(binary contents differ)\n")
    } else {
        rendered
    }
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
