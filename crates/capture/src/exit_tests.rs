// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Joel Baranick

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;
use std::sync::atomic::{AtomicI32, Ordering};

#[test]
fn test_recorder_defaults_to_success() {
    let recorder = ExitRecorder::new();
    assert_eq!(recorder.last(), None);
    assert_eq!(recorder.code(), 0);
}

#[test]
fn test_recorder_records_code() {
    let recorder = ExitRecorder::new();
    recorder.handler().call(3);
    assert_eq!(recorder.last(), Some(3));
    assert_eq!(recorder.code(), 3);
}

#[test]
fn test_recorder_handlers_share_state() {
    let recorder = ExitRecorder::new();
    let first = recorder.handler();
    let second = recorder.handler();

    first.call(1);
    second.call(7);

    assert_eq!(recorder.code(), 7);
}

#[test]
fn test_explicit_zero_is_recorded() {
    let recorder = ExitRecorder::new();
    let handler = recorder.handler();
    handler.call(4);
    handler.call(0);
    assert_eq!(recorder.last(), Some(0));
}

#[test]
fn test_custom_handler_is_invoked() {
    let seen = Arc::new(AtomicI32::new(-1));
    let sink = Arc::clone(&seen);
    let handler = ExitHandler::new(move |code| sink.store(code, Ordering::SeqCst));

    handler.call(42);

    assert_eq!(seen.load(Ordering::SeqCst), 42);
}

#[test]
fn test_same_as_tracks_identity() {
    let handler = ExitHandler::new(|_| {});
    let clone = handler.clone();
    let other = ExitHandler::new(|_| {});

    assert!(handler.same_as(&clone));
    assert!(!handler.same_as(&other));
}

proptest! {
    #[test]
    fn prop_last_code_wins(codes in proptest::collection::vec(any::<i32>(), 1..20)) {
        let recorder = ExitRecorder::new();
        let handler = recorder.handler();
        for code in &codes {
            handler.call(*code);
        }
        prop_assert_eq!(recorder.code(), *codes.last().unwrap());
    }
}
