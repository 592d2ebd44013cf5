// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Joel Baranick

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use rstest::rstest;
use serial_test::serial;
use tempfile::TempDir;

fn fixtures_in(dir: &TempDir) -> Fixtures {
    Fixtures::new(dir.path()).with_update(false)
}

#[test]
fn test_path_uses_golden_extension() {
    let dir = TempDir::new().unwrap();
    let path = fixtures_in(&dir).path("root_command").unwrap();
    assert_eq!(path, dir.path().join("root_command.golden"));
}

#[rstest]
#[case("")]
#[case("../escape")]
#[case("nested/id")]
#[case(".hidden")]
#[case("with space")]
fn test_invalid_ids_rejected(#[case] id: &str) {
    let dir = TempDir::new().unwrap();
    let err = fixtures_in(&dir).get(id, b"").unwrap_err();
    assert!(matches!(err, FixtureError::InvalidId(_)), "got {:?}", err);
}

#[test]
fn test_get_reads_stored_bytes() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("stored.golden"), b"expected bytes").unwrap();

    let expected = fixtures_in(&dir).get("stored", b"ignored").unwrap();
    assert_eq!(expected, b"expected bytes");
}

#[test]
fn test_get_missing_fixture_is_read_error() {
    let dir = TempDir::new().unwrap();
    let err = fixtures_in(&dir).get("missing", b"x").unwrap_err();

    assert!(matches!(err, FixtureError::Read { .. }), "got {:?}", err);
    assert!(err.to_string().contains(UPDATE_ENV));
}

#[test]
fn test_update_mode_writes_actual() {
    let dir = TempDir::new().unwrap();
    let fixtures = Fixtures::new(dir.path().join("nested")).with_update(true);

    let expected = fixtures.get("fresh", b"new output").unwrap();

    assert_eq!(expected, b"new output");
    assert_eq!(
        std::fs::read(dir.path().join("nested/fresh.golden")).unwrap(),
        b"new output"
    );
}

#[test]
fn test_check_accepts_match() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("ok.golden"), b"line\n").unwrap();
    fixtures_in(&dir).check("ok", b"line\n").unwrap();
}

#[test]
fn test_check_reports_diff_on_mismatch() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("bad.golden"), b"want\n").unwrap();

    let err = fixtures_in(&dir).check("bad", b"got\n").unwrap_err();
    match err {
        FixtureError::Mismatch { id, diff } => {
            assert_eq!(id, "bad");
            assert!(diff.contains("-want"));
            assert!(diff.contains("+got"));
        }
        other => panic!("expected mismatch, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_update_requested_reads_env() {
    std::env::set_var(UPDATE_ENV, "1");
    let on = update_requested();
    std::env::set_var(UPDATE_ENV, "yes");
    let loose = update_requested();
    std::env::set_var(UPDATE_ENV, "0");
    let off = update_requested();
    std::env::remove_var(UPDATE_ENV);
    let unset = update_requested();

    assert!(on);
    assert!(!loose);
    assert!(!off);
    assert!(!unset);
}

#[test]
#[serial]
fn test_new_follows_env() {
    std::env::set_var(UPDATE_ENV, "1");
    let fixtures = Fixtures::new("unused");
    std::env::remove_var(UPDATE_ENV);

    assert!(fixtures.is_update());
    assert_eq!(fixtures.dir(), Path::new("unused"));
}
