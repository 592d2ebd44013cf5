// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Joel Baranick

//! Golden fixture lookup.

use crate::diff::unified_diff;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that switches fixtures into update mode
pub const UPDATE_ENV: &str = crate::env::TEST_CAPTURE_UPDATE;

/// File extension of stored fixtures
pub const FIXTURE_EXTENSION: &str = "golden";

/// Errors from fixture lookup and comparison
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Invalid fixture id '{0}': use letters, digits, '_', '-' or '.'")]
    InvalidId(String),

    #[error(
        "Failed to read fixture '{id}' from {}: {source} (set TEST_CAPTURE_UPDATE=1 to create it)",
        path.display()
    )]
    Read {
        id: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write fixture '{id}' to {}: {source}", path.display())]
    Write {
        id: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output does not match fixture '{id}':\n{diff}")]
    Mismatch { id: String, diff: String },
}

/// Directory of golden fixtures keyed by test id
#[derive(Clone, Debug)]
pub struct Fixtures {
    dir: PathBuf,
    update: bool,
}

impl Fixtures {
    /// Fixtures rooted at `dir`; update mode follows `TEST_CAPTURE_UPDATE=1`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            update: update_requested(),
        }
    }

    /// Override update mode
    pub fn with_update(mut self, update: bool) -> Self {
        self.update = update;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn is_update(&self) -> bool {
        self.update
    }

    /// Location of the fixture for `id`
    pub fn path(&self, id: &str) -> Result<PathBuf, FixtureError> {
        validate_id(id)?;
        Ok(self.dir.join(format!("{id}.{FIXTURE_EXTENSION}")))
    }

    /// Expected bytes for `id`.
    ///
    /// In update mode `actual` is written as the new fixture and returned.
    pub fn get(&self, id: &str, actual: &[u8]) -> Result<Vec<u8>, FixtureError> {
        let path = self.path(id)?;
        if self.update {
            write_fixture(id, &path, actual)?;
            tracing::debug!(id, path = %path.display(), "fixture updated");
            return Ok(actual.to_vec());
        }
        std::fs::read(&path).map_err(|source| FixtureError::Read {
            id: id.to_string(),
            path,
            source,
        })
    }

    /// Compare `actual` against the fixture for `id`
    pub fn check(&self, id: &str, actual: &[u8]) -> Result<(), FixtureError> {
        let expected = self.get(id, actual)?;
        if expected == actual {
            return Ok(());
        }
        Err(FixtureError::Mismatch {
            id: id.to_string(),
            diff: unified_diff(&expected, actual, "expected", "actual"),
        })
    }
}

/// Whether `TEST_CAPTURE_UPDATE=1` asks for fixtures to be rewritten
pub fn update_requested() -> bool {
    crate::env::update_fixtures()
}

fn validate_id(id: &str) -> Result<(), FixtureError> {
    let valid = !id.is_empty()
        && !id.starts_with('.')
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(FixtureError::InvalidId(id.to_string()))
    }
}

fn write_fixture(id: &str, path: &Path, contents: &[u8]) -> Result<(), FixtureError> {
    let to_error = |source: std::io::Error| FixtureError::Write {
        id: id.to_string(),
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(to_error)?;
    }
    std::fs::write(path, contents).map_err(to_error)
}

#[cfg(test)]
#[path = "fixtures_tests.rs"]
mod tests;
