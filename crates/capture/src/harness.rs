// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Joel Baranick

//! Run a body with captured output streams and exit code.

use crate::environment::{Environment, OutputStream};
use crate::exit::ExitRecorder;
use crate::guard::EnvironmentGuard;
use crate::stream::StreamCapture;
use std::borrow::Cow;
use std::io;
use thiserror::Error;

/// Errors raised while setting up a capture
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to create {stream} pipe: {source}")]
    Pipe {
        stream: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("failed to start {stream} capture: {source}")]
    Spawn {
        stream: &'static str,
        #[source]
        source: io::Error,
    },
}

/// Observable outcome of one body execution
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Last code passed to the exit handler, or 0
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ExecutionResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn stdout_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stdout)
    }

    pub fn stderr_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stderr)
    }
}

/// Run `body` against `env` with stdout, stderr and exit substituted.
///
/// Both pipes are drained from before `body` starts until their write ends
/// are closed, so arbitrarily large output cannot stall the body. The write
/// ends are flushed and closed after `body` returns, then both drains are
/// joined. `env` is restored before this returns, and also when `body`
/// panics, in which case the panic continues to unwind to the caller.
pub fn execute<F>(env: &mut Environment, body: F) -> Result<ExecutionResult, HarnessError>
where
    F: FnOnce(&mut Environment),
{
    let (stdout_reader, stdout_writer) = io::pipe().map_err(|source| HarnessError::Pipe {
        stream: "stdout",
        source,
    })?;
    let (stderr_reader, stderr_writer) = io::pipe().map_err(|source| HarnessError::Pipe {
        stream: "stderr",
        source,
    })?;

    let stdout_capture =
        StreamCapture::start("stdout", stdout_reader).map_err(|source| HarnessError::Spawn {
            stream: "stdout",
            source,
        })?;
    let stderr_capture =
        StreamCapture::start("stderr", stderr_reader).map_err(|source| HarnessError::Spawn {
            stream: "stderr",
            source,
        })?;

    let recorder = ExitRecorder::new();
    let mut guard = EnvironmentGuard::install(
        env,
        OutputStream::new("stdout", stdout_writer),
        OutputStream::new("stderr", stderr_writer),
        recorder.handler(),
    );
    body(&mut *guard);
    guard.restore();

    let result = ExecutionResult {
        exit_code: recorder.code(),
        stdout: stdout_capture.join(),
        stderr: stderr_capture.join(),
    };
    tracing::debug!(
        exit_code = result.exit_code,
        stdout_bytes = result.stdout.len(),
        stderr_bytes = result.stderr.len(),
        "execution captured"
    );
    Ok(result)
}

/// Owns an environment and captures bodies run against it
#[derive(Debug)]
pub struct Harness {
    env: Environment,
}

impl Harness {
    /// Harness over the real process environment
    pub fn new() -> Self {
        Self::with_environment(Environment::process())
    }

    pub fn with_environment(env: Environment) -> Self {
        Self { env }
    }

    /// Capture one run of `body`
    pub fn run<F>(&mut self, body: F) -> Result<ExecutionResult, HarnessError>
    where
        F: FnOnce(&mut Environment),
    {
        execute(&mut self.env, body)
    }

    pub fn environment(&mut self) -> &mut Environment {
        &mut self.env
    }

    pub fn into_environment(self) -> Environment {
        self.env
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "harness_tests.rs"]
mod tests;
