// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Joel Baranick

//! Process environment passed to command entry points.
//!
//! Commands write through [`Environment::stdout`] / [`Environment::stderr`]
//! and terminate through [`Environment::exit`], never through the process
//! globals, so the harness can substitute all three.

use crate::buffer::SharedBuffer;
use crate::exit::ExitHandler;
use std::fmt;
use std::io::{self, IsTerminal, Write};

/// A named output destination
pub struct OutputStream {
    name: String,
    terminal: bool,
    writer: Box<dyn Write + Send>,
}

impl OutputStream {
    /// Wrap a writer. Streams created this way never report a terminal.
    pub fn new(name: impl Into<String>, writer: impl Write + Send + 'static) -> Self {
        Self {
            name: name.into(),
            terminal: false,
            writer: Box::new(writer),
        }
    }

    /// The real process stdout
    pub fn stdout() -> Self {
        Self {
            name: "stdout".to_string(),
            terminal: io::stdout().is_terminal(),
            writer: Box::new(io::stdout()),
        }
    }

    /// The real process stderr
    pub fn stderr() -> Self {
        Self {
            name: "stderr".to_string(),
            terminal: io::stderr().is_terminal(),
            writer: Box::new(io::stderr()),
        }
    }

    /// Stream that discards everything written to it
    pub fn sink(name: impl Into<String>) -> Self {
        Self::new(name, io::sink())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the destination is an interactive terminal
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
}

impl Write for OutputStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.writer.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl fmt::Debug for OutputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputStream")
            .field("name", &self.name)
            .field("terminal", &self.terminal)
            .finish_non_exhaustive()
    }
}

/// Output destinations and exit handler for one command invocation
#[derive(Debug)]
pub struct Environment {
    pub(crate) stdout: OutputStream,
    pub(crate) stderr: OutputStream,
    pub(crate) exit: ExitHandler,
}

impl Environment {
    pub fn new(stdout: OutputStream, stderr: OutputStream, exit: ExitHandler) -> Self {
        Self {
            stdout,
            stderr,
            exit,
        }
    }

    /// Real stdout, stderr and `std::process::exit`
    pub fn process() -> Self {
        Self::new(
            OutputStream::stdout(),
            OutputStream::stderr(),
            ExitHandler::process(),
        )
    }

    /// Environment writing into in-memory buffers.
    ///
    /// Returns the environment along with handles to its stdout and stderr
    /// buffers. The exit handler is left to the caller.
    pub fn buffered(exit: ExitHandler) -> (Self, SharedBuffer, SharedBuffer) {
        let stdout = SharedBuffer::new();
        let stderr = SharedBuffer::new();
        let env = Self::new(
            OutputStream::new("stdout", stdout.clone()),
            OutputStream::new("stderr", stderr.clone()),
            exit,
        );
        (env, stdout, stderr)
    }

    pub fn stdout(&mut self) -> &mut OutputStream {
        &mut self.stdout
    }

    pub fn stderr(&mut self) -> &mut OutputStream {
        &mut self.stderr
    }

    pub fn exit_handler(&self) -> &ExitHandler {
        &self.exit
    }

    /// Request process exit through the installed handler.
    ///
    /// May return (under the harness); callers should stop work afterwards.
    pub fn exit(&self, code: i32) {
        self.exit.call(code)
    }
}

#[cfg(test)]
#[path = "environment_tests.rs"]
mod tests;
