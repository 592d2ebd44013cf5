// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Joel Baranick

//! Exit code and output stream capture for consulate tests.
//!
//! Commands receive an [`Environment`] instead of touching the process-wide
//! stdout, stderr and `exit`. [`execute`] swaps pipe-backed streams and an
//! exit recorder into that environment, runs a body, drains both pipes on
//! background threads while the body runs, and hands back an
//! [`ExecutionResult`] once everything has been flushed and restored.
//!
//! ```no_run
//! use consulate_capture::{execute, Environment};
//! use std::io::Write;
//!
//! let mut env = Environment::process();
//! let result = execute(&mut env, |env| {
//!     let _ = write!(env.stderr(), "hello");
//!     env.exit(2);
//! })?;
//! assert_eq!(result.exit_code, 2);
//! assert_eq!(result.stderr, b"hello");
//! # Ok::<(), consulate_capture::HarnessError>(())
//! ```

mod buffer;
mod environment;
mod exit;
mod guard;
mod harness;
mod stream;

pub use buffer::SharedBuffer;
pub use environment::{Environment, OutputStream};
pub use exit::{exit_codes, ExitHandler, ExitRecorder};
pub use guard::EnvironmentGuard;
pub use harness::{execute, ExecutionResult, Harness, HarnessError};
pub use stream::StreamCapture;
