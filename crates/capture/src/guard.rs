// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Joel Baranick

//! Scoped substitution of an [`Environment`].

use crate::environment::{Environment, OutputStream};
use crate::exit::ExitHandler;
use std::io::Write;
use std::mem;
use std::ops::{Deref, DerefMut};

/// Originals displaced by a substitution
#[derive(Debug)]
struct Snapshot {
    stdout: OutputStream,
    stderr: OutputStream,
    exit: ExitHandler,
}

/// Substitutes an environment's streams and exit handler for its lifetime.
///
/// The originals are put back exactly once, either by [`restore`](Self::restore)
/// or on drop, which also covers unwinding out of a panicking body. The
/// substituted streams are flushed and then dropped during restoration.
#[derive(Debug)]
pub struct EnvironmentGuard<'a> {
    env: &'a mut Environment,
    saved: Option<Snapshot>,
}

impl<'a> EnvironmentGuard<'a> {
    /// Install substitutes into `env`, saving what was there
    pub fn install(
        env: &'a mut Environment,
        stdout: OutputStream,
        stderr: OutputStream,
        exit: ExitHandler,
    ) -> Self {
        let saved = Snapshot {
            stdout: mem::replace(&mut env.stdout, stdout),
            stderr: mem::replace(&mut env.stderr, stderr),
            exit: mem::replace(&mut env.exit, exit),
        };
        Self {
            env,
            saved: Some(saved),
        }
    }

    /// Flush the substitutes and put the originals back
    pub fn restore(mut self) {
        self.restore_in_place();
    }

    fn restore_in_place(&mut self) {
        let Some(saved) = self.saved.take() else {
            return;
        };

        for stream in [&mut self.env.stdout, &mut self.env.stderr] {
            if let Err(e) = stream.flush() {
                tracing::warn!(stream = stream.name(), error = %e, "flush before restore failed");
            }
        }

        // Dropping the substitutes closes any pipe write ends they own.
        drop(mem::replace(&mut self.env.stdout, saved.stdout));
        drop(mem::replace(&mut self.env.stderr, saved.stderr));
        self.env.exit = saved.exit;
    }
}

impl Deref for EnvironmentGuard<'_> {
    type Target = Environment;

    fn deref(&self) -> &Environment {
        self.env
    }
}

impl DerefMut for EnvironmentGuard<'_> {
    fn deref_mut(&mut self) -> &mut Environment {
        self.env
    }
}

impl Drop for EnvironmentGuard<'_> {
    fn drop(&mut self) {
        self.restore_in_place();
    }
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod tests;
