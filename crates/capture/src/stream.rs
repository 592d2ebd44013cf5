// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Joel Baranick

//! Background draining of one pipe into memory.

use std::io::{self, Read};
use std::thread::{self, JoinHandle};
use tokio::sync::oneshot;

const CHUNK_SIZE: usize = 8192;

/// A pipe read end being drained on its own thread.
///
/// The thread reads until end-of-data and then hands the accumulated bytes
/// over a one-shot channel. End-of-data only arrives once every write end
/// has been dropped, so [`join`](Self::join) blocks until that happens.
#[derive(Debug)]
pub struct StreamCapture {
    name: String,
    done: oneshot::Receiver<Vec<u8>>,
    thread: Option<JoinHandle<()>>,
}

impl StreamCapture {
    /// Start draining `reader` on a new thread named `capture-{name}`
    pub fn start<R>(name: &str, reader: R) -> io::Result<Self>
    where
        R: Read + Send + 'static,
    {
        let (tx, done) = oneshot::channel();
        let stream = name.to_string();
        let thread = thread::Builder::new()
            .name(format!("capture-{}", name))
            .spawn(move || {
                let bytes = drain(&stream, reader);
                // The receiver is gone only if the capture was abandoned.
                let _ = tx.send(bytes);
            })?;

        tracing::debug!(stream = name, "capture started");
        Ok(Self {
            name: name.to_string(),
            done,
            thread: Some(thread),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wait for end-of-data and return everything read.
    ///
    /// Blocks forever if a write end is still open. Must not be called from
    /// inside an async runtime.
    pub fn join(mut self) -> Vec<u8> {
        let bytes = match self.done.blocking_recv() {
            Ok(bytes) => bytes,
            Err(_) => {
                tracing::warn!(stream = %self.name, "capture thread exited without a result");
                Vec::new()
            }
        };
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::warn!(stream = %self.name, "capture thread panicked");
            }
        }
        tracing::debug!(stream = %self.name, bytes = bytes.len(), "capture joined");
        bytes
    }
}

/// Read until end-of-data or the first non-retryable error
fn drain<R: Read>(name: &str, mut reader: R) -> Vec<u8> {
    let mut bytes = Vec::new();
    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => bytes.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                tracing::warn!(
                    stream = name,
                    error = %e,
                    captured = bytes.len(),
                    "capture stopped early"
                );
                break;
            }
        }
    }
    bytes
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
