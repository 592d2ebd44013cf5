// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Joel Baranick

//! Consul health check CLI.
//!
//! The command layer writes only through an injected
//! [`Environment`](consulate_capture::Environment) and terminates only through
//! its exit handler, so whole invocations can be captured in tests with
//! [`consulate_capture::execute`].

pub mod app;
pub mod cli;
pub mod config;
pub mod env;
pub mod logging;
pub mod output;
pub mod version;

pub use app::{run, run_with};
pub use config::{default_client_config, ClientConfig, Config, ConfigError, ConfigSources};
