// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Joel Baranick

//! Command dispatch against an injected [`Environment`].

use crate::cli::{Cli, Command};
use crate::config::{Config, ConfigError, ConfigLocation, ConfigSources};
use crate::output::{print_error, print_warning};
use crate::version;
use clap::Parser;
use consulate_capture::{exit_codes, Environment};
use std::ffi::OsString;
use std::io::Write;

/// Parse `args`, run the selected command, and report the outcome through
/// `env.exit`.
///
/// All output goes to `env`'s streams. With the process environment this
/// never returns; under a capture harness it returns after recording the
/// exit code. Config files are discovered from the process environment.
pub fn run<I, T>(args: I, env: &mut Environment)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    run_with(args, env, &ConfigSources::from_process());
}

/// [`run`] with explicit config sources instead of `CONSULATE_CONFIG` and `$HOME`
pub fn run_with<I, T>(args: I, env: &mut Environment, sources: &ConfigSources)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let code = dispatch(args, env, sources);
    if let Err(e) = env.stdout().flush() {
        tracing::warn!(error = %e, "failed to flush stdout");
    }
    if let Err(e) = env.stderr().flush() {
        tracing::warn!(error = %e, "failed to flush stderr");
    }
    env.exit(code);
}

fn dispatch<I, T>(args: I, env: &mut Environment, sources: &ConfigSources) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(env, &err),
    };
    tracing::debug!(?cli, "arguments parsed");

    let config = match load_config(&cli, env, sources) {
        Ok(config) => config,
        Err(e) => {
            print_error(env, e);
            return exit_codes::ERROR;
        }
    };
    tracing::debug!(client = ?config.client, "client configuration");

    match cli.command {
        Command::Version => version::run(env),
    }
}

/// Load the discovered config file, announcing it on stdout
fn load_config(
    cli: &Cli,
    env: &mut Environment,
    sources: &ConfigSources,
) -> Result<Config, ConfigError> {
    if let (Some(_), Some(ignored)) = (&cli.config, &sources.config_env) {
        print_warning(
            env,
            format_args!(
                "Ignoring {}={} because --config was given",
                crate::env::CONSULATE_CONFIG,
                ignored.display()
            ),
        );
    }
    let Some(location) = ConfigLocation::discover(cli.config.as_deref(), sources) else {
        return Ok(Config::default());
    };
    match location.load()? {
        Some(config) => {
            let _ = writeln!(env.stdout(), "Using config file: {}", location.path.display());
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}

/// Help and version requests go to stdout; real errors go to stderr
fn report_parse_error(env: &mut Environment, err: &clap::Error) -> i32 {
    let rendered = err.to_string();
    let stream = if err.use_stderr() {
        env.stderr()
    } else {
        env.stdout()
    };
    let _ = stream.write_all(rendered.as_bytes());
    err.exit_code()
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
