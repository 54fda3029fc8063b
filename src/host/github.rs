// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Capabilities backed by the GitHub Actions runner.
//!
//! - Inputs arrive as `INPUT_<NAME>` environment variables
//! - Outputs are appended to the file named by `GITHUB_OUTPUT`, or emitted as
//!   the `set-output` workflow command when that variable is missing
//! - The log line goes to stdout
//! - Failures are reported with the `error` workflow command and turn the
//!   exit code to 1

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use uuid::Uuid;

use crate::errors::ActionError;
use crate::host::command::WorkflowCommand;
use crate::observability::messages::host::{
    FailureReported, FileCommandWritten, OutputFileUnavailable,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{Console, FailureReporter, InputReader, OutputWriter};

/// Environment variable holding the path of the output file command
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";
const INPUT_PREFIX: &str = "INPUT_";
const DELIMITER_PREFIX: &str = "ghadelimiter_";

/// Environment variable the runner uses for input `name`.
///
/// Spaces become underscores and the name is upper-cased; dashes are kept
/// (`who-to-greet` -> `INPUT_WHO-TO-GREET`).
pub fn input_env_var(name: &str) -> String {
    format!("{}{}", INPUT_PREFIX, name.replace(' ', "_").to_uppercase())
}

/// Snapshot of the `INPUT_*` environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvInputs {
    vars: HashMap<String, String>,
}

impl EnvInputs {
    /// Capture inputs from the process environment.
    ///
    /// Variables that are not valid UTF-8 are skipped.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars_os().filter_map(|(key, value)| {
            Some((key.into_string().ok()?, value.into_string().ok()?))
        }))
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| k.starts_with(INPUT_PREFIX))
            .collect();
        Self { vars }
    }
}

impl InputReader for EnvInputs {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(&input_env_var(name)).cloned()
    }
}

/// Output writer for the runner.
pub struct GithubOutputs<W = io::Stdout> {
    file: Option<PathBuf>,
    commands: W,
}

impl GithubOutputs<io::Stdout> {
    /// Use `GITHUB_OUTPUT` when set, otherwise fall back to stdout commands.
    pub fn from_env() -> Self {
        let file = std::env::var_os(GITHUB_OUTPUT_ENV)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);
        if file.is_none() {
            OutputFileUnavailable {
                env_var: GITHUB_OUTPUT_ENV,
            }
            .log();
        }
        Self::new(file, io::stdout())
    }
}

impl<W: Write> GithubOutputs<W> {
    pub fn new(file: Option<PathBuf>, commands: W) -> Self {
        Self { file, commands }
    }

    /// Consume the writer and return the command stream.
    pub fn into_inner(self) -> W {
        self.commands
    }

    fn append_to_file(path: &Path, key: &str, value: &str) -> Result<(), ActionError> {
        let message = key_value_message(key, value, &new_delimiter())?;
        // the runner creates the file; a missing one means a misconfigured step
        let mut file = OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => publish_error(
                    key,
                    io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("Missing file at path: {}", path.display()),
                    ),
                ),
                _ => publish_error(key, source),
            })?;
        file.write_all(message.as_bytes())
            .map_err(|source| publish_error(key, source))?;

        FileCommandWritten { path, key }.log();
        Ok(())
    }
}

impl<W: Write> OutputWriter for GithubOutputs<W> {
    fn set(&mut self, key: &str, value: &str) -> Result<(), ActionError> {
        match &self.file {
            Some(path) => Self::append_to_file(path, key, value),
            None => writeln!(self.commands, "{}", WorkflowCommand::set_output(key, value))
                .map_err(|source| publish_error(key, source)),
        }
    }
}

fn publish_error(key: &str, source: io::Error) -> ActionError {
    ActionError::Publish {
        key: key.to_string(),
        source,
    }
}

fn new_delimiter() -> String {
    format!("{}{}", DELIMITER_PREFIX, Uuid::new_v4())
}

/// Heredoc-style block understood by the runner's file commands.
///
/// ```text
/// key<<ghadelimiter_<uuid>
/// value
/// ghadelimiter_<uuid>
/// ```
pub fn key_value_message(key: &str, value: &str, delimiter: &str) -> Result<String, ActionError> {
    if key.contains(delimiter) {
        return Err(ActionError::InvalidDelimiter {
            field: "name",
            delimiter: delimiter.to_string(),
        });
    }
    if value.contains(delimiter) {
        return Err(ActionError::InvalidDelimiter {
            field: "value",
            delimiter: delimiter.to_string(),
        });
    }
    Ok(format!("{key}<<{delimiter}\n{value}\n{delimiter}\n"))
}

/// Console that writes one line per log call.
pub struct WriterConsole<W = io::Stdout> {
    out: W,
}

impl WriterConsole<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> WriterConsole<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Console for WriterConsole<W> {
    fn log(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", line)?;
        self.out.flush()
    }
}

/// Reports failures with the `error` workflow command.
pub struct WorkflowCommandReporter<W = io::Stdout> {
    out: W,
    failed: bool,
}

impl WorkflowCommandReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> WorkflowCommandReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, failed: false }
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Exit code for the process: 1 once a failure was reported.
    pub fn exit_code(&self) -> ExitCode {
        if self.failed {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FailureReporter for WorkflowCommandReporter<W> {
    fn set_failed(&mut self, description: &str) {
        self.failed = true;
        FailureReported { description }.log();

        // the exit code still carries the failure if stdout is gone
        if let Err(e) = writeln!(self.out, "{}", WorkflowCommand::error(description))
            .and_then(|_| self.out.flush())
        {
            tracing::error!(error = %e, "Failed to write error command");
        }
    }
}
