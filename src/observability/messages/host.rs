// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the runner-facing capability implementations.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::Span;

/// `GITHUB_OUTPUT` is not set; outputs fall back to the `set-output` command.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct OutputFileUnavailable<'a> {
    pub env_var: &'a str,
}

impl Display for OutputFileUnavailable<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} is not set, falling back to the set-output workflow command",
            self.env_var
        )
    }
}

impl StructuredLog for OutputFileUnavailable<'_> {
    fn log(&self) {
        tracing::warn!(env_var = self.env_var, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("host", span_name = name, env_var = self.env_var)
    }
}

/// Output appended to the file command.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct FileCommandWritten<'a> {
    pub path: &'a Path,
    pub key: &'a str,
}

impl Display for FileCommandWritten<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Wrote output '{}' to file command {}",
            self.key,
            self.path.display()
        )
    }
}

impl StructuredLog for FileCommandWritten<'_> {
    fn log(&self) {
        tracing::debug!(
            path = %self.path.display(),
            key = self.key,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "host",
            span_name = name,
            path = %self.path.display(),
            key = self.key,
        )
    }
}

/// Failure reported to the runner.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use greeting_action::observability::messages::host::FailureReported;
///
/// let msg = FailureReported {
///     description: "Input required and not supplied: name",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct FailureReported<'a> {
    pub description: &'a str,
}

impl Display for FailureReported<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Run marked as failed: {}", self.description)
    }
}

impl StructuredLog for FailureReported<'_> {
    fn log(&self) {
        tracing::error!(description = self.description, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("host", span_name = name, description = self.description)
    }
}
