// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for task lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Task start and the keys it will read and publish
//! * Input resolution (supplied, defaulted to empty)
//! * Output publication
//! * Task failure and contained panics

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Task run started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use greeting_action::observability::messages::task::TaskStarted;
///
/// let msg = TaskStarted {
///     task: "greeting",
///     input_name: "name",
///     output_key: "greeting",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct TaskStarted<'a> {
    pub task: &'a str,
    pub input_name: &'a str,
    pub output_key: &'a str,
}

impl Display for TaskStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Task '{}' started: input='{}', output='{}'",
            self.task, self.input_name, self.output_key
        )
    }
}

impl StructuredLog for TaskStarted<'_> {
    fn log(&self) {
        tracing::info!(
            task = self.task,
            input_name = self.input_name,
            output_key = self.output_key,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "task",
            span_name = name,
            task = self.task,
            input_name = self.input_name,
            output_key = self.output_key,
        )
    }
}

/// Input value resolved from the input set.
///
/// Only the length is logged; input values may be sensitive.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct InputResolved<'a> {
    pub input_name: &'a str,
    pub value_len: usize,
    pub trimmed: bool,
}

impl Display for InputResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Input '{}' resolved: length={} chars, trimmed={}",
            self.input_name, self.value_len, self.trimmed
        )
    }
}

impl StructuredLog for InputResolved<'_> {
    fn log(&self) {
        tracing::debug!(
            input_name = self.input_name,
            value_len = self.value_len,
            trimmed = self.trimmed,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "input",
            span_name = name,
            input_name = self.input_name,
            value_len = self.value_len,
        )
    }
}

/// Optional input absent; the empty string is substituted.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
///
/// # Example
/// ```
/// use greeting_action::observability::messages::task::InputDefaulted;
///
/// let msg = InputDefaulted { input_name: "who-to-greet" };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct InputDefaulted<'a> {
    pub input_name: &'a str,
}

impl Display for InputDefaulted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Input '{}' not supplied, using empty string",
            self.input_name
        )
    }
}

impl StructuredLog for InputDefaulted<'_> {
    fn log(&self) {
        tracing::warn!(input_name = self.input_name, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("input", span_name = name, input_name = self.input_name)
    }
}

/// Output value published to the output set.
///
/// # Log Level
/// `info!` - Important operational event
pub struct OutputPublished<'a> {
    pub task: &'a str,
    pub output_key: &'a str,
    pub value_len: usize,
}

impl Display for OutputPublished<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Task '{}' published output '{}': length={} chars",
            self.task, self.output_key, self.value_len
        )
    }
}

impl StructuredLog for OutputPublished<'_> {
    fn log(&self) {
        tracing::info!(
            task = self.task,
            output_key = self.output_key,
            value_len = self.value_len,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "output",
            span_name = name,
            task = self.task,
            output_key = self.output_key,
        )
    }
}

/// Task run failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use greeting_action::observability::messages::task::TaskFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
/// let msg = TaskFailed {
///     task: "greeting",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct TaskFailed<'a> {
    pub task: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for TaskFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Task '{}' failed: {}", self.task, self.error)
    }
}

impl StructuredLog for TaskFailed<'_> {
    fn log(&self) {
        tracing::error!(
            task = self.task,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "task",
            span_name = name,
            task = self.task,
            error = %self.error,
        )
    }
}
