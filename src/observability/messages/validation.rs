// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading and validation.

use crate::errors::ValidationError;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A single validation error found in a task configuration.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use greeting_action::errors::ValidationError;
/// use greeting_action::observability::messages::validation::ConfigValidationFailed;
///
/// let error = ValidationError::EmptyOutputKey { task: "greeting".to_string() };
/// let msg = ConfigValidationFailed {
///     task: "greeting",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ConfigValidationFailed<'a> {
    pub task: &'a str,
    pub error: &'a ValidationError,
}

impl Display for ConfigValidationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Invalid configuration for task '{}': {}",
            self.task, self.error
        )
    }
}

impl StructuredLog for ConfigValidationFailed<'_> {
    fn log(&self) {
        tracing::error!(task = self.task, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "validation",
            span_name = name,
            task = self.task,
            error = %self.error,
        )
    }
}

/// Task configuration resolved.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConfigResolved<'a> {
    /// `None` when the built-in defaults are used
    pub source: Option<&'a str>,
    pub task: &'a str,
}

impl Display for ConfigResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.source {
            Some(source) => write!(f, "Loaded task '{}' from {}", self.task, source),
            None => write!(f, "Using built-in defaults for task '{}'", self.task),
        }
    }
}

impl StructuredLog for ConfigResolved<'_> {
    fn log(&self) {
        tracing::info!(
            task = self.task,
            source = self.source.unwrap_or("defaults"),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "config",
            span_name = name,
            task = self.task,
            source = self.source.unwrap_or("defaults"),
        )
    }
}
