// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Semantic problems found in an otherwise well-formed task configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The input name resolves to an empty string
    #[error("Task '{task}' has an empty input name")]
    EmptyInputName { task: String },

    /// The output key resolves to an empty string
    #[error("Task '{task}' has an empty output key")]
    EmptyOutputKey { task: String },

    /// The output key cannot be written as a single output name
    #[error("Output key '{key}' must not contain whitespace or line breaks")]
    InvalidOutputKey { key: String },

    /// A greeting template without the value placeholder would ignore the input
    #[error("Template '{template}' does not contain the '{placeholder}' placeholder")]
    MissingPlaceholder {
        template: String,
        placeholder: &'static str,
    },

    /// Templates only apply to the greeting task
    #[error("Task '{task}' does not accept a template")]
    UnexpectedTemplate { task: String },
}

/// Errors produced while loading a task configuration from disk.
///
/// `Io` and `Parse` keep the underlying error as their source only; print
/// with `{:#}` (anyhow) to get the full chain.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config")]
    Parse(#[from] serde_yaml::Error),

    #[error("Configuration validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("Unknown task '{name}'. Available tasks: {available}")]
    UnknownTask { name: String, available: String },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
