// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while a task runs.
//!
//! Every variant collapses into a single `Outcome::Failure` at the engine
//! boundary; the variants exist so that logs and tests can tell the steps
//! apart. The `Display` text is what the failure reporter receives.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActionError {
    /// A required input was absent or blank.
    #[error("Input required and not supplied: {name}")]
    InputRequired { name: String },

    /// Writing the log line to the console failed.
    #[error("Failed to write log line: {0}")]
    Log(#[source] std::io::Error),

    /// Publishing the output value failed.
    #[error("Failed to set output '{key}': {source}")]
    Publish {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The output key or value collides with the file-command delimiter.
    #[error("Unexpected input: {field} should not contain the delimiter \"{delimiter}\"")]
    InvalidDelimiter {
        field: &'static str,
        delimiter: String,
    },

    /// A capability panicked while the task was running.
    #[error("Task '{task}' panicked: {message}")]
    Panicked { task: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_required_message_names_the_input() {
        let error = ActionError::InputRequired {
            name: "who-to-greet".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Input required and not supplied: who-to-greet"
        );
    }

    #[test]
    fn test_publish_message_includes_source() {
        let error = ActionError::Publish {
            key: "greeting".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only file"),
        };
        let message = error.to_string();
        assert!(message.contains("greeting"));
        assert!(message.contains("read-only file"));
    }
}
