// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Semantic validation for task configurations.
//!
//! `serde` only guarantees that a document has the right shape. This pass
//! checks the resolved values (defaults applied) and collects every problem
//! instead of stopping at the first one, so a broken config can be fixed in a
//! single edit.
//!
//! Unknown task names are not checked here; `TaskFactory` rejects them when
//! the task is built.

use crate::config::consts::{GREETING_TASK, VALUE_PLACEHOLDER};
use crate::config::TaskConfig;
use crate::errors::ValidationError;
use crate::observability::messages::validation::ConfigValidationFailed;
use crate::observability::messages::StructuredLog;

/// Validate a task configuration, returning every error found.
pub fn validate_task_config(config: &TaskConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.input_name().trim().is_empty() {
        errors.push(ValidationError::EmptyInputName {
            task: config.task.clone(),
        });
    }

    let output_key = config.output_key();
    if output_key.trim().is_empty() {
        errors.push(ValidationError::EmptyOutputKey {
            task: config.task.clone(),
        });
    } else if output_key.chars().any(char::is_whitespace) {
        errors.push(ValidationError::InvalidOutputKey {
            key: output_key.to_string(),
        });
    }

    match (&config.template, config.task.as_str()) {
        (Some(template), GREETING_TASK) if !template.contains(VALUE_PLACEHOLDER) => {
            errors.push(ValidationError::MissingPlaceholder {
                template: template.clone(),
                placeholder: VALUE_PLACEHOLDER,
            });
        }
        (Some(_), task) if task != GREETING_TASK => {
            errors.push(ValidationError::UnexpectedTemplate {
                task: task.to_string(),
            });
        }
        _ => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        for error in &errors {
            ConfigValidationFailed {
                task: &config.task,
                error,
            }
            .log();
        }
        Err(errors)
    }
}
