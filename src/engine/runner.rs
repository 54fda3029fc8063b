// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Linear task execution: read → render → log → publish.
//!
//! [`run`] never reports failures itself; it returns an [`Outcome`] and the
//! caller decides how to surface it (see [`Outcome::report`]). [`run_guarded`]
//! additionally turns a panic inside any capability into a failure so the
//! process never dies with an unhandled fault.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::engine::Outcome;
use crate::errors::ActionError;
use crate::observability::messages::task::{
    InputDefaulted, InputResolved, OutputPublished, TaskFailed, TaskStarted,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{Console, InputOptions, InputReader, OutputWriter, Task};

/// Resolve an input value.
///
/// An absent input and an input set to the empty string are treated alike:
/// the run fails when the input is `required`, otherwise the empty string is
/// used. The presence check looks at the raw value, before trimming.
pub fn resolve_input(
    inputs: &dyn InputReader,
    name: &str,
    options: InputOptions,
) -> Result<String, ActionError> {
    let raw = inputs.get(name).unwrap_or_default();

    if raw.is_empty() {
        if options.required {
            return Err(ActionError::InputRequired {
                name: name.to_string(),
            });
        }
        InputDefaulted { input_name: name }.log();
        return Ok(raw);
    }

    let value = if options.trim_whitespace {
        raw.trim().to_string()
    } else {
        raw
    };

    InputResolved {
        input_name: name,
        value_len: value.chars().count(),
        trimmed: options.trim_whitespace,
    }
    .log();

    Ok(value)
}

/// Run `task` once against the given capabilities.
pub fn run<T: Task + ?Sized>(
    task: &T,
    inputs: &dyn InputReader,
    outputs: &mut dyn OutputWriter,
    console: &mut dyn Console,
) -> Outcome {
    let started = TaskStarted {
        task: task.name(),
        input_name: task.input_name(),
        output_key: task.output_key(),
    };
    let span = started.span("task_run");
    let _guard = span.enter();
    started.log();

    match execute(task, inputs, outputs, console) {
        Ok(value) => {
            OutputPublished {
                task: task.name(),
                output_key: task.output_key(),
                value_len: value.chars().count(),
            }
            .log();

            Outcome::Success {
                key: task.output_key().to_string(),
                value,
            }
        }
        Err(error) => {
            TaskFailed {
                task: task.name(),
                error: &error,
            }
            .log();

            Outcome::failure(&error)
        }
    }
}

fn execute<T: Task + ?Sized>(
    task: &T,
    inputs: &dyn InputReader,
    outputs: &mut dyn OutputWriter,
    console: &mut dyn Console,
) -> Result<String, ActionError> {
    let value = resolve_input(inputs, task.input_name(), task.input_options())?;
    let rendered = task.render(&value);

    console.log(&rendered.log_line).map_err(ActionError::Log)?;
    outputs.set(task.output_key(), &rendered.output_value)?;

    Ok(rendered.output_value)
}

/// Like [`run`], but a panic anywhere in the run becomes `Outcome::Failure`.
pub fn run_guarded<T: Task + ?Sized>(
    task: &T,
    inputs: &dyn InputReader,
    outputs: &mut dyn OutputWriter,
    console: &mut dyn Console,
) -> Outcome {
    let result = panic::catch_unwind(AssertUnwindSafe(|| run(task, inputs, outputs, console)));

    match result {
        Ok(outcome) => outcome,
        Err(payload) => {
            let error = ActionError::Panicked {
                task: task.name().to_string(),
                message: panic_message(payload.as_ref()),
            };
            TaskFailed {
                task: task.name(),
                error: &error,
            }
            .log();

            Outcome::failure(&error)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::memory::MemoryInputs;

    #[test]
    fn test_resolve_present_input_is_trimmed() {
        let inputs = MemoryInputs::new().with("name", "  Ada \n");
        let value = resolve_input(&inputs, "name", InputOptions::default()).unwrap();
        assert_eq!(value, "Ada");
    }

    #[test]
    fn test_resolve_without_trimming() {
        let inputs = MemoryInputs::new().with("name", "  Ada ");
        let options = InputOptions {
            required: false,
            trim_whitespace: false,
        };
        assert_eq!(resolve_input(&inputs, "name", options).unwrap(), "  Ada ");
    }

    #[test]
    fn test_resolve_absent_optional_input_is_empty() {
        let inputs = MemoryInputs::new();
        let value = resolve_input(&inputs, "name", InputOptions::default()).unwrap();
        assert_eq!(value, "");
    }

    #[test]
    fn test_resolve_absent_required_input_fails() {
        let inputs = MemoryInputs::new();
        let options = InputOptions {
            required: true,
            trim_whitespace: true,
        };

        let error = resolve_input(&inputs, "who-to-greet", options).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Input required and not supplied: who-to-greet"
        );
    }

    #[test]
    fn test_resolve_empty_required_input_fails() {
        let inputs = MemoryInputs::new().with("name", "");
        let options = InputOptions {
            required: true,
            trim_whitespace: true,
        };
        assert!(matches!(
            resolve_input(&inputs, "name", options),
            Err(ActionError::InputRequired { .. })
        ));
    }

    #[test]
    fn test_resolve_whitespace_required_input_is_accepted() {
        let inputs = MemoryInputs::new().with("name", "   ");
        let options = InputOptions {
            required: true,
            trim_whitespace: true,
        };
        assert_eq!(resolve_input(&inputs, "name", options).unwrap(), "");
    }

    #[test]
    fn test_panic_message_variants() {
        let payload: Box<dyn Any + Send> = Box::new("static message");
        assert_eq!(panic_message(payload.as_ref()), "static message");

        let payload: Box<dyn Any + Send> = Box::new(String::from("owned message"));
        assert_eq!(panic_message(payload.as_ref()), "owned message");

        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic payload");
    }
}
