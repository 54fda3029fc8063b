// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_GREETING_INPUT, DEFAULT_GREETING_OUTPUT, DEFAULT_GREETING_TEMPLATE, GREETING_TASK,
    VALUE_PLACEHOLDER,
};
use crate::traits::{InputOptions, Rendered, Task};

/// Greeting task - interpolates the input into a template and publishes the result.
///
/// The same string is logged and published.
#[derive(Debug, Clone)]
pub struct GreetingTask {
    input_name: String,
    output_key: String,
    template: String,
    options: InputOptions,
}

impl GreetingTask {
    pub fn new(
        input_name: impl Into<String>,
        output_key: impl Into<String>,
        template: impl Into<String>,
        options: InputOptions,
    ) -> Self {
        Self {
            input_name: input_name.into(),
            output_key: output_key.into(),
            template: template.into(),
            options,
        }
    }

    pub fn with_template(template: impl Into<String>) -> Self {
        Self::new(
            DEFAULT_GREETING_INPUT,
            DEFAULT_GREETING_OUTPUT,
            template,
            InputOptions::default(),
        )
    }

    /// Build the greeting for `value`; every placeholder occurrence is replaced.
    pub fn greet(&self, value: &str) -> String {
        self.template.replace(VALUE_PLACEHOLDER, value)
    }
}

impl Default for GreetingTask {
    fn default() -> Self {
        Self::with_template(DEFAULT_GREETING_TEMPLATE)
    }
}

impl Task for GreetingTask {
    fn name(&self) -> &'static str {
        GREETING_TASK
    }

    fn input_name(&self) -> &str {
        &self.input_name
    }

    fn input_options(&self) -> InputOptions {
        self.options
    }

    fn output_key(&self) -> &str {
        &self.output_key
    }

    fn render(&self, value: &str) -> Rendered {
        let message = self.greet(value);
        Rendered {
            log_line: message.clone(),
            output_value: message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_greeting() {
        let task = GreetingTask::default();
        assert_eq!(
            task.greet("Ada"),
            "Hello, Ada! Welcome to your custom GitHub Action."
        );
        assert_eq!(task.input_name(), "name");
        assert_eq!(task.output_key(), "greeting");
    }

    #[test]
    fn test_log_line_and_output_are_identical() {
        let task = GreetingTask::default();
        for value in ["Ada", "", "  spaced  ", "multi\nline", "{value}"] {
            let rendered = task.render(value);
            assert_eq!(rendered.log_line, rendered.output_value);
        }
    }

    #[test]
    fn test_empty_value() {
        let task = GreetingTask::default();
        assert_eq!(
            task.greet(""),
            "Hello, ! Welcome to your custom GitHub Action."
        );
    }

    #[test]
    fn test_custom_template_replaces_every_placeholder() {
        let task = GreetingTask::with_template("{value}, {value}!");
        assert_eq!(task.greet("Grace"), "Grace, Grace!");
    }

    #[test]
    fn test_placeholder_in_value_is_not_expanded() {
        let task = GreetingTask::with_template("Hello {value}!");
        assert_eq!(task.greet("{value}"), "Hello {value}!");
    }
}
