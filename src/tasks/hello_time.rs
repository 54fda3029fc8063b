// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_HELLO_TIME_INPUT, DEFAULT_HELLO_TIME_OUTPUT, HELLO_TIME_TASK, TIME_OF_DAY_FORMAT,
};
use crate::host::clock::SystemClock;
use crate::traits::{Clock, InputOptions, Rendered, Task};

/// Hello-time task - greets the input in the log and publishes the time of day.
///
/// The published value depends only on the clock, never on the input.
pub struct HelloTimeTask {
    input_name: String,
    output_key: String,
    options: InputOptions,
    clock: Box<dyn Clock>,
}

impl HelloTimeTask {
    pub fn new(
        input_name: impl Into<String>,
        output_key: impl Into<String>,
        options: InputOptions,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            input_name: input_name.into(),
            output_key: output_key.into(),
            options,
            clock,
        }
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self::new(
            DEFAULT_HELLO_TIME_INPUT,
            DEFAULT_HELLO_TIME_OUTPUT,
            InputOptions::default(),
            clock,
        )
    }

    /// Current time of day, e.g. `14:03:22 GMT+0000`.
    pub fn time_of_day(&self) -> String {
        self.clock.now().format(TIME_OF_DAY_FORMAT).to_string()
    }
}

impl Default for HelloTimeTask {
    fn default() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }
}

impl Task for HelloTimeTask {
    fn name(&self) -> &'static str {
        HELLO_TIME_TASK
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
        Rendered {
            log_line: format!("Hello {}!", value),
            output_value: self.time_of_day(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::memory::FixedClock;
    use chrono::NaiveTime;

    fn fixed_task() -> HelloTimeTask {
        HelloTimeTask::with_clock(Box::new(FixedClock::parse("2025-03-14T09:26:53+02:00").unwrap()))
    }

    #[test]
    fn test_render_uses_clock_not_input() {
        let task = fixed_task();

        let first = task.render("Octocat");
        let second = task.render("someone else");

        assert_eq!(first.log_line, "Hello Octocat!");
        assert_eq!(second.log_line, "Hello someone else!");
        assert_eq!(first.output_value, "09:26:53 GMT+0200");
        assert_eq!(first.output_value, second.output_value);
    }

    #[test]
    fn test_system_clock_output_is_a_time_of_day() {
        let task = HelloTimeTask::default();
        let value = task.time_of_day();

        let (time, zone) = value.split_once(' ').unwrap();
        assert!(NaiveTime::parse_from_str(time, "%H:%M:%S").is_ok());
        assert!(zone.starts_with("GMT+") || zone.starts_with("GMT-"));
        assert_eq!(zone.len(), "GMT+0000".len());
    }

    #[test]
    fn test_defaults() {
        let task = fixed_task();
        assert_eq!(task.name(), "hello_time");
        assert_eq!(task.input_name(), "who-to-greet");
        assert_eq!(task.output_key(), "time");
    }
}
