// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{GREETING_TASK, HELLO_TIME_TASK};
use crate::config::TaskConfig;
use crate::errors::ConfigError;
use crate::host::clock::SystemClock;
use crate::traits::{Clock, Task};

use super::{GreetingTask, HelloTimeTask};

/// Factory for creating task instances from configuration
pub struct TaskFactory;

impl TaskFactory {
    /// Create a task instance from configuration
    ///
    /// The `task` field in the config determines which task to create:
    /// - "greeting" -> GreetingTask
    /// - "hello_time" -> HelloTimeTask (reads the system clock)
    pub fn create_task(config: &TaskConfig) -> Result<Box<dyn Task>, ConfigError> {
        Self::create_task_with_clock(config, Box::new(SystemClock))
    }

    /// Same as [`TaskFactory::create_task`], with an explicit clock for time-based tasks.
    pub fn create_task_with_clock(
        config: &TaskConfig,
        clock: Box<dyn Clock>,
    ) -> Result<Box<dyn Task>, ConfigError> {
        match config.task.as_str() {
            GREETING_TASK => Ok(Box::new(GreetingTask::new(
                config.input_name(),
                config.output_key(),
                config.template(),
                config.input_options(),
            ))),
            HELLO_TIME_TASK => Ok(Box::new(HelloTimeTask::new(
                config.input_name(),
                config.output_key(),
                config.input_options(),
                clock,
            ))),
            unknown => Err(ConfigError::UnknownTask {
                name: unknown.to_string(),
                available: Self::list_available_tasks().join(", "),
            }),
        }
    }

    /// List all available task names
    pub fn list_available_tasks() -> Vec<&'static str> {
        vec![GREETING_TASK, HELLO_TIME_TASK]
    }

    /// Check if a task is available
    pub fn is_task_available(name: &str) -> bool {
        Self::list_available_tasks().contains(&name)
    }
}
