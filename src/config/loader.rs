// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_GREETING_INPUT, DEFAULT_GREETING_OUTPUT, DEFAULT_GREETING_TEMPLATE,
    DEFAULT_HELLO_TIME_INPUT, DEFAULT_HELLO_TIME_OUTPUT, GREETING_TASK, HELLO_TIME_TASK,
};
use crate::errors::ConfigError;
use crate::traits::InputOptions;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Configuration for a single action run.
///
/// Every field except `task` is optional; omitted fields fall back to the
/// defaults of the selected task, so an empty document configures the
/// greeting task exactly as the action ships.
///
/// # Fields
/// * `task` - Which task to run (`greeting` or `hello_time`)
/// * `input` - Name and resolution options of the single input
/// * `output` - Key under which the result is published
/// * `template` - Greeting text; `{value}` is replaced by the input (greeting only)
///
/// # Example
/// ```yaml
/// task: greeting
/// input:
///   name: name
///   required: true
/// output: greeting
/// template: "Hello, {value}! Welcome to your custom GitHub Action."
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskConfig {
    #[serde(default = "default_task")]
    pub task: String,
    #[serde(default)]
    pub input: InputConfig,
    pub output: Option<String>,
    pub template: Option<String>,
}

/// Input section of a [`TaskConfig`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    pub name: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default = "default_trim_whitespace")]
    pub trim_whitespace: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            name: None,
            required: false,
            trim_whitespace: default_trim_whitespace(),
        }
    }
}

fn default_task() -> String {
    GREETING_TASK.to_string()
}

fn default_trim_whitespace() -> bool {
    true
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self::greeting()
    }
}

impl TaskConfig {
    /// The greeting task with every default applied.
    pub fn greeting() -> Self {
        Self::for_task(GREETING_TASK)
    }

    /// The hello-time task with every default applied.
    pub fn hello_time() -> Self {
        Self::for_task(HELLO_TIME_TASK)
    }

    fn for_task(task: &str) -> Self {
        Self {
            task: task.to_string(),
            input: InputConfig::default(),
            output: None,
            template: None,
        }
    }

    fn is_hello_time(&self) -> bool {
        self.task == HELLO_TIME_TASK
    }

    /// Input name, falling back to the task's default.
    pub fn input_name(&self) -> &str {
        match &self.input.name {
            Some(name) => name.as_str(),
            None if self.is_hello_time() => DEFAULT_HELLO_TIME_INPUT,
            None => DEFAULT_GREETING_INPUT,
        }
    }

    /// Output key, falling back to the task's default.
    pub fn output_key(&self) -> &str {
        match &self.output {
            Some(key) => key.as_str(),
            None if self.is_hello_time() => DEFAULT_HELLO_TIME_OUTPUT,
            None => DEFAULT_GREETING_OUTPUT,
        }
    }

    /// Greeting template, falling back to the shipped greeting.
    pub fn template(&self) -> &str {
        self.template.as_deref().unwrap_or(DEFAULT_GREETING_TEMPLATE)
    }

    pub fn input_options(&self) -> InputOptions {
        InputOptions {
            required: self.input.required,
            trim_whitespace: self.input.trim_whitespace,
        }
    }
}

/// Parse a task config from a YAML document.
pub fn parse_config(content: &str) -> Result<TaskConfig, ConfigError> {
    // serde_yaml rejects an empty document; treat it as "all defaults"
    if content.trim().is_empty() {
        return Ok(TaskConfig::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Load a task config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TaskConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

/// Load a task config from a YAML file and run the semantic checks
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<TaskConfig, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_task_config(&cfg).map_err(ConfigError::Validation)?;
    Ok(cfg)
}
