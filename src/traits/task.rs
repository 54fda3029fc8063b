// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// How an input value is resolved from the input set.
///
/// Mirrors the options the hosted toolkit offers for `getInput`: an absent
/// input resolves to an empty string unless it is `required`, and values are
/// trimmed unless `trim_whitespace` is turned off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputOptions {
    pub required: bool,
    pub trim_whitespace: bool,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            required: false,
            trim_whitespace: true,
        }
    }
}

/// What a task produces from its input value.
///
/// `log_line` goes to the console, `output_value` is published under the
/// task's output key. For the greeting task the two are always equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub log_line: String,
    pub output_value: String,
}

/// A single linear step: one input in, one log line and one output out.
///
/// Implementations only decide *what* to log and publish; reading, logging,
/// publishing and failure handling are driven by `engine::run`.
pub trait Task {
    fn name(&self) -> &'static str;

    /// Key of the input read from the input set.
    fn input_name(&self) -> &str;

    fn input_options(&self) -> InputOptions {
        InputOptions::default()
    }

    /// Key under which the output value is published.
    fn output_key(&self) -> &str;

    fn render(&self, value: &str) -> Rendered;
}
