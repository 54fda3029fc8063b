// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Workflow commands: `::command key=value,key=value::message` lines on stdout.
//!
//! The runner scans stdout for these lines, so message data and property
//! values are percent-escaped to keep a value from breaking out of its line
//! or, for properties, out of its `key=value` pair.

use std::fmt::{self, Display, Formatter};

/// A single workflow command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowCommand<'a> {
    command: &'a str,
    properties: Vec<(&'a str, &'a str)>,
    message: &'a str,
}

impl<'a> WorkflowCommand<'a> {
    pub fn new(command: &'a str, message: &'a str) -> Self {
        Self {
            command,
            properties: Vec::new(),
            message,
        }
    }

    pub fn property(mut self, key: &'a str, value: &'a str) -> Self {
        self.properties.push((key, value));
        self
    }

    /// `::error::<message>`
    pub fn error(message: &'a str) -> Self {
        Self::new("error", message)
    }

    /// `::set-output name=<key>::<value>`
    pub fn set_output(key: &'a str, value: &'a str) -> Self {
        Self::new("set-output", value).property("name", key)
    }
}

impl Display for WorkflowCommand<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "::{}", self.command)?;
        for (i, (key, value)) in self.properties.iter().enumerate() {
            let separator = if i == 0 { " " } else { "," };
            write!(f, "{}{}={}", separator, key, escape_property(value))?;
        }
        write!(f, "::{}", escape_data(self.message))
    }
}

/// Escape message data.
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a property value; `:` and `,` are delimiters inside the property list.
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
