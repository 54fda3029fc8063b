// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! In-process capability implementations.
//!
//! Used for dry runs and tests: inputs come from a map, and outputs, log
//! lines and failure reports are recorded for inspection.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};

use crate::errors::ActionError;
use crate::traits::{Clock, Console, FailureReporter, InputReader, OutputWriter};

#[derive(Debug, Clone, Default)]
pub struct MemoryInputs {
    values: HashMap<String, String>,
}

impl MemoryInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl InputReader for MemoryInputs {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

/// Records every `set` call in order.
#[derive(Debug, Clone, Default)]
pub struct MemoryOutputs {
    pub entries: Vec<(String, String)>,
}

impl MemoryOutputs {
    /// Last value published under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl OutputWriter for MemoryOutputs {
    fn set(&mut self, key: &str, value: &str) -> Result<(), ActionError> {
        self.entries.push((key.to_string(), value.to_string()));
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    pub lines: Vec<String>,
}

impl Console for MemoryConsole {
    fn log(&mut self, line: &str) -> std::io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    pub failures: Vec<String>,
}

impl FailureReporter for RecordingReporter {
    fn set_failed(&mut self, description: &str) {
        self.failures.push(description.to_string());
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    /// Build from an RFC 3339 timestamp.
    pub fn parse(rfc3339: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(rfc3339).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
