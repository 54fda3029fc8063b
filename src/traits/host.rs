// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Capabilities the hosting automation environment provides to a task.
//!
//! Tasks never touch environment variables, files or stdout directly. The
//! engine receives these capabilities explicitly, so the GitHub runner
//! implementations in `host::github` and the in-memory doubles in
//! `host::memory` are interchangeable.

use chrono::{DateTime, FixedOffset};

use crate::errors::ActionError;

/// Read access to the input set.
pub trait InputReader {
    /// Raw value stored under `name`, or `None` when the input was not supplied.
    fn get(&self, name: &str) -> Option<String>;
}

/// Write access to the output set consumed by downstream steps.
pub trait OutputWriter {
    fn set(&mut self, key: &str, value: &str) -> Result<(), ActionError>;
}

/// Human-readable log stream.
pub trait Console {
    fn log(&mut self, line: &str) -> std::io::Result<()>;
}

/// Side channel that marks a run as failed.
pub trait FailureReporter {
    fn set_failed(&mut self, description: &str);
}

/// Source of wall-clock time.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}
