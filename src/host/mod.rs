// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Capability implementations for the hosting environment.
//!
//! # Available Hosts
//!
//! ## GitHub
//! The Actions runner: `INPUT_*` environment variables, the `GITHUB_OUTPUT`
//! file command, stdout for the log line and workflow commands for failures.
//!
//! ## Memory
//! In-process maps and recorders for dry runs and tests, plus a fixed clock.
//!
//! ## Stub (Test-Only)
//! Capabilities that fail or panic on purpose:
//! - **FailingOutputs**: publish always returns an error
//! - **PanickingOutputs**: publish panics
//! - **BrokenConsole**: the log stream is closed
//!
//! # Examples
//!
//! ```rust
//! use greeting_action::host::memory::{MemoryInputs, MemoryOutputs, MemoryConsole};
//! use greeting_action::engine::{run, Outcome};
//! use greeting_action::tasks::GreetingTask;
//!
//! let inputs = MemoryInputs::new().with("name", "Ada");
//! let mut outputs = MemoryOutputs::default();
//! let mut console = MemoryConsole::default();
//!
//! let outcome = run(&GreetingTask::default(), &inputs, &mut outputs, &mut console);
//! assert!(matches!(outcome, Outcome::Success { .. }));
//! ```

pub mod clock;
pub mod command;
pub mod github;
pub mod memory;
#[cfg(test)]
pub mod stub;
