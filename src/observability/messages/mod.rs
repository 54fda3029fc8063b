// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! # Organization
//!
//! * `task` - Task lifecycle: start, input resolution, publication, failure
//! * `host` - Events from the runner-facing capability implementations
//! * `validation` - Configuration loading and validation
//!
//! # Usage Pattern
//!
//! ```rust
//! use greeting_action::observability::messages::task::OutputPublished;
//!
//! let msg = OutputPublished {
//!     task: "greeting",
//!     output_key: "greeting",
//!     value_len: 52,
//! };
//!
//! tracing::info!("{}", msg);
//! ```

use tracing::Span;

pub mod host;
pub mod task;
pub mod validation;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog: std::fmt::Display {
    /// Emit the message as a tracing event at its level.
    fn log(&self);

    /// Open a span carrying the same fields as the message.
    fn span(&self, name: &str) -> Span;
}
