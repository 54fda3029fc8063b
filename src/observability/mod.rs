// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! Diagnostic events are emitted through `tracing` using message structs that
//! implement `Display` and [`messages::StructuredLog`]. This keeps the log text
//! in one place and attaches the same values as structured fields.
//!
//! Diagnostics never go to stdout: the subscriber installed by
//! [`init_tracing`] writes to stderr, because the runner parses stdout for
//! workflow commands and the task's own log line.
//!
//! # Usage
//!
//! ```rust
//! use greeting_action::observability::messages::task::TaskStarted;
//! use greeting_action::observability::messages::StructuredLog;
//!
//! let msg = TaskStarted {
//!     task: "greeting",
//!     input_name: "name",
//!     output_key: "greeting",
//! };
//!
//! msg.log();
//! ```

pub mod messages;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable the runner sets to `1` when step debug logging is on
pub const RUNNER_DEBUG_ENV: &str = "RUNNER_DEBUG";

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(runner_debug: Option<&str>) -> &'static str {
    match runner_debug {
        Some("1") => "greeting_action=debug",
        _ => "greeting_action=info",
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when present; otherwise the level follows the runner's
/// debug flag.
pub fn init_tracing() {
    let runner_debug = std::env::var(RUNNER_DEBUG_ENV).ok();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(runner_debug.as_deref()).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
