// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod host;
pub mod task;

pub use host::{Clock, Console, FailureReporter, InputReader, OutputWriter};
pub use task::{InputOptions, Rendered, Task};
