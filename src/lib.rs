// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // task config loading + validation
pub mod engine;     // linear run + outcome
pub mod errors;     // error handling
pub mod host;       // runner and in-memory capabilities
pub mod observability;
pub mod tasks;      // greeting + hello_time
pub mod traits;     // unified abstractions
