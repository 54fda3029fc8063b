// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod action;
mod config;

pub use action::ActionError;
pub use config::{ConfigError, ValidationError};
