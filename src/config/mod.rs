// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod resolve;
mod validation;

pub mod consts;

pub use loader::{load_and_validate_config, load_config, parse_config, InputConfig, TaskConfig};
pub use resolve::{build_task, config_path, resolve_config};
pub use validation::validate_task_config;
