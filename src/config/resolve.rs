// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::{load_and_validate_config, TaskConfig};
use crate::observability::messages::validation::ConfigResolved;
use crate::observability::messages::StructuredLog;
use crate::tasks::TaskFactory;
use crate::traits::Task;

/// Pick the config file to load.
///
/// The command-line argument wins over the environment value; an empty
/// environment value counts as unset.
pub fn config_path(arg: Option<&Path>, env: Option<&OsStr>) -> Option<PathBuf> {
    arg.map(Path::to_path_buf)
        .or_else(|| env.filter(|path| !path.is_empty()).map(PathBuf::from))
}

/// Resolve the task config from an explicit path, the environment, or the
/// built-in greeting defaults, in that order.
pub fn resolve_config(arg: Option<&Path>, env: Option<&OsStr>) -> anyhow::Result<TaskConfig> {
    let Some(path) = config_path(arg, env) else {
        let config = TaskConfig::default();
        ConfigResolved {
            source: None,
            task: &config.task,
        }
        .log();
        return Ok(config);
    };

    let config = load_and_validate_config(&path)
        .with_context(|| format!("Failed to load task config from {}", path.display()))?;
    ConfigResolved {
        source: Some(&path.display().to_string()),
        task: &config.task,
    }
    .log();
    Ok(config)
}

/// Resolve the config and build the task it names.
pub fn build_task(arg: Option<&Path>, env: Option<&OsStr>) -> anyhow::Result<Box<dyn Task>> {
    let config = resolve_config(arg, env)?;
    let task = TaskFactory::create_task(&config)?;
    Ok(task)
}
