// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Task implementations.
//!
//! Each task implements the `Task` trait and only decides what to log and
//! what to publish for a given input value:
//!
//! - **greeting**: `Hello, {value}! Welcome to your custom GitHub Action.` is
//!   logged and published under `greeting`
//! - **hello_time**: `Hello {value}!` is logged and the time of day is
//!   published under `time`
//!
//! Tasks are built from a `TaskConfig` through [`TaskFactory`].

pub mod factory;
pub mod greeting;
pub mod hello_time;

pub use factory::TaskFactory;
pub use greeting::GreetingTask;
pub use hello_time::HelloTimeTask;
