// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod outcome;
pub mod runner;
#[cfg(test)]
pub mod integration_tests;

pub use outcome::Outcome;
pub use runner::{resolve_input, run, run_guarded};
