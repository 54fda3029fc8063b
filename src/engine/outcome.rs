// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ActionError;
use crate::traits::FailureReporter;

/// Result of a single task run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The value was published under `key`.
    Success { key: String, value: String },
    /// The run stopped at the first failing step.
    Failure { description: String },
}

impl Outcome {
    pub fn failure(error: &ActionError) -> Self {
        Outcome::Failure {
            description: error.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Hand a failure to the reporter. Successes report nothing.
    ///
    /// This is the only place a run touches the failure-reporting side effect.
    pub fn report(&self, reporter: &mut dyn FailureReporter) {
        if let Outcome::Failure { description } = self {
            reporter.set_failed(description);
        }
    }
}
