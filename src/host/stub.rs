// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io;

use crate::errors::ActionError;
use crate::traits::{Console, OutputWriter};

/// An output writer that always fails, counting how often it was called
#[derive(Default)]
pub struct FailingOutputs {
    pub calls: usize,
}

impl OutputWriter for FailingOutputs {
    fn set(&mut self, key: &str, _value: &str) -> Result<(), ActionError> {
        self.calls += 1;
        Err(ActionError::Publish {
            key: key.to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "output set is read-only"),
        })
    }
}

/// An output writer that panics, for testing panic containment
pub struct PanickingOutputs;

impl OutputWriter for PanickingOutputs {
    fn set(&mut self, _key: &str, _value: &str) -> Result<(), ActionError> {
        panic!("output store unavailable");
    }
}

/// A console whose stream is closed
pub struct BrokenConsole;

impl Console for BrokenConsole {
    fn log(&mut self, _line: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
    }
}
