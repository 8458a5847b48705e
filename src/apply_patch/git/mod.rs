//! # Git Runner
//!
//! All patch semantics are delegated to git. The [`GitRunner`] trait is the seam
//! between the command logic and the external process:
//!
//! - [`system::SystemGit`]: production runner, spawns the git binary and
//!   captures its output.
//! - `recording::RecordingGit`: test runner, replays scripted outputs and
//!   records which steps were invoked. Lets the command layer be tested without
//!   a git checkout.

use crate::error::Result;
use crate::model::Step;
use std::path::Path;

#[cfg(any(test, feature = "test_utils"))]
pub mod recording;
pub mod system;

/// Captured result of one git invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code. A signal-terminated child maps to `128 + signal` on Unix and
    /// is `None` elsewhere.
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ToolOutput {
    pub fn success() -> Self {
        Self {
            code: Some(0),
            ..Self::default()
        }
    }

    pub fn failure(code: i32, stderr: impl Into<Vec<u8>>) -> Self {
        Self {
            code: Some(code),
            stdout: Vec::new(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait GitRunner {
    /// Run `step` against the patch file and wait for it to finish.
    ///
    /// An unsuccessful exit is not an error here; it is reported through
    /// [`ToolOutput::code`]. Errors are reserved for failing to run git at all.
    fn run(&self, step: Step, patch: &Path) -> Result<ToolOutput>;
}
