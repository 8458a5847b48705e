use super::{GitRunner, ToolOutput};
use crate::error::Result;
use crate::model::Step;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Scripted runner for tests. Does NOT spawn any process.
///
/// Each call pops the next scripted output; once the script is exhausted every
/// step succeeds.
#[derive(Debug, Default)]
pub struct RecordingGit {
    script: RefCell<VecDeque<ToolOutput>>,
    calls: RefCell<Vec<(Step, PathBuf)>>,
}

impl RecordingGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outputs(outputs: impl IntoIterator<Item = ToolOutput>) -> Self {
        Self {
            script: RefCell::new(outputs.into_iter().collect()),
            calls: RefCell::default(),
        }
    }

    /// Steps invoked so far, in order.
    pub fn steps(&self) -> Vec<Step> {
        self.calls.borrow().iter().map(|(step, _)| *step).collect()
    }

    pub fn calls(&self) -> Vec<(Step, PathBuf)> {
        self.calls.borrow().clone()
    }
}

impl GitRunner for RecordingGit {
    fn run(&self, step: Step, patch: &Path) -> Result<ToolOutput> {
        self.calls.borrow_mut().push((step, patch.to_path_buf()));
        Ok(self
            .script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(ToolOutput::success))
    }
}
