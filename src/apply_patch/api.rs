//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for UI
//! clients. It owns the [`GitRunner`] and the [`ScratchFile`], dispatches to
//! `commands::*`, and returns structured [`CmdResult`] values. It never writes
//! to stdout/stderr and never exits the process.
//!
//! `PatchApi<R: GitRunner>` is generic over the runner:
//! - Production: `PatchApi<SystemGit>`
//! - Testing: `PatchApi<RecordingGit>`

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::git::GitRunner;
use crate::model::PatchDocument;
use crate::store::ScratchFile;
#[cfg(any(test, feature = "test_utils"))]
use std::path::Path;

pub struct PatchApi<R: GitRunner> {
    runner: R,
    scratch: ScratchFile,
}

impl<R: GitRunner> PatchApi<R> {
    pub fn new(runner: R, scratch: ScratchFile) -> Self {
        Self { runner, scratch }
    }

    /// Validate the patch with a dry run, then apply it to the working tree.
    pub fn apply(&self, doc: &PatchDocument) -> Result<CmdResult> {
        commands::apply::run(&self.runner, &self.scratch, doc)
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn scratch_path(&self) -> &Path {
        self.scratch.path()
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn runner(&self) -> &R {
        &self.runner
    }
}
