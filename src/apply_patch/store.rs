//! # Scratch Storage
//!
//! Git reads the patch from a file, so every run materializes the stdin text at
//! a single well-known path before invoking it. The file is overwritten on each
//! run and never removed; it is left behind so a failed patch can be inspected
//! or retried by hand.
//!
//! The path defaults to `/tmp/tiara_patch.patch` and can be moved through
//! configuration (see [`crate::config`]). Concurrent runs sharing one path race
//! on the file.

use crate::error::Result;
use crate::model::PatchDocument;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the document, replacing any previous content.
    pub fn write(&self, doc: &PatchDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, doc.as_bytes())?;
        debug!(path = %self.path.display(), bytes = doc.as_bytes().len(), "wrote scratch patch");
        Ok(())
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn read(&self) -> Result<PatchDocument> {
        Ok(PatchDocument::new(fs::read(&self.path)?))
    }
}
