use std::path::PathBuf;

pub mod apply;

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdResult {
    /// Where the patch was persisted before git read it.
    pub patch_path: PathBuf,
}

impl CmdResult {
    pub fn new(patch_path: PathBuf) -> Self {
        Self { patch_path }
    }
}
