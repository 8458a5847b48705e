use crate::model::Step;
use thiserror::Error;

/// Exit code for usage errors and failures that did not come from git.
pub const FAILURE_EXIT_CODE: i32 = 1;

#[derive(Error, Debug)]
pub enum ApplyError {
    #[error("No patch text on stdin. Paste diff and end with Ctrl-D.")]
    EmptyPatch,

    #[error("git {step} failed with exit code {}", .code.map_or_else(|| "none".to_string(), |c| c.to_string()))]
    ToolFailed {
        step: Step,
        code: Option<i32>,
        stdout: Vec<u8>,
        stderr: Vec<u8>,
    },

    #[error("Failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl ApplyError {
    /// The status this process should terminate with.
    ///
    /// Git failures are relayed transparently. A child with no code at all
    /// (signal termination off Unix) falls back to [`FAILURE_EXIT_CODE`].
    pub fn exit_code(&self) -> i32 {
        match self {
            ApplyError::ToolFailed { code, .. } => code.unwrap_or(FAILURE_EXIT_CODE),
            _ => FAILURE_EXIT_CODE,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApplyError>;
