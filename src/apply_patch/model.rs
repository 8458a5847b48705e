//! # Data Model
//!
//! Two small types flow through the whole crate:
//!
//! - [`PatchDocument`]: the raw bytes read from stdin. Bytes rather than a
//!   `String` so that the scratch copy is byte-identical to the input, even when
//!   the input is not valid UTF-8.
//! - [`Step`]: one of the two git invocations made per run.

use std::fmt;

/// A patch document as received on stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchDocument {
    bytes: Vec<u8>,
}

impl PatchDocument {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// True when there is nothing but whitespace to apply.
    pub fn is_blank(&self) -> bool {
        String::from_utf8_lossy(&self.bytes).trim().is_empty()
    }
}

impl From<&str> for PatchDocument {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl From<String> for PatchDocument {
    fn from(text: String) -> Self {
        Self::new(text.into_bytes())
    }
}

/// A git invocation against the scratch file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Dry run: `git apply --check`, never touches the working tree.
    Check,
    /// `git apply`, writes the changes into the working tree.
    Apply,
}

impl Step {
    /// Steps in the order they run.
    pub const ALL: [Step; 2] = [Step::Check, Step::Apply];

    /// Arguments passed to git, before the patch path.
    pub fn git_args(&self) -> &'static [&'static str] {
        match self {
            Step::Check => &["apply", "--check"],
            Step::Apply => &["apply"],
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.git_args().join(" "))
    }
}
