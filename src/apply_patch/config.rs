//! # Configuration
//!
//! Settings are resolved in priority order:
//! 1. **Environment variables**: `APPLY_PATCH_SCRATCH`, `APPLY_PATCH_GIT`.
//! 2. **Config file**: `config.json` in the OS config directory (via the
//!    `directories` crate), or in `$APPLY_PATCH_CONFIG_DIR` when set.
//! 3. **Compiled defaults**.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `scratch_path` | `/tmp/tiara_patch.patch` | Where the patch is written before git reads it |
//! | `git` | `git` | Git binary used for both steps |

use crate::error::{ApplyError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILENAME: &str = "config.json";
const SCRATCH_FILENAME: &str = "tiara_patch.patch";
const DEFAULT_GIT: &str = "git";

pub const ENV_SCRATCH: &str = "APPLY_PATCH_SCRATCH";
pub const ENV_GIT: &str = "APPLY_PATCH_GIT";
pub const ENV_CONFIG_DIR: &str = "APPLY_PATCH_CONFIG_DIR";

fn default_scratch_path() -> PathBuf {
    if cfg!(unix) {
        PathBuf::from("/tmp").join(SCRATCH_FILENAME)
    } else {
        std::env::temp_dir().join(SCRATCH_FILENAME)
    }
}

fn default_git() -> String {
    DEFAULT_GIT.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatchConfig {
    #[serde(default = "default_scratch_path")]
    pub scratch_path: PathBuf,

    #[serde(default = "default_git")]
    pub git: String,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            scratch_path: default_scratch_path(),
            git: default_git(),
        }
    }
}

impl PatchConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        serde_json::from_str(&content)
            .map_err(|e| ApplyError::Config(format!("{}: {}", config_path.display(), e)))
    }

    /// Apply environment overrides on top of the loaded values.
    ///
    /// Takes a lookup function so callers (and tests) control the environment.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_SCRATCH).filter(|v| !v.is_empty()) {
            self.scratch_path = PathBuf::from(path);
        }
        if let Some(git) = lookup(ENV_GIT).filter(|v| !v.is_empty()) {
            self.git = git;
        }
        self
    }

    /// Full resolution: config file, then environment.
    pub fn resolve() -> Result<Self> {
        let loaded = match config_dir() {
            Some(dir) => {
                debug!(dir = %dir.display(), "loading config");
                Self::load(&dir)?
            }
            None => Self::default(),
        };
        let config = loaded.with_env(|key| std::env::var(key).ok());
        debug!(scratch = %config.scratch_path.display(), git = %config.git, "resolved config");
        Ok(config)
    }
}

fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "apply-patch", "apply-patch").map(|d| d.config_dir().to_path_buf())
}
