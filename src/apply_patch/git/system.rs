use super::{GitRunner, ToolOutput};
use crate::error::{ApplyError, Result};
use crate::model::Step;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

/// Runs the real git binary in the current working directory.
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: String,
}

impl SystemGit {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitRunner for SystemGit {
    fn run(&self, step: Step, patch: &Path) -> Result<ToolOutput> {
        debug!(program = %self.program, %step, patch = %patch.display(), "running git");

        let output = Command::new(&self.program)
            .args(step.git_args())
            .arg(patch)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ApplyError::Launch {
                program: self.program.clone(),
                source,
            })?;

        let code = exit_code(&output.status);
        debug!(%step, ?code, "git finished");

        Ok(ToolOutput {
            code,
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// Shell convention: a child killed by signal N reports `128 + N`.
#[cfg(unix)]
fn exit_code(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.code().or_else(|| status.signal().map(|sig| 128 + sig))
}

#[cfg(not(unix))]
fn exit_code(status: &ExitStatus) -> Option<i32> {
    status.code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_binary_is_launch_error() {
        let dir = TempDir::new().unwrap();
        let git = SystemGit::new("apply-patch-no-such-git-binary");

        let err = git.run(Step::Check, &dir.path().join("p.patch")).unwrap_err();
        match err {
            ApplyError::Launch { program, .. } => {
                assert_eq!(program, "apply-patch-no-such-git-binary")
            }
            other => panic!("expected launch error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_program_is_git() {
        assert_eq!(SystemGit::default().program(), "git");
    }

    #[cfg(unix)]
    #[test]
    fn test_signal_termination_maps_to_shell_code() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let script = dir.path().join("killed-git");
        std::fs::write(&script, "#!/bin/sh\nkill -9 $$\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let git = SystemGit::new(script.to_string_lossy());
        let output = git.run(Step::Check, &dir.path().join("p.patch")).unwrap();

        assert_eq!(output.code, Some(128 + 9));
        assert!(!output.is_success());
    }
}
