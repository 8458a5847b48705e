//! Check-then-apply pipeline.
//!
//! Three strictly sequential stages with early exit:
//! persist the document, `git apply --check`, `git apply`. A failing stage
//! aborts the run with [`ApplyError::ToolFailed`] carrying git's own output; the
//! scratch file is left in place whatever the outcome.

use crate::commands::CmdResult;
use crate::error::{ApplyError, Result};
use crate::git::GitRunner;
use crate::model::{PatchDocument, Step};
use crate::store::ScratchFile;
use tracing::{debug, info};

pub fn run<R: GitRunner>(
    runner: &R,
    scratch: &ScratchFile,
    doc: &PatchDocument,
) -> Result<CmdResult> {
    if doc.is_blank() {
        return Err(ApplyError::EmptyPatch);
    }

    scratch.write(doc)?;

    for step in Step::ALL {
        let output = runner.run(step, scratch.path())?;
        if !output.is_success() {
            debug!(%step, code = ?output.code, "git rejected patch");
            return Err(ApplyError::ToolFailed {
                step,
                code: output.code,
                stdout: output.stdout,
                stderr: output.stderr,
            });
        }
    }

    info!(path = %scratch.path().display(), "patch applied");
    Ok(CmdResult::new(scratch.path().to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::recording::RecordingGit;
    use crate::git::ToolOutput;
    use std::fs;
    use tempfile::TempDir;

    const PATCH: &str = "--- a/hello.txt\n+++ b/hello.txt\n@@ -1 +1 @@\n-hello\n+goodbye\n";

    fn scratch_in(dir: &TempDir) -> ScratchFile {
        ScratchFile::new(dir.path().join("scratch.patch"))
    }

    #[test]
    fn test_blank_input_runs_nothing() {
        let dir = TempDir::new().unwrap();
        let scratch = scratch_in(&dir);
        let git = RecordingGit::new();

        for text in ["", "   ", "\n\n\t \n"] {
            let err = run(&git, &scratch, &PatchDocument::from(text)).unwrap_err();
            assert!(matches!(err, ApplyError::EmptyPatch));
        }

        assert!(git.steps().is_empty());
        assert!(!scratch.path().exists());
    }

    #[test]
    fn test_success_runs_check_then_apply() {
        let dir = TempDir::new().unwrap();
        let scratch = scratch_in(&dir);
        let git = RecordingGit::new();

        let result = run(&git, &scratch, &PatchDocument::from(PATCH)).unwrap();

        assert_eq!(git.steps(), vec![Step::Check, Step::Apply]);
        for (_, path) in git.calls() {
            assert_eq!(path, scratch.path());
        }
        assert_eq!(result.patch_path, scratch.path());
    }

    #[test]
    fn test_scratch_matches_input() {
        let dir = TempDir::new().unwrap();
        let scratch = scratch_in(&dir);

        run(&RecordingGit::new(), &scratch, &PatchDocument::from(PATCH)).unwrap();
        assert_eq!(fs::read_to_string(scratch.path()).unwrap(), PATCH);
    }

    #[test]
    fn test_check_failure_skips_apply() {
        let dir = TempDir::new().unwrap();
        let scratch = scratch_in(&dir);
        let git = RecordingGit::with_outputs([ToolOutput {
            code: Some(128),
            stdout: b"out\n".to_vec(),
            stderr: b"error: corrupt patch at line 2\n".to_vec(),
        }]);

        let err = run(&git, &scratch, &PatchDocument::from("not a patch")).unwrap_err();

        assert_eq!(git.steps(), vec![Step::Check]);
        match err {
            ApplyError::ToolFailed {
                step,
                code,
                stdout,
                stderr,
            } => {
                assert_eq!(step, Step::Check);
                assert_eq!(code, Some(128));
                assert_eq!(stdout, b"out\n");
                assert_eq!(stderr, b"error: corrupt patch at line 2\n");
            }
            other => panic!("expected tool failure, got {other:?}"),
        }
        // The scratch copy survives the failure.
        assert!(scratch.path().exists());
    }

    #[test]
    fn test_apply_failure_is_relayed() {
        let dir = TempDir::new().unwrap();
        let scratch = scratch_in(&dir);
        let git = RecordingGit::with_outputs([
            ToolOutput::success(),
            ToolOutput::failure(1, "error: patch failed: hello.txt:1\n"),
        ]);

        let err = run(&git, &scratch, &PatchDocument::from(PATCH)).unwrap_err();

        assert_eq!(git.steps(), vec![Step::Check, Step::Apply]);
        assert!(matches!(
            err,
            ApplyError::ToolFailed {
                step: Step::Apply,
                code: Some(1),
                ..
            }
        ));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_signal_terminated_check_fails() {
        let dir = TempDir::new().unwrap();
        let scratch = scratch_in(&dir);
        let git = RecordingGit::with_outputs([ToolOutput {
            code: None,
            ..ToolOutput::default()
        }]);

        let err = run(&git, &scratch, &PatchDocument::from(PATCH)).unwrap_err();
        assert_eq!(git.steps(), vec![Step::Check]);
        assert_eq!(err.exit_code(), 1);
    }
}
