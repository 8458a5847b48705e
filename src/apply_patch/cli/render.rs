use apply_patch::commands::CmdResult;
use apply_patch::error::ApplyError;
use colored::*;
use std::io::{self, Write};

pub fn print_applied(result: &CmdResult) {
    let stdout = io::stdout();
    let _ = write_applied(&mut stdout.lock(), result);
}

pub fn write_applied<W: Write>(out: &mut W, result: &CmdResult) -> io::Result<()> {
    let line = format!("Applied patch: {}", result.patch_path.display());
    writeln!(out, "{}", line.green())?;
    out.flush()
}

pub fn print_error(err: &ApplyError) {
    let stderr = io::stderr();
    let _ = write_error(&mut stderr.lock(), err);
}

/// Git failures are relayed byte for byte: captured stdout first, then stderr.
pub fn write_error<W: Write>(out: &mut W, err: &ApplyError) -> io::Result<()> {
    match err {
        ApplyError::ToolFailed { stdout, stderr, .. } => {
            out.write_all(stdout)?;
            out.write_all(stderr)?;
        }
        ApplyError::EmptyPatch => writeln!(out, "{}", err)?,
        other => writeln!(out, "Error: {}", other)?,
    }
    out.flush()
}
