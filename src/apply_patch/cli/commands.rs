use super::render::print_applied;
use super::setup::Cli;
use apply_patch::api::PatchApi;
use apply_patch::config::PatchConfig;
use apply_patch::error::{ApplyError, Result};
use apply_patch::git::system::SystemGit;
use apply_patch::model::PatchDocument;
use apply_patch::store::ScratchFile;
use clap::Parser;
use std::io::Read;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    // A blank document is a usage error whatever the configuration says.
    let doc = read_stdin()?;
    if doc.is_blank() {
        return Err(ApplyError::EmptyPatch);
    }

    let config = PatchConfig::resolve()?;
    let api = PatchApi::new(
        SystemGit::new(config.git),
        ScratchFile::new(config.scratch_path),
    );

    let result = api.apply(&doc)?;
    print_applied(&result);
    Ok(())
}

/// Logs go to stderr; stdout is reserved for the confirmation line.
/// `RUST_LOG` takes precedence over `-v`.
fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn read_stdin() -> Result<PatchDocument> {
    let mut buf = Vec::new();
    std::io::stdin().lock().read_to_end(&mut buf)?;
    Ok(PatchDocument::new(buf))
}
