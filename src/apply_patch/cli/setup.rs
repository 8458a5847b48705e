use clap::{ArgAction, Parser};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "apply-patch", bin_name = "apply-patch", version = get_version())]
#[command(
    about = "Validate a patch from stdin with `git apply --check`, then apply it",
    long_about = "Reads a patch document from stdin until EOF, writes it to a scratch file, \
                  runs `git apply --check` on it and, if that succeeds, `git apply`. \
                  Git's output and exit code are relayed unchanged on failure."
)]
pub struct Cli {
    /// Verbose logging to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level implied by the verbosity flag.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args() {
        let cli = Cli::try_parse_from(["apply-patch"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::try_parse_from(["apply-patch", "-v"]).unwrap();
        assert_eq!(cli.log_level(), "debug");

        let cli = Cli::try_parse_from(["apply-patch", "-vv"]).unwrap();
        assert_eq!(cli.log_level(), "trace");
    }

    #[test]
    fn test_rejects_positional_args() {
        assert!(Cli::try_parse_from(["apply-patch", "some.patch"]).is_err());
    }
}
