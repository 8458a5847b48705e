//! The binary is intentionally thin: the CLI lives in `cli/`, this file only
//! invokes `cli::run()` and turns errors into the process exit status.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        cli::render::print_error(&e);
        std::process::exit(e.exit_code());
    }
}
