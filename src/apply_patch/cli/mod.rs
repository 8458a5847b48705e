//! # CLI Layer
//!
//! The only place that reads stdin, writes stdout/stderr, or decides the exit
//! status.
//!
//! - `setup.rs`: clap argument definitions and version string
//! - `commands.rs`: `run()`, logging setup, context wiring and dispatch
//! - `render.rs`: message output and failure relay

mod commands;
pub mod render;
mod setup;

pub use commands::run;
