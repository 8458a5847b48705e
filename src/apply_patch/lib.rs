//! # apply-patch Architecture
//!
//! `apply-patch` reads a patch document from stdin, validates it against the
//! working tree with `git apply --check`, and applies it with `git apply`.
//! It never interprets patch syntax itself: all of that is git's job.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads stdin, sets up logging, renders results            │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the git runner and the scratch file                 │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - persist → check → apply, early exit on failure           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collaborators (store.rs, git/)                             │
//! │  - ScratchFile: fixed-path copy of the patch                │
//! │  - GitRunner trait: SystemGit (production), RecordingGit    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Relay
//!
//! Every failure is terminal. When git rejects the patch the error carries git's
//! captured stdout/stderr and exit code, and the CLI relays them unchanged. An
//! empty stdin is a usage error (exit 1) and never reaches git.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: The check-then-apply pipeline
//! - [`git`]: Git runner abstraction
//! - [`store`]: Scratch file persistence
//! - [`model`]: `PatchDocument` and `Step`
//! - [`config`]: Configuration resolution
//! - [`error`]: Error types and exit codes

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod model;
pub mod store;
