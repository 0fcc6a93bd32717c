//! # Keymint Core Library
//!
//! Core library for keymint providing secrets loading, git remote parsing, and
//! derivation of the repositories a project's installation token must cover.
//! Everything here is plain synchronous code; the GitHub API surface lives in
//! `keymint-gh`.

pub mod consts;
pub mod error;
pub mod output;
pub mod project;
pub mod remote;
pub mod runner;
pub mod secrets;

// Re-export the types most callers need
pub use error::Error;
pub use output::ColorMode;
pub use project::detect_project_root;
pub use remote::{parse_github_full_name, remote_full_name, required_repositories};
pub use runner::{CommandOutput, CommandRunner, SystemRunner};
pub use secrets::{AppConfig, locate_private_key, read_private_key};
