//! # Core Errors
//!
//! Errors raised while loading secrets and deriving required repositories.
//! Every variant is fatal to the surrounding command; the CLI prints the chain
//! to stderr and exits non-zero without writing anything to stdout.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur before any GitHub API call is made
#[derive(Debug, Error)]
pub enum Error {
  #[error("config file not found: {}", .0.display())]
  ConfigNotFound(PathBuf),
  #[error("private key not found: {}", .0.display())]
  PrivateKeyNotFound(PathBuf),
  #[error("GITHUB_APP_ID not found in config")]
  MissingAppId,
  #[error("GITHUB_INSTALLATION_ID not found in config")]
  MissingInstallationId,
  #[error("could not determine GitHub owner from this repository or its parent")]
  OwnerUndetermined,
  #[error("failed to read {}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
  #[error("failed to run {program}")]
  Command {
    program: String,
    #[source]
    source: io::Error,
  },
}
