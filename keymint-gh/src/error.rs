//! # GitHub Client Errors
//!
//! Errors raised while signing app JWTs and talking to the GitHub API. Like
//! the core errors, every variant is fatal to the surrounding command.
//! Response bodies are echoed verbatim in the malformed and no-token variants
//! so the GitHub error message (bad credentials, expired JWT, unknown
//! repository) survives into the diagnostic.

use thiserror::Error;

/// Errors from the GitHub App authentication flow
#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to sign app JWT")]
  Signing(#[from] jsonwebtoken::errors::Error),
  #[error("GitHub API request failed: {0}")]
  Transport(#[from] reqwest::Error),
  #[error("malformed GitHub API response: {body}")]
  MalformedResponse {
    body: String,
    #[source]
    source: serde_json::Error,
  },
  #[error("no token in GitHub API response: {body}")]
  NoTokenInResponse { body: String },
  #[error("installation cannot see required repositories: {}", .missing.join(", "))]
  MissingRequiredRepositories { missing: Vec<String> },
}
