//! # GitHub HTTP Client
//!
//! HTTP client for the GitHub App endpoints keymint uses. Unlike a regular
//! API client there is no stored credential: every call authenticates with
//! either a freshly signed app JWT or the installation token being verified.

use reqwest::Client;

use crate::consts::API_BASE_URL;

/// Represents a GitHub API client
pub struct GitHubClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
}

impl GitHubClient {
  /// Create a new GitHub client against the official API
  pub fn new() -> Self {
    let client = Client::new();
    Self {
      client,
      base_url: API_BASE_URL.to_string(),
    }
  }
}

impl Default for GitHubClient {
  fn default() -> Self {
    Self::new()
  }
}
