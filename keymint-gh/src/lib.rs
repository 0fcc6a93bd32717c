//! # GitHub App Authentication Client
//!
//! Provides the GitHub App authentication flow for keymint: signing short
//! lived app JWTs with the app's private key and exchanging them for
//! installation access tokens, optionally verified against the repositories
//! the surrounding project requires.

pub mod client;
pub mod consts;
pub mod endpoints;
pub mod error;
pub mod jwt;
pub mod models;

// Re-export the client
pub use client::GitHubClient;
// Re-export the error type
pub use error::Error;
// Re-export JWT issuance
pub use jwt::{AppClaims, issue_app_jwt, issue_app_jwt_at};
// Re-export models
pub use models::{InstallationRepositories, InstallationToken, RepositorySummary, TokenGrant};
// Re-export endpoint helpers
pub use endpoints::installations::missing_repositories;
