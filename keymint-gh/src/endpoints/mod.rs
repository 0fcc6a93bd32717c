//! # GitHub API Endpoints
//!
//! Endpoint implementations for the two calls the GitHub App flow needs:
//! minting an installation access token and listing the repositories that
//! installation can see.

pub mod installations;
