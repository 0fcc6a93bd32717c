//! Test utilities shared across the keymint workspace
//!
//! This crate provides common testing infrastructure including:
//! - Temporary git repositories with configurable remotes ([`GitRepoTestGuard`])
//! - Populated secrets directories ([`SecretsDirGuard`])
//! - A throwaway RSA keypair for signing and verifying app JWTs
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod git;
pub mod keys;
pub mod secrets;

// Re-export commonly used items
pub use git::GitRepoTestGuard;
pub use keys::{OTHER_PUBLIC_KEY_PEM, TEST_PRIVATE_KEY_PEM, TEST_PUBLIC_KEY_PEM};
pub use secrets::SecretsDirGuard;
