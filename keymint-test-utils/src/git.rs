//! Git repository management for testing
//!
//! This module provides utilities for creating temporary git repositories
//! with canned remotes for repository-derivation tests.

use std::path::Path;

use git2::Repository;
use tempfile::TempDir;

/// A test guard that creates a temporary git repository. The repository and
/// its directory are removed when the guard is dropped.
pub struct GitRepoTestGuard {
  /// The temporary directory containing the git repository
  pub temp_dir: TempDir,
  /// The git repository
  pub repo: Repository,
}

impl GitRepoTestGuard {
  /// Create a new test git repository
  pub fn new() -> Self {
    // Create a temporary directory
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let temp_path = temp_dir.path();

    // Initialize a git repository in the temporary directory
    let repo = Repository::init(temp_path).expect("Failed to initialize git repository");

    // Set test user configuration
    let mut config = repo.config().expect("Failed to get repository config");
    config
      .set_str("user.name", "Keymint Test User")
      .expect("Failed to set user.name");
    config
      .set_str("user.email", "keymint-test@example.com")
      .expect("Failed to set user.email");

    // Verify that the .git directory was created
    assert!(
      temp_path.join(".git").exists(),
      "Git repository was not properly initialized"
    );

    Self { temp_dir, repo }
  }

  /// Get the path to the git repository
  pub fn path(&self) -> &Path {
    self.temp_dir.path()
  }

  /// Add an `origin` remote pointing at the given URL
  pub fn set_origin(&self, url: &str) {
    self.repo.remote("origin", url).expect("Failed to add origin remote");
  }
}

impl Default for GitRepoTestGuard {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_creates_git_repo() {
    let git_repo = GitRepoTestGuard::new();
    assert!(git_repo.path().join(".git").exists());
  }

  #[test]
  fn test_set_origin_is_visible_in_config() {
    let git_repo = GitRepoTestGuard::new();
    git_repo.set_origin("git@github.com:acme/widgets.git");

    let remote = git_repo.repo.find_remote("origin").unwrap();
    assert_eq!(remote.url(), Some("git@github.com:acme/widgets.git"));
  }
}
