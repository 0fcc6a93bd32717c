//! Project root discovery helpers.

use std::env;
use std::path::{Path, PathBuf};

use git2::Repository;

/// Detect the root of the project enclosing the current directory.
///
/// The root is the working directory of the surrounding git repository, if
/// any. Callers fall back to the current directory when there is none.
pub fn detect_project_root() -> Option<PathBuf> {
  let current_dir = env::current_dir().ok()?;
  detect_project_root_from_path(&current_dir)
}

/// Detect the project root enclosing the given path.
pub fn detect_project_root_from_path<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
  let path = path.as_ref();

  match Repository::discover(path) {
    Ok(repo) => repo.workdir().map(|workdir| workdir.to_path_buf()),
    Err(_) => None,
  }
}
