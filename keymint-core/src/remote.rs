//! # Remote Parsing and Repository Derivation
//!
//! Turns git remote URLs into `owner/name` identities and derives the set of
//! repositories an installation token must be scoped to: the current project,
//! the shared Terraform state repository, and the parent checkout when one
//! exists.

use std::path::Path;

use crate::consts::{GIT_EXECUTABLE, TERRAFORM_REPO_NAME};
use crate::error::Error;
use crate::runner::CommandRunner;

/// Extract an `owner/name` identity from a GitHub remote URL.
///
/// Recognizes the three URL shapes git produces for GitHub remotes:
///
/// - `git@github.com:owner/name.git`
/// - `https://github.com/owner/name.git`
/// - `ssh://git@github.com/owner/name.git`
///
/// Returns `None` for anything else, including remotes on other hosts.
pub fn parse_github_full_name(remote_url: &str) -> Option<String> {
  let trimmed = remote_url.trim();

  let path = if let Some(rest) = trimmed.strip_prefix("git@github.com:") {
    rest
  } else if let Some(rest) = trimmed.strip_prefix("https://github.com/") {
    rest
  } else if let Some(rest) = trimmed.strip_prefix("ssh://git@github.com/") {
    rest
  } else {
    return None;
  };

  let path = path.strip_suffix(".git").unwrap_or(path);
  let mut segments = path.split('/');
  let owner = segments.next()?;
  let name = segments.next()?;

  Some(format!("{owner}/{name}"))
}

/// Ask git for the `origin` remote of a checkout and parse it.
///
/// A missing remote, a non-zero git exit, or a non-GitHub URL all yield
/// `Ok(None)`. Only a failure to spawn git at all is an error.
pub fn remote_full_name(runner: &dyn CommandRunner, repo_dir: &Path) -> Result<Option<String>, Error> {
  let output = runner
    .run(GIT_EXECUTABLE, &["config", "--get", "remote.origin.url"], repo_dir)
    .map_err(|source| Error::Command {
      program: GIT_EXECUTABLE.to_string(),
      source,
    })?;

  if !output.success() {
    return Ok(None);
  }

  Ok(parse_github_full_name(output.stdout.trim()))
}

/// Derive the repositories an installation token for this project must cover.
///
/// The list is, in order: the project's own repository, the Terraform state
/// repository under the same owner, and the repository of the parent checkout.
/// Identities that cannot be determined are skipped and duplicates keep their
/// first position. The owner comes from the parent checkout when it has a
/// GitHub remote, otherwise from the project itself; with neither there is no
/// way to name the Terraform repository and derivation fails.
pub fn required_repositories(runner: &dyn CommandRunner, project_root: &Path) -> Result<Vec<String>, Error> {
  let this_repo = remote_full_name(runner, project_root)?;
  let parent_repo = match project_root.parent() {
    Some(parent) => remote_full_name(runner, parent)?,
    None => None,
  };

  let owner = parent_repo
    .as_deref()
    .and_then(owner_of)
    .or_else(|| this_repo.as_deref().and_then(owner_of))
    .ok_or(Error::OwnerUndetermined)?
    .to_string();

  let terraform_repo = format!("{owner}/{TERRAFORM_REPO_NAME}");

  let mut required = Vec::new();
  for repo in [this_repo, Some(terraform_repo), parent_repo].into_iter().flatten() {
    if !required.contains(&repo) {
      required.push(repo);
    }
  }

  Ok(required)
}

fn owner_of(full_name: &str) -> Option<&str> {
  full_name
    .split_once('/')
    .map(|(owner, _)| owner)
    .filter(|owner| !owner.is_empty())
}
