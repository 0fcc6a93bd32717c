//! # CLI Utilities
//!
//! Path resolution shared by the credential-minting subcommands. Resolution
//! is lazy so failures surface in the order the pipeline needs things:
//! config first, private key second.

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use keymint_core::consts::{CONFIG_FILE_NAME, SECRETS_DIR_NAME};
use keymint_core::detect_project_root;
use keymint_core::secrets::locate_private_key;

use crate::cli::SecretsOpts;

/// Root of the enclosing project: the surrounding git repository's working
/// directory, or the current directory outside of one
pub fn project_root() -> Result<PathBuf> {
  match detect_project_root() {
    Some(root) => Ok(root),
    None => Ok(env::current_dir()?),
  }
}

/// The secrets directory, from the CLI override or the project root
pub fn resolve_secrets_dir(opts: &SecretsOpts) -> Result<PathBuf> {
  match &opts.secrets_dir {
    Some(dir) => Ok(dir.clone()),
    None => Ok(project_root()?.join(SECRETS_DIR_NAME)),
  }
}

/// The config file path, from the CLI override or the secrets directory
pub fn resolve_config_path(opts: &SecretsOpts, secrets_dir: &std::path::Path) -> PathBuf {
  opts
    .config_file
    .clone()
    .unwrap_or_else(|| secrets_dir.join(CONFIG_FILE_NAME))
}

/// The private key path, from the CLI override or by scanning the secrets
/// directory for the newest dated key
pub fn resolve_key_path(opts: &SecretsOpts, secrets_dir: &std::path::Path) -> Result<PathBuf> {
  match &opts.key_file {
    Some(path) => Ok(path.clone()),
    None => Ok(locate_private_key(secrets_dir)?),
  }
}

#[cfg(test)]
mod tests {
  use keymint_test_utils::SecretsDirGuard;

  use super::*;

  fn opts(secrets_dir: Option<PathBuf>, config_file: Option<PathBuf>, key_file: Option<PathBuf>) -> SecretsOpts {
    SecretsOpts {
      secrets_dir,
      config_file,
      key_file,
    }
  }

  #[test]
  fn test_explicit_overrides_win() {
    let secrets = SecretsDirGuard::new("GITHUB_APP_ID=1\n");
    let opts = opts(
      Some(secrets.dir().to_path_buf()),
      Some(PathBuf::from("/elsewhere/app.conf")),
      Some(PathBuf::from("/elsewhere/app.pem")),
    );

    let secrets_dir = resolve_secrets_dir(&opts).unwrap();
    assert_eq!(secrets_dir, secrets.dir());
    assert_eq!(resolve_config_path(&opts, &secrets_dir), PathBuf::from("/elsewhere/app.conf"));
    assert_eq!(
      resolve_key_path(&opts, &secrets_dir).unwrap(),
      PathBuf::from("/elsewhere/app.pem")
    );
  }

  #[test]
  fn test_defaults_inside_secrets_dir() {
    let secrets = SecretsDirGuard::new("GITHUB_APP_ID=1\n");
    let opts = opts(Some(secrets.dir().to_path_buf()), None, None);

    let secrets_dir = resolve_secrets_dir(&opts).unwrap();
    assert_eq!(resolve_config_path(&opts, &secrets_dir), secrets.config_path());
    assert_eq!(resolve_key_path(&opts, &secrets_dir).unwrap(), secrets.key_path());
  }
}
