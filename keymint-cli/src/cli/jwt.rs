//! # JWT Command
//!
//! Derive-based implementation of the jwt command: sign an app JWT with the
//! project's private key and print it on stdout.

use anyhow::Result;
use clap::Args;
use keymint_core::secrets::{AppConfig, read_private_key};
use keymint_gh::issue_app_jwt;

use crate::cli::SecretsOpts;
use crate::utils::{resolve_config_path, resolve_key_path, resolve_secrets_dir};

/// Command for printing a signed GitHub App JWT
#[derive(Args)]
pub struct JwtArgs {
  #[command(flatten)]
  pub secrets: SecretsOpts,
}

#[allow(clippy::print_stdout)]
pub(crate) fn handle_jwt_command(jwt: JwtArgs) -> Result<()> {
  let secrets_dir = resolve_secrets_dir(&jwt.secrets)?;

  let config = AppConfig::load(&resolve_config_path(&jwt.secrets, &secrets_dir))?;
  let app_id = config.app_id()?;

  let key_path = resolve_key_path(&jwt.secrets, &secrets_dir)?;
  let private_key = read_private_key(&key_path)?;

  let token = issue_app_jwt(app_id, &private_key)?;
  println!("{token}");

  Ok(())
}
