//! # Token Command
//!
//! Derive-based implementation of the token command: derive the repositories
//! the surrounding project requires, mint an installation access token scoped
//! to them, verify the installation can see them all, and print the grant as
//! one JSON line on stdout.

use anyhow::{Context, Result};
use clap::Args;
use keymint_core::output::print_warning;
use keymint_core::remote::required_repositories;
use keymint_core::runner::SystemRunner;
use keymint_core::secrets::{AppConfig, read_private_key};
use keymint_gh::models::TokenGrant;
use keymint_gh::{GitHubClient, issue_app_jwt};
use tokio::runtime::Runtime;
use tracing::debug;

use crate::cli::SecretsOpts;
use crate::utils::{project_root, resolve_config_path, resolve_key_path, resolve_secrets_dir};

/// Command for minting a verified installation access token
#[derive(Args)]
pub struct TokenArgs {
  #[command(flatten)]
  pub secrets: SecretsOpts,

  /// Mint an unscoped token and skip repository verification (deprecated)
  #[arg(long)]
  pub no_verify: bool,
}

#[allow(clippy::print_stdout)]
pub(crate) fn handle_token_command(token: TokenArgs) -> Result<()> {
  let secrets_dir = resolve_secrets_dir(&token.secrets)?;

  let config = AppConfig::load(&resolve_config_path(&token.secrets, &secrets_dir))?;
  let app_id = config.app_id()?;
  let installation_id = config.installation_id()?;

  let key_path = resolve_key_path(&token.secrets, &secrets_dir)?;
  let private_key = read_private_key(&key_path)?;

  let jwt = issue_app_jwt(app_id, &private_key)?;

  let rt = Runtime::new().context("Failed to create async runtime")?;
  let client = GitHubClient::new();

  if token.no_verify {
    print_warning("Repository verification skipped; the token covers whatever the installation can see");
    let minted = rt.block_on(client.create_installation_token(installation_id, &jwt, None))?;
    println!("{}", serde_json::to_string(&minted)?);
    return Ok(());
  }

  let root = project_root()?;
  let required = required_repositories(&SystemRunner, &root)?;
  debug!("Requesting token scoped to: {}", required.join(", "));

  // GitHub scopes token requests by bare repository name, not owner/name
  let names: Vec<String> = required
    .iter()
    .filter_map(|full_name| full_name.split_once('/').map(|(_, name)| name.to_string()))
    .collect();

  let minted = rt.block_on(client.create_installation_token(installation_id, &jwt, Some(&names)))?;
  let listing = rt.block_on(client.verify_repository_access(&minted.token, &required))?;

  let grant = TokenGrant {
    token: minted.token,
    expires_at: minted.expires_at,
    required_repositories: required,
    validated_repository_count: listing.total_count,
  };
  println!("{}", serde_json::to_string(&grant)?);

  Ok(())
}
