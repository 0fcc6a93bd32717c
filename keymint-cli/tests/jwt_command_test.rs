use std::fs;
use std::str;

use anyhow::Result;
use assert_cmd::cargo::cargo_bin_cmd;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use keymint_gh::AppClaims;
use keymint_test_utils::secrets::KEY_FILE_NAME;
use keymint_test_utils::{GitRepoTestGuard, SecretsDirGuard, TEST_PRIVATE_KEY_PEM, TEST_PUBLIC_KEY_PEM};
use predicates::prelude::*;
use tempfile::TempDir;

fn decode_claims(token: &str) -> Result<AppClaims> {
  let key = DecodingKey::from_rsa_pem(TEST_PUBLIC_KEY_PEM.as_bytes())?;
  let data = decode::<AppClaims>(token, &key, &Validation::new(Algorithm::RS256))?;
  Ok(data.claims)
}

#[test]
fn prints_signed_jwt_for_configured_app() -> Result<()> {
  let secrets = SecretsDirGuard::new("GITHUB_APP_ID=12345\nGITHUB_INSTALLATION_ID=67890\n");
  let before = Utc::now().timestamp();

  let assert = cargo_bin_cmd!("keymint")
    .env("NO_COLOR", "1")
    .args(["jwt", "--secrets-dir"])
    .arg(secrets.dir())
    .assert()
    .success();

  let after = Utc::now().timestamp();
  let stdout = str::from_utf8(&assert.get_output().stdout)?;
  assert!(stdout.ends_with('\n'), "JWT should be newline terminated");

  let token = stdout.trim();
  assert_eq!(token.split('.').count(), 3, "JWT should have three dot-separated parts");

  let claims = decode_claims(token)?;
  assert_eq!(claims.iss, "12345");
  assert_eq!(claims.exp - claims.iat, 660);
  assert!(claims.iat >= before - 60 && claims.iat <= after - 60);

  Ok(())
}

#[test]
fn honors_explicit_key_file() -> Result<()> {
  let secrets = SecretsDirGuard::new("GITHUB_APP_ID=77\n");
  let elsewhere = TempDir::new()?;
  let key_path = elsewhere.path().join("relocated.private-key.pem");
  fs::write(&key_path, TEST_PRIVATE_KEY_PEM)?;

  // Without the directory's own key, success proves the override was used
  fs::remove_file(secrets.key_path())?;

  let assert = cargo_bin_cmd!("keymint")
    .env("NO_COLOR", "1")
    .args(["jwt", "--secrets-dir"])
    .arg(secrets.dir())
    .arg("--key-file")
    .arg(&key_path)
    .assert()
    .success();

  let claims = decode_claims(str::from_utf8(&assert.get_output().stdout)?.trim())?;
  assert_eq!(claims.iss, "77");

  Ok(())
}

#[test]
fn resolves_secrets_under_enclosing_repository() -> Result<()> {
  let guard = GitRepoTestGuard::new();
  let secrets_dir = guard.path().join("secrets");
  fs::create_dir(&secrets_dir)?;
  fs::write(secrets_dir.join("config.txt"), "GITHUB_APP_ID=99\n")?;
  fs::write(secrets_dir.join(KEY_FILE_NAME), TEST_PRIVATE_KEY_PEM)?;

  // Run from a nested directory so the secrets dir comes from repository
  // discovery rather than the working directory
  let nested = guard.path().join("infra/modules");
  fs::create_dir_all(&nested)?;

  let assert = cargo_bin_cmd!("keymint")
    .env("NO_COLOR", "1")
    .current_dir(&nested)
    .arg("jwt")
    .assert()
    .success();

  let claims = decode_claims(str::from_utf8(&assert.get_output().stdout)?.trim())?;
  assert_eq!(claims.iss, "99");

  Ok(())
}

#[test]
fn fails_without_config_file() {
  let empty = TempDir::new().unwrap();

  cargo_bin_cmd!("keymint")
    .env("NO_COLOR", "1")
    .args(["jwt", "--secrets-dir"])
    .arg(empty.path())
    .assert()
    .failure()
    .code(1)
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn fails_without_app_id() {
  let secrets = SecretsDirGuard::new("GITHUB_INSTALLATION_ID=67890\n");

  cargo_bin_cmd!("keymint")
    .env("NO_COLOR", "1")
    .args(["jwt", "--secrets-dir"])
    .arg(secrets.dir())
    .assert()
    .failure()
    .code(1)
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("GITHUB_APP_ID not found in config"));
}

#[test]
fn fails_with_unsignable_private_key() {
  let secrets = SecretsDirGuard::new("GITHUB_APP_ID=12345\n");
  fs::write(secrets.key_path(), "not a pem").unwrap();

  cargo_bin_cmd!("keymint")
    .env("NO_COLOR", "1")
    .args(["jwt", "--secrets-dir"])
    .arg(secrets.dir())
    .assert()
    .failure()
    .code(1)
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("failed to sign app JWT"));
}
