//! # App JWT Issuance
//!
//! Signs the short-lived RS256 JWT a GitHub App presents when calling
//! app-level endpoints. GitHub requires exactly three claims: `iss` (the app
//! ID), `iat`, and `exp`. The issue time is backdated 60 seconds to absorb
//! clock drift between us and GitHub, and the expiry sits at GitHub's
//! 10 minute maximum, so `exp - iat` is always 660 seconds.

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Seconds the issue time is backdated to absorb clock drift
const CLOCK_DRIFT_BACKDATE_SECS: i64 = 60;

/// Seconds until expiry, GitHub's maximum for app JWTs
const MAX_VALIDITY_SECS: i64 = 600;

/// Claims of a GitHub App JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct AppClaims {
  /// Issuer, the GitHub App ID
  pub iss: String,
  /// Issued at (Unix timestamp), backdated 60 seconds
  pub iat: i64,
  /// Expiration (Unix timestamp), 10 minutes out
  pub exp: i64,
}

/// Sign an app JWT for the given app ID with the app's private key
pub fn issue_app_jwt(app_id: &str, private_key_pem: &str) -> Result<String, Error> {
  issue_app_jwt_at(app_id, private_key_pem, Utc::now().timestamp())
}

/// Sign an app JWT with an explicit clock, for deterministic tests
pub fn issue_app_jwt_at(app_id: &str, private_key_pem: &str, now: i64) -> Result<String, Error> {
  let claims = AppClaims {
    iss: app_id.to_string(),
    iat: now - CLOCK_DRIFT_BACKDATE_SECS,
    exp: now + MAX_VALIDITY_SECS,
  };

  let header = Header::new(Algorithm::RS256);
  let encoding_key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())?;

  Ok(encode(&header, &claims, &encoding_key)?)
}
