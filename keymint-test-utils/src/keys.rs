//! RSA keypair fixtures for JWT tests
//!
//! A throwaway 2048-bit keypair in the PKCS#1 format GitHub uses for app
//! private keys, plus a second public key that must never verify signatures
//! made with the first. Generated once with:
//!
//! ```console
//! openssl genrsa -traditional 2048
//! openssl rsa -traditional -in key.pem -pubout
//! ```

/// Private half of the test keypair, as downloaded from a GitHub App page
pub const TEST_PRIVATE_KEY_PEM: &str = include_str!("../fixtures/test-app.private-key.pem");

/// Public half of the test keypair
pub const TEST_PUBLIC_KEY_PEM: &str = include_str!("../fixtures/test-app.public-key.pem");

/// Public key from an unrelated keypair, for negative verification tests
pub const OTHER_PUBLIC_KEY_PEM: &str = include_str!("../fixtures/other-app.public-key.pem");
