//! # Constants
//!
//! Shared constants for secrets layout and repository derivation.

/// Directory under the project root where secrets are expected to live
pub const SECRETS_DIR_NAME: &str = "secrets";

/// Name of the key=value config file inside the secrets directory
pub const CONFIG_FILE_NAME: &str = "config.txt";

/// Suffix of private key files downloaded from the GitHub App settings page
pub const PRIVATE_KEY_SUFFIX: &str = ".private-key.pem";

/// Config key holding the GitHub App ID
pub const KEY_APP_ID: &str = "GITHUB_APP_ID";

/// Config key holding the installation ID
pub const KEY_INSTALLATION_ID: &str = "GITHUB_INSTALLATION_ID";

/// Terraform state repository every installation token must be able to see
pub const TERRAFORM_REPO_NAME: &str = "fishdan-terraform";

/// Name of the git executable
#[cfg(windows)]
pub const GIT_EXECUTABLE: &str = "git.exe";

/// Name of the git executable
#[cfg(not(windows))]
pub const GIT_EXECUTABLE: &str = "git";
