//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the keymint tool:
//! printing app JWTs, minting verified installation access tokens, and
//! generating shell completions.

mod completion;
mod jwt;
mod token;

use std::path::PathBuf;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Args, Parser, Subcommand};
use keymint_core::output::ColorMode;

/// Top-level CLI command for the keymint tool
#[derive(Parser)]
#[command(name = "keymint")]
#[command(display_name = "🔑 Keymint")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Command-line utilities for GitHub App authentication")]
#[command(
  long_about = "Keymint mints the credentials a GitHub App needs to act on your repositories.\n\n\
        It signs short-lived app JWTs with the app's private key and exchanges them for\n\
        installation access tokens, verified against the repositories the surrounding\n\
        project requires. Results go to stdout, everything else to stderr."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())  // Make usage line stand out
    .literal(AnsiColor::BrightGreen.on_default().bold())  // Command names, flags bold
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Flags locating the secrets directory and its contents, shared by the
/// credential-minting subcommands
#[derive(Args)]
pub struct SecretsOpts {
  /// Directory holding config.txt and the app's private key
  ///
  /// Defaults to `secrets/` under the enclosing project root (the
  /// surrounding git repository, or the current directory outside of one).
  #[arg(long, value_name = "DIR")]
  pub secrets_dir: Option<PathBuf>,

  /// Path to the KEY=value config file
  ///
  /// Defaults to `config.txt` inside the secrets directory.
  #[arg(long, value_name = "FILE")]
  pub config_file: Option<PathBuf>,

  /// Path to the PEM private key
  ///
  /// Defaults to the newest `*.private-key.pem` inside the secrets
  /// directory.
  #[arg(long, value_name = "FILE")]
  pub key_file: Option<PathBuf>,
}

/// Subcommands for the keymint tool
#[derive(Subcommand)]
pub enum Commands {
  /// Print a signed GitHub App JWT
  #[command(long_about = "Print a signed GitHub App JWT on stdout.\n\n\
            The JWT is signed with RS256 using the app's private key, carries the app ID\n\
            as issuer, is backdated 60 seconds against clock drift, and expires after\n\
            GitHub's 10 minute maximum. Pass it as 'Authorization: Bearer <jwt>' to\n\
            app-level GitHub API endpoints.")]
  Jwt(jwt::JwtArgs),

  /// Mint a verified installation access token
  #[command(long_about = "Mint an installation access token and print the grant as one JSON line.\n\n\
            The token is scoped to the repositories the surrounding project requires:\n\
            the project's own repository, the shared Terraform state repository, and\n\
            the parent checkout's repository. Before anything is printed, the token is\n\
            verified against the repositories the installation can actually see, so a\n\
            mis-scoped token fails here instead of later.")]
  #[command(alias = "tok")]
  Token(token::TokenArgs),

  /// Generate shell completions
  #[command(long_about = "Generates shell completion scripts for keymint commands.\n\n\
            This command generates completion scripts that provide tab completion for\n\
            keymint commands and options in your shell. Supported shells include bash,\n\
            zsh, and fish.")]
  Completion(completion::CompletionArgs),
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  // Set global color override based on --colors argument
  match cli.colors {
    ColorMode::Always | ColorMode::Yes => owo_colors::set_override(true),
    ColorMode::Never | ColorMode::No => owo_colors::set_override(false),
    ColorMode::Auto => {
      // Let owo_colors use its default auto-detection
      // Don't call set_override, allowing it to detect terminal automatically
    }
  }

  match cli.command {
    Commands::Jwt(jwt) => jwt::handle_jwt_command(jwt),
    Commands::Token(token) => token::handle_token_command(token),
    Commands::Completion(completion) => completion::handle_completion_command(completion),
  }
}
