//! # Shell Completion
//!
//! Generates shell completion scripts for various shells (bash, zsh, fish,
//! etc.) to provide tab completion for keymint commands and arguments.

use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use keymint_core::output::print_error;

use crate::cli::Cli;

/// Generate shell completions for the specified shell
pub fn generate_completions(shell: Shell) -> Result<()> {
  let mut cmd = Cli::command();
  let app_name = cmd.get_name().to_string();

  generate(shell, &mut cmd, app_name, &mut io::stdout());

  Ok(())
}

/// Parse a shell string into a Shell enum
///
/// Stdout is reserved for credentials, so the hint about supported shells
/// goes to stderr.
#[allow(clippy::print_stderr)]
pub fn parse_shell(shell_str: &str) -> Result<Shell> {
  match shell_str.to_lowercase().as_str() {
    "bash" => Ok(Shell::Bash),
    "zsh" => Ok(Shell::Zsh),
    "fish" => Ok(Shell::Fish),
    _ => {
      print_error(&format!("Unsupported shell: {shell_str}",));
      eprintln!("Supported shells: bash, zsh, fish");
      Err(anyhow::anyhow!("Unsupported shell: {}", shell_str))
    }
  }
}
