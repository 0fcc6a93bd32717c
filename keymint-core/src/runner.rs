//! # Command Runner
//!
//! Thin abstraction over spawning external processes. The git queries used
//! for repository derivation go through [`CommandRunner`] so tests can script
//! remote URLs without a git binary or a real repository on disk.

use std::io;
use std::path::Path;
use std::process::Command;

/// Captured result of a finished process
#[derive(Debug, Clone)]
pub struct CommandOutput {
  /// The process exit code, or `None` if it was killed by a signal
  pub exit_code: Option<i32>,
  pub stdout: String,
  pub stderr: String,
}

impl CommandOutput {
  /// Whether the process exited with code zero
  pub fn success(&self) -> bool {
    self.exit_code == Some(0)
  }
}

/// Runs a program with arguments in a working directory
pub trait CommandRunner {
  fn run(&self, program: &str, args: &[&str], cwd: &Path) -> io::Result<CommandOutput>;
}

/// [`CommandRunner`] backed by [`std::process::Command`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
  fn run(&self, program: &str, args: &[&str], cwd: &Path) -> io::Result<CommandOutput> {
    let output = Command::new(program).args(args).current_dir(cwd).output()?;

    Ok(CommandOutput {
      exit_code: output.status.code(),
      stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
      stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;

  fn working_dir() -> PathBuf {
    std::env::temp_dir()
  }

  #[test]
  #[cfg(unix)]
  fn test_system_runner_captures_stdout() {
    let output = SystemRunner.run("echo", &["hello"], &working_dir()).unwrap();

    assert!(output.success());
    assert_eq!(output.stdout.trim(), "hello");
    assert!(output.stderr.is_empty());
  }

  #[test]
  #[cfg(unix)]
  fn test_system_runner_reports_nonzero_exit() {
    let output = SystemRunner.run("false", &[], &working_dir()).unwrap();

    assert!(!output.success());
    assert_ne!(output.exit_code, Some(0));
  }

  #[test]
  fn test_system_runner_missing_program_is_an_error() {
    let result = SystemRunner.run("keymint-no-such-program", &[], &working_dir());

    assert!(result.is_err());
  }
}
