//! Shell completion generation command.
//!
//! Generates shell completion scripts for bash, zsh, fish, and `PowerShell`.

use crate::cli::ExitCode;
use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};
use std::io;
use tracing::debug;

/// Writes the completion script for `shell` to `out`.
pub fn write_completions(shell: Shell, cmd: &mut Command, out: &mut impl io::Write) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}

/// Runs the completions command, printing the script to stdout.
///
/// # Examples
///
/// ```no_run
/// use caf_naming_cli::commands::completions;
/// use clap::Command;
/// use clap_complete::Shell;
///
/// let mut cmd = Command::new("caf-naming");
/// let code = completions::run(Shell::Bash, &mut cmd)?;
/// assert!(code.is_success());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn run(shell: Shell, cmd: &mut Command) -> Result<ExitCode> {
    debug!("Generating {} completions", shell);
    write_completions(shell, cmd, &mut io::stdout());
    Ok(ExitCode::SUCCESS)
}
