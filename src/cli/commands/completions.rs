//! `passtable completions`: print a shell completion script.
//!
//! Usage:
//!   passtable completions bash > ~/.local/share/bash-completion/completions/passtable
//!   passtable completions zsh
//!   passtable completions fish

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::{PasstableError, Result};

/// Execute the `completions` command.
pub fn execute(shell: &str) -> Result<()> {
    let shell = parse_shell(shell)?;
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

fn parse_shell(name: &str) -> Result<Shell> {
    match name.to_ascii_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        "fish" => Ok(Shell::Fish),
        "powershell" | "pwsh" | "ps" => Ok(Shell::PowerShell),
        "elvish" => Ok(Shell::Elvish),
        other => Err(PasstableError::CommandFailed(format!(
            "unsupported shell '{other}' (try bash, zsh, fish, powershell or elvish)"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_shells_parse() {
        assert_eq!(parse_shell("bash").unwrap(), Shell::Bash);
        assert_eq!(parse_shell("zsh").unwrap(), Shell::Zsh);
        assert_eq!(parse_shell("fish").unwrap(), Shell::Fish);
        assert_eq!(parse_shell("pwsh").unwrap(), Shell::PowerShell);
    }

    #[test]
    fn shell_names_ignore_case() {
        assert_eq!(parse_shell("FISH").unwrap(), Shell::Fish);
    }

    #[test]
    fn unknown_shell_fails() {
        assert!(parse_shell("tcsh").is_err());
        assert!(parse_shell("").is_err());
    }
}
