//! `passtable passwd`: re-encrypt the vault under a new primary passphrase.

use crate::cli::output;
use crate::cli::{open_vault, prompt_new_password_from, save_vault, Cli, NEW_PASSWORD_ENV};
use crate::errors::Result;

/// Execute the `passwd` command.
///
/// The current passphrase comes from `PASSTABLE_PASSWORD` or a prompt, the
/// new one from `PASSTABLE_NEW_PASSWORD` or a prompt.
pub fn execute(cli: &Cli) -> Result<()> {
    let mut store = open_vault(cli)?;
    output::info("Vault unlocked. Choose the new primary passphrase.");

    let new_password = prompt_new_password_from(NEW_PASSWORD_ENV)?;
    save_vault(&mut store, Some(&new_password))?;

    output::success("Primary passphrase changed.");
    Ok(())
}
