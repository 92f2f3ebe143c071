//! `passtable add`: append a record to the vault.

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{normalize_tag, open_vault, save_vault, Cli};
use crate::config::Settings;
use crate::errors::{PasstableError, Result};
use crate::vault::VaultStore;

/// Execute the `add` command.
pub fn execute(
    cli: &Cli,
    tag: &str,
    note: &str,
    username: &str,
    password: Option<&str>,
    generate: bool,
) -> Result<()> {
    // Resolve the password before unlocking so a cancelled prompt
    // never touches the vault.
    let password = if generate {
        let cwd = std::env::current_dir()?;
        let settings = Settings::load(&cwd)?;
        let pw = settings
            .password_generator()
            .generate(&settings.requirements())?;
        output::info("Generated a new password.");
        pw
    } else {
        match password {
            Some(p) => Zeroizing::new(p.to_string()),
            None => Zeroizing::new(
                dialoguer::Password::new()
                    .with_prompt("Password for this record (empty for none)")
                    .allow_empty_password(true)
                    .interact()
                    .map_err(|e| PasstableError::CommandFailed(format!("password prompt: {e}")))?,
            ),
        }
    };

    let mut store = open_vault(cli)?;
    store.add(&normalize_tag(tag), note, username, &password)?;
    save_vault(&mut store, None)?;

    output::success(&added_message(&store));
    Ok(())
}

/// Names the file the vault was actually written to, which differs from
/// `--file` after a fallback save.
fn added_message(store: &VaultStore) -> String {
    match store.path() {
        Some(path) => format!("Added record #{} to {}", store.len(), path.display()),
        None => format!("Added record #{}", store.len()),
    }
}
