//! `passtable init`: create a new, empty vault file.

use std::fs;

use crate::cli::output;
use crate::cli::{prompt_new_password, vault_path, Cli};
use crate::errors::{PasstableError, Result};
use crate::validator::verify_file_name;
use crate::vault::{DiskWriter, SaveOutcome, VaultStore};

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let path = vault_path(cli)?;

    // 1. The file name must be usable on every supported OS.
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let status = verify_file_name(&name);
    if !status.is_ok() {
        return Err(PasstableError::CommandFailed(format!(
            "invalid file name '{name}': {status}"
        )));
    }

    // 2. Never overwrite an existing vault.
    if path.exists() {
        output::tip("Use `passtable add` to add records to the existing vault.");
        return Err(PasstableError::VaultAlreadyExists(path));
    }

    // 3. Create the parent directory if needed.
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
            output::info(&format!("Created directory: {}", parent.display()));
        }
    }

    // 4. Choose the primary passphrase and write the empty vault.
    let password = prompt_new_password()?;
    let mut store = VaultStore::new();
    match store.save(&DiskWriter, Some(&path), Some(&password))? {
        SaveOutcome::Saved => {
            output::success(&format!("Vault created at {}", path.display()));
        }
        SaveOutcome::SavedToFallbackLocation(fallback) => {
            output::warning(&format!(
                "Could not write {}; the vault was created at {}",
                path.display(),
                fallback.display()
            ));
        }
    }

    output::tip("Run `passtable add --note <NOTE>` to add a record.");
    output::tip("Run `passtable generate` to get a strong password.");

    Ok(())
}
