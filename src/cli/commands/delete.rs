//! `passtable delete`: remove a record from the vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{open_vault, record_index, save_vault, Cli};
use crate::errors::{PasstableError, Result};
use crate::vault::Field;

/// Execute the `delete` command.
pub fn execute(cli: &Cli, number: usize, force: bool) -> Result<()> {
    let index = record_index(number)?;
    let mut store = open_vault(cli)?;

    let note = store.get_field(index, Field::Note)?;

    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete record #{number} ({})?", note.as_str()))
            .default(false)
            .interact()
            .map_err(|e| PasstableError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    store.delete(index)?;
    save_vault(&mut store, None)?;

    output::success(&format!("Deleted record #{number}."));
    Ok(())
}
