//! `passtable copy`: put a record's password on the clipboard.

use crate::cli::output;
use crate::cli::{open_vault, record_index, Cli};
use crate::errors::{PasstableError, Result};
use crate::vault::Field;

/// Execute the `copy` command.
pub fn execute(cli: &Cli, number: usize) -> Result<()> {
    let index = record_index(number)?;
    let store = open_vault(cli)?;

    let password = store.get_field(index, Field::Password)?;
    if password.is_empty() {
        output::warning(&format!("Record #{number} has no password."));
        return Ok(());
    }

    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| PasstableError::CommandFailed(format!("clipboard unavailable: {e}")))?;
    clipboard
        .set_text(password.as_str())
        .map_err(|e| PasstableError::CommandFailed(format!("clipboard write failed: {e}")))?;

    output::success(&format!("Password of record #{number} copied to the clipboard."));
    output::tip("Clear the clipboard once you have pasted it.");
    Ok(())
}
