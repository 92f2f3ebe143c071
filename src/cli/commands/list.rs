//! `passtable list`: show every record with passwords hidden.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{PasstableError, Result};

/// Execute the `list` command.
pub fn execute(cli: &Cli, json: bool) -> Result<()> {
    let store = open_vault(cli)?;
    let records = store.get_all();

    if json {
        let text = serde_json::to_string_pretty(&records)
            .map_err(|e| PasstableError::SerializationError(e.to_string()))?;
        println!("{text}");
        return Ok(());
    }

    output::print_records_table(&records);
    output::info(&format!("{} record(s)", store.len()));
    Ok(())
}
