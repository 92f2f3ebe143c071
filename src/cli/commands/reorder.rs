//! `passtable move` and `passtable swap`: change the order of records.

use crate::cli::output;
use crate::cli::{open_vault, record_index, save_vault, Cli};
use crate::errors::Result;

/// Execute the `move` command.
pub fn execute_move(cli: &Cli, from: usize, to: usize) -> Result<()> {
    let (from_index, to_index) = (record_index(from)?, record_index(to)?);
    let mut store = open_vault(cli)?;

    store.move_item(from_index, to_index)?;
    save_vault(&mut store, None)?;

    output::success(&format!("Moved record #{from} to #{to}."));
    Ok(())
}

/// Execute the `swap` command.
pub fn execute_swap(cli: &Cli, a: usize, b: usize) -> Result<()> {
    let (a_index, b_index) = (record_index(a)?, record_index(b)?);
    let mut store = open_vault(cli)?;

    store.swap_items(a_index, b_index)?;
    save_vault(&mut store, None)?;

    output::success(&format!("Swapped records #{a} and #{b}."));
    Ok(())
}
