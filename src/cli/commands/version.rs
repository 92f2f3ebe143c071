//! `passtable version`: print the program and vault format versions.

use console::style;

use crate::errors::Result;
use crate::vault::CURRENT_VERSION;

/// Execute the `version` command.
pub fn execute() -> Result<()> {
    println!("passtable {}", env!("CARGO_PKG_VERSION"));
    println!(
        "{} {:?} (tag {})",
        style("vault format").dim(),
        CURRENT_VERSION,
        CURRENT_VERSION.tag() as u32
    );
    Ok(())
}
