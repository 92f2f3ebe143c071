//! `passtable show`: print one record.

use console::style;

use crate::cli::output;
use crate::cli::{open_vault, record_index, Cli};
use crate::errors::Result;
use crate::vault::{Field, Tag};

/// Execute the `show` command.
pub fn execute(cli: &Cli, number: usize, reveal: bool) -> Result<()> {
    let index = record_index(number)?;
    let store = open_vault(cli)?;

    let tag = store.get_field(index, Field::Tag)?;
    let note = store.get_field(index, Field::Note)?;
    let username = store.get_field(index, Field::Username)?;

    let tag = Tag::from_symbol(&tag).unwrap_or_default();
    println!("{:>10}  {}", style("Record").bold(), number);
    println!("{:>10}  {}", style("Tag").bold(), output::styled_tag(tag));
    println!("{:>10}  {}", style("Note").bold(), note.as_str());
    println!("{:>10}  {}", style("Username").bold(), username.as_str());

    if reveal {
        let password = store.get_field(index, Field::Password)?;
        println!("{:>10}  {}", style("Password").bold(), password.as_str());
    } else {
        println!("{:>10}  {}", style("Password").bold(), style("hidden").dim());
        output::tip("Use --reveal to print the password, or `passtable copy` to copy it.");
    }

    Ok(())
}
