//! `passtable edit`: change one or more fields of a record.

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{normalize_tag, open_vault, record_index, save_vault, Cli};
use crate::errors::{PasstableError, Result};
use crate::vault::{Field, VaultStore};

/// Execute the `edit` command.
pub fn execute(
    cli: &Cli,
    number: usize,
    tag: Option<&str>,
    note: Option<&str>,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<()> {
    if tag.is_none() && note.is_none() && username.is_none() && password.is_none() {
        return Err(PasstableError::CommandFailed(
            "nothing to change: pass at least one of --tag, --note, --username, --password"
                .into(),
        ));
    }

    let index = record_index(number)?;
    let mut store = open_vault(cli)?;

    match (tag, note, username, password) {
        // A single field goes through its own setter.
        (Some(t), None, None, None) => store.set_tag(index, &normalize_tag(t))?,
        (None, Some(n), None, None) => store.set_note(index, n)?,
        (None, None, Some(u), None) => store.set_username(index, u)?,
        (None, None, None, Some(p)) => store.set_password(index, p)?,
        // Several fields are checked together so the record is never
        // judged half-edited.
        _ => {
            let tag = match tag {
                Some(t) => normalize_tag(t),
                None => store.get_field(index, Field::Tag)?.to_string(),
            };
            let note = merged(&store, index, Field::Note, note)?;
            let username = merged(&store, index, Field::Username, username)?;
            let password = merged(&store, index, Field::Password, password)?;
            store.set_data(index, &tag, &note, &username, &password)?;
        }
    }

    save_vault(&mut store, None)?;
    output::success(&format!("Record #{number} updated."));
    Ok(())
}

/// The new value if one was given, otherwise the stored one.
fn merged(
    store: &VaultStore,
    index: usize,
    field: Field,
    new: Option<&str>,
) -> Result<Zeroizing<String>> {
    match new {
        Some(value) => Ok(Zeroizing::new(value.to_string())),
        None => store.get_field(index, field),
    }
}
