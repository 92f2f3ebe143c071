//! `passtable search`: find records by text, tag symbol or colour.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{PasstableError, Result};
use crate::vault::Tag;

/// Execute the `search` command.
pub fn execute(cli: &Cli, query: Option<&str>, tag: Option<&str>, colors: &[String]) -> Result<()> {
    let colors = parse_colors(colors)?;
    if query.is_none() && tag.is_none() && colors.is_empty() {
        return Err(PasstableError::CommandFailed(
            "give a search text, --tag or --color".into(),
        ));
    }

    let store = open_vault(cli)?;
    let hits = if !colors.is_empty() {
        store.search_by_tag_colors(&colors)
    } else if let Some(tag) = tag {
        store.search_by_tag(tag)
    } else {
        store.search_by_text(query.unwrap_or_default())
    };

    output::print_records_table(&hits);
    if !hits.is_empty() {
        output::info(&format!("{} match(es)", hits.len()));
    }
    Ok(())
}

/// Map colour names to tags; unknown names are an error.
fn parse_colors(names: &[String]) -> Result<Vec<Tag>> {
    names
        .iter()
        .map(|name| {
            Tag::from_name(name.trim()).ok_or_else(|| {
                PasstableError::CommandFailed(format!(
                    "unknown colour '{name}' (expected red, green, blue, yellow or purple)"
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colour_names_map_to_tags() {
        let tags = parse_colors(&["red".into(), " Blue ".into()]).unwrap();
        assert_eq!(tags, vec![Tag::Red, Tag::Blue]);
    }

    #[test]
    fn unknown_colour_is_rejected() {
        assert!(parse_colors(&["orange".into()]).is_err());
    }
}
