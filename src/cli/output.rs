//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::{style, StyledObject};

use crate::vault::{RecordView, Tag};

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Tag name in its own colour.
pub fn styled_tag(tag: Tag) -> StyledObject<&'static str> {
    let s = style(tag.name());
    match tag {
        Tag::None => s.dim(),
        Tag::Red => s.red(),
        Tag::Green => s.green(),
        Tag::Blue => s.blue(),
        Tag::Yellow => s.yellow(),
        Tag::Purple => s.magenta(),
    }
}

/// Print a table of records (#, Tag, Note, Username, Password).
///
/// Numbers are 1-based. Search hits are numbered by their position in the
/// vault, not by their rank in the result list.
pub fn print_records_table(records: &[RecordView]) {
    if records.is_empty() {
        info("No records to show.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Tag", "Note", "Username", "Password"]);

    for (i, r) in records.iter().enumerate() {
        let number = r.position.unwrap_or(i) + 1;
        table.add_row(vec![
            number.to_string(),
            styled_tag(r.tag).to_string(),
            r.note.clone(),
            r.username.clone(),
            if r.has_password { "••••••" } else { "" }.to_string(),
        ]);
    }

    println!("{table}");
}
