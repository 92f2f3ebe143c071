//! Record and Tag types stored inside a vault.
//!
//! Each record holds a colour tag, a free-text note and an optional
//! username/password pair.  Records handed out to callers are
//! `RecordView`s, which replace the password with a has-password flag.

use std::fmt;

use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Colour category of a record. `None` means untagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    #[default]
    None,
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
}

impl Tag {
    /// The five colour categories, in symbol order.
    pub const COLORS: [Tag; 5] = [Tag::Red, Tag::Green, Tag::Blue, Tag::Yellow, Tag::Purple];

    /// Parse the stored one-character symbol (`"0"` to `"5"`).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "0" => Some(Tag::None),
            "1" => Some(Tag::Red),
            "2" => Some(Tag::Green),
            "3" => Some(Tag::Blue),
            "4" => Some(Tag::Yellow),
            "5" => Some(Tag::Purple),
            _ => None,
        }
    }

    /// Parse a colour name such as `"red"` (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "none" => Some(Tag::None),
            "red" => Some(Tag::Red),
            "green" => Some(Tag::Green),
            "blue" => Some(Tag::Blue),
            "yellow" => Some(Tag::Yellow),
            "purple" => Some(Tag::Purple),
            _ => None,
        }
    }

    /// The symbol written to the vault file.
    pub fn symbol(self) -> char {
        match self {
            Tag::None => '0',
            Tag::Red => '1',
            Tag::Green => '2',
            Tag::Blue => '3',
            Tag::Yellow => '4',
            Tag::Purple => '5',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tag::None => "none",
            Tag::Red => "red",
            Tag::Green => "green",
            Tag::Blue => "blue",
            Tag::Yellow => "yellow",
            Tag::Purple => "purple",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Addressable fields of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Tag,
    Note,
    Username,
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Tag => "tag",
            Field::Note => "note",
            Field::Username => "username",
            Field::Password => "password",
        };
        f.write_str(name)
    }
}

/// A single record, password included. Wiped from memory on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Record {
    #[zeroize(skip)]
    pub tag: Tag,
    pub note: String,
    pub username: String,
    pub password: String,
}

impl Record {
    pub fn new(tag: Tag, note: &str, username: &str, password: &str) -> Self {
        Self {
            tag,
            note: note.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    pub fn has_password(&self) -> bool {
        !self.password.is_empty()
    }

    /// Masked copy. `position` is set only for search results.
    pub fn view(&self, position: Option<usize>) -> RecordView {
        RecordView {
            position,
            tag: self.tag,
            note: self.note.clone(),
            username: self.username.clone(),
            has_password: self.has_password(),
        }
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("tag", &self.tag)
            .field("note", &self.note)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A record as seen from outside the vault: the password is reduced to
/// a flag.
///
/// `position` is the index of the record in the live collection and is
/// only filled in by searches, so a caller can act on a hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    pub tag: Tag,
    pub note: String,
    pub username: String,
    pub has_password: bool,
}
