//! Vault file format and plaintext payload codec.
//!
//! A vault file is text with this layout:
//!
//! ```text
//! [version tag: 1 char][base64( AES-CBC ciphertext | 16-byte IV )]
//! ```
//!
//! - **Version tag**: one character naming the payload encoding. Only
//!   "version 2, type A" (U+0015) exists; anything else is rejected.
//! - **Payload** (before encryption): one line per record,
//!   `tag \t note \t username \t password`, lines joined by `\n` with no
//!   trailing newline.  An empty vault is the sentinel `/emptyCollection`
//!   so it can never be confused with an empty or broken ciphertext.

use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use super::record::{Record, Tag};
use crate::errors::{PasstableError, Result};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Payload of a vault with no records.
pub const EMPTY_COLLECTION: &str = "/emptyCollection";

/// Extension used for the fallback file written next to the executable.
pub const FALLBACK_EXTENSION: &str = "passtable";

const FIELD_SEPARATOR: char = '\t';
const RECORD_SEPARATOR: char = '\n';

// ---------------------------------------------------------------------------
// FileVersion
// ---------------------------------------------------------------------------

/// Supported vault file encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileVersion {
    /// Version 2, type A: AES-CBC payload with appended IV, base64 text.
    V2TypeA,
}

/// The version every save writes.
pub const CURRENT_VERSION: FileVersion = FileVersion::V2TypeA;

impl FileVersion {
    /// The leading character identifying this version (`ver * 10 + type`).
    pub fn tag(self) -> char {
        match self {
            FileVersion::V2TypeA => '\u{15}',
        }
    }

    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            '\u{15}' => Some(FileVersion::V2TypeA),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Prefix the encrypted payload with the current version tag.
pub fn attach_version(encrypted: &str) -> String {
    let mut blob = String::with_capacity(encrypted.len() + 1);
    blob.push(CURRENT_VERSION.tag());
    blob.push_str(encrypted);
    blob
}

/// Split a vault file into its version and encrypted payload.
pub fn split_version(blob: &str) -> Result<(FileVersion, &str)> {
    let mut chars = blob.chars();
    let tag = chars.next().ok_or(PasstableError::MissingCiphertext)?;
    let version =
        FileVersion::from_tag(tag).ok_or(PasstableError::UnsupportedVersion(tag as u32))?;
    Ok((version, chars.as_str()))
}

/// Render records as the plaintext payload.
pub fn serialize_records(records: &[Record]) -> Zeroizing<String> {
    if records.is_empty() {
        return Zeroizing::new(EMPTY_COLLECTION.to_string());
    }

    let mut out = Zeroizing::new(String::new());
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push(RECORD_SEPARATOR);
        }
        out.push(record.tag.symbol());
        out.push(FIELD_SEPARATOR);
        out.push_str(&record.note);
        out.push(FIELD_SEPARATOR);
        out.push_str(&record.username);
        out.push(FIELD_SEPARATOR);
        out.push_str(&record.password);
    }
    out
}

/// Parse a decrypted payload back into records.
///
/// The sentinel yields an empty list. Every line must hold exactly four
/// fields and a legal tag, otherwise the whole payload is `CorruptData`.
pub fn parse_records(payload: &str) -> Result<Vec<Record>> {
    if payload == EMPTY_COLLECTION {
        return Ok(Vec::new());
    }

    let mut records = Vec::new();
    for (line_no, line) in payload.split(RECORD_SEPARATOR).enumerate() {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        let &[tag, note, username, password] = fields.as_slice() else {
            return Err(PasstableError::CorruptData(format!(
                "record {} has {} fields, expected 4",
                line_no + 1,
                fields.len()
            )));
        };
        let tag = Tag::from_symbol(tag).ok_or_else(|| {
            PasstableError::CorruptData(format!("record {} has an unknown tag", line_no + 1))
        })?;
        records.push(Record::new(tag, note, username, password));
    }
    Ok(records)
}

/// Where a save lands when the primary path cannot be written:
/// `<dir>/<stem of original>.passtable`.
pub fn fallback_path(original: &Path, dir: &Path) -> PathBuf {
    let stem = original
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "vault".to_string());
    dir.join(format!("{stem}.{FALLBACK_EXTENSION}"))
}
