//! Input checks for everything that enters a vault.
//!
//! All functions here are pure. Record-level checks return `bool`; the
//! passphrase and file-name checks return a status code so the host can
//! tell the user exactly what to fix.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::vault::Tag;

/// Longest primary passphrase accepted, in characters.
pub const MAX_PRIMARY_PASSPHRASE_LEN: usize = 32;

/// Longest file name accepted, in characters.
pub const MAX_FILE_NAME_LEN: usize = 200;

/// Characters that no supported OS allows in a file name.
pub const FILE_NAME_INVALID_CHARS: &str = "\\ / : * ? \" < > |";

/// Result of [`verify_primary_passphrase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassphraseStatus {
    Ok,
    Empty,
    /// Contains a character outside printable ASCII (0x20..=0x7E).
    InvalidChar,
    /// Starts with `/`, which is reserved for internal sentinel values.
    ReservedPrefix,
    TooLong,
}

impl PassphraseStatus {
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

impl fmt::Display for PassphraseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Ok => "passphrase is valid",
            Self::Empty => "passphrase is empty",
            Self::InvalidChar => {
                "passphrase may only contain letters, digits, spaces and ASCII punctuation"
            }
            Self::ReservedPrefix => "passphrase must not start with '/'",
            Self::TooLong => "passphrase must be at most 32 characters",
        };
        f.write_str(msg)
    }
}

/// Result of [`verify_file_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileNameStatus {
    Ok,
    Blank,
    InvalidChar,
    LeadingSpace,
    /// A reserved Windows device name such as `CON` or `LPT1`.
    ReservedWord,
    TooLong,
}

impl FileNameStatus {
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

impl fmt::Display for FileNameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => f.write_str("file name is valid"),
            Self::Blank => f.write_str("file name is blank"),
            Self::InvalidChar => write!(
                f,
                "file name contains control characters or one of {FILE_NAME_INVALID_CHARS}"
            ),
            Self::LeadingSpace => f.write_str("file name starts with whitespace"),
            Self::ReservedWord => f.write_str("file name is a reserved device name"),
            Self::TooLong => write!(f, "file name exceeds {MAX_FILE_NAME_LEN} characters"),
        }
    }
}

fn is_control(c: char) -> bool {
    ('\u{0}'..='\u{1F}').contains(&c)
}

/// A note, username or password may not contain control characters
/// (tab and newline included, since they delimit the stored payload).
pub fn verify_data(field: &str) -> bool {
    !field.chars().any(is_control)
}

/// A record needs a note, or a username together with a password.
pub fn verify_item(note: &str, username: &str, password: &str) -> bool {
    !note.trim().is_empty() || (!username.trim().is_empty() && !password.is_empty())
}

/// A tag is exactly one digit from `0` to `5`.
pub fn verify_tag(tag: &str) -> bool {
    Tag::from_symbol(tag).is_some()
}

/// Check a primary passphrase chosen by the user.
pub fn verify_primary_passphrase(passphrase: &str) -> PassphraseStatus {
    if passphrase.is_empty() {
        PassphraseStatus::Empty
    } else if !passphrase.chars().all(|c| (' '..='~').contains(&c)) {
        PassphraseStatus::InvalidChar
    } else if passphrase.starts_with('/') {
        PassphraseStatus::ReservedPrefix
    } else if passphrase.len() > MAX_PRIMARY_PASSPHRASE_LEN {
        PassphraseStatus::TooLong
    } else {
        PassphraseStatus::Ok
    }
}

fn reserved_names() -> &'static Regex {
    static RESERVED: OnceLock<Regex> = OnceLock::new();
    RESERVED.get_or_init(|| {
        Regex::new(r"(?i)^(COM[0-9]|LPT[0-9]|CON|CONIN\$|CONOUT\$|PRN|AUX|NUL)$")
            .expect("reserved name pattern is valid")
    })
}

/// Check a vault file name (final path component, extension included).
pub fn verify_file_name(name: &str) -> FileNameStatus {
    if name.trim().is_empty() {
        FileNameStatus::Blank
    } else if name
        .chars()
        .any(|c| is_control(c) || "\\/:*?\"<>|".contains(c))
    {
        FileNameStatus::InvalidChar
    } else if name.starts_with(char::is_whitespace) {
        FileNameStatus::LeadingSpace
    } else if reserved_names().is_match(name) {
        FileNameStatus::ReservedWord
    } else if name.chars().count() > MAX_FILE_NAME_LEN {
        FileNameStatus::TooLong
    } else {
        FileNameStatus::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_rejects_control_characters() {
        assert!(verify_data("plain text, with punctuation!"));
        assert!(verify_data(""));
        assert!(verify_data("ünïcödé"));
        assert!(!verify_data("tab\there"));
        assert!(!verify_data("line\nbreak"));
        assert!(!verify_data("\u{1F}"));
        assert!(verify_data("\u{7F}"));
    }

    #[test]
    fn item_needs_note_or_credentials() {
        assert!(verify_item("bank", "", ""));
        assert!(verify_item("", "bob", "secret"));
        assert!(!verify_item("", "bob", ""));
        assert!(!verify_item("", "", "secret"));
        assert!(!verify_item("   ", "  ", "secret"));
        // A whitespace-only password still counts as a password.
        assert!(verify_item("", "bob", " "));
    }

    #[test]
    fn tag_boundaries() {
        for t in ["0", "1", "2", "3", "4", "5"] {
            assert!(verify_tag(t), "{t} should be valid");
        }
        for t in ["6", "", "12", "a", "-1", " 1"] {
            assert!(!verify_tag(t), "{t:?} should be invalid");
        }
    }

    #[test]
    fn primary_passphrase_codes() {
        assert_eq!(verify_primary_passphrase("abc"), PassphraseStatus::Ok);
        assert_eq!(verify_primary_passphrase("with space ~"), PassphraseStatus::Ok);
        assert_eq!(verify_primary_passphrase(""), PassphraseStatus::Empty);
        assert_eq!(verify_primary_passphrase("tab\t"), PassphraseStatus::InvalidChar);
        assert_eq!(verify_primary_passphrase("пароль"), PassphraseStatus::InvalidChar);
        assert_eq!(verify_primary_passphrase("/yes"), PassphraseStatus::ReservedPrefix);
        assert_eq!(verify_primary_passphrase("a/b"), PassphraseStatus::Ok);
        assert_eq!(
            verify_primary_passphrase(&"x".repeat(33)),
            PassphraseStatus::TooLong
        );
        assert_eq!(verify_primary_passphrase(&"x".repeat(32)), PassphraseStatus::Ok);
    }

    #[test]
    fn invalid_char_wins_over_reserved_prefix() {
        assert_eq!(verify_primary_passphrase("/\u{7}"), PassphraseStatus::InvalidChar);
    }

    #[test]
    fn file_name_codes() {
        assert_eq!(verify_file_name("vault.passtable"), FileNameStatus::Ok);
        assert_eq!(verify_file_name("   "), FileNameStatus::Blank);
        assert_eq!(verify_file_name(""), FileNameStatus::Blank);
        for bad in ["a/b", "a\\b", "a:b", "a*b", "a?b", "a\"b", "a<b", "a>b", "a|b", "a\u{1}b"] {
            assert_eq!(verify_file_name(bad), FileNameStatus::InvalidChar, "{bad:?}");
        }
        assert_eq!(verify_file_name(" lead"), FileNameStatus::LeadingSpace);
        assert_eq!(
            verify_file_name(&"n".repeat(201)),
            FileNameStatus::TooLong
        );
        assert_eq!(verify_file_name(&"n".repeat(200)), FileNameStatus::Ok);
    }

    #[test]
    fn reserved_device_names_match_whole_name_only() {
        for name in ["CON", "con", "Prn", "AUX", "nul", "COM0", "com9", "LPT3", "CONIN$", "conout$"] {
            assert_eq!(verify_file_name(name), FileNameStatus::ReservedWord, "{name}");
        }
        for name in ["CONFIG", "com10", "console.txt", "LPT", "AUXILIARY"] {
            assert_eq!(verify_file_name(name), FileNameStatus::Ok, "{name}");
        }
    }

    #[test]
    fn statuses_render_messages() {
        assert!(PassphraseStatus::TooLong.to_string().contains("32"));
        assert!(FileNameStatus::TooLong.to_string().contains("200"));
        assert!(PassphraseStatus::Ok.is_ok());
        assert!(!FileNameStatus::Blank.is_ok());
    }
}
