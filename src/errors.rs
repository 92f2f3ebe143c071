use std::path::PathBuf;
use thiserror::Error;

use crate::vault::Field;

/// All errors that can occur in Passtable.
#[derive(Debug, Error)]
pub enum PasstableError {
    // --- Crypto errors ---
    #[error("Primary passphrase must be 1 to 32 bytes long, got {0}")]
    InvalidKeyLength(usize),

    #[error("Nothing to process: input is empty or too short")]
    EmptyInput,

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed: wrong passphrase or corrupted data")]
    DecryptionFailed,

    // --- Validation errors ---
    #[error("The {0} contains control characters")]
    InvalidField(Field),

    #[error("A record needs a note, or a username together with a password")]
    IncompleteRecord,

    #[error("Invalid tag '{0}': expected a single digit from 0 to 5")]
    InvalidTag(String),

    // --- Bounds errors ---
    #[error("No record at position {index} (the vault holds {len})")]
    OutOfBounds { index: usize, len: usize },

    // --- Vault file errors ---
    #[error("The vault file contains nothing: save it before filling")]
    MissingCiphertext,

    #[error("No primary passphrase was given for this vault")]
    MissingPassphrase,

    #[error("Unsupported vault file version (tag {0:#04x})")]
    UnsupportedVersion(u32),

    #[error("Cannot unlock the vault: invalid primary passphrase")]
    InvalidPassphrase,

    #[error("The vault file is corrupted: {0}")]
    CorruptData(String),

    #[error("No path was given for saving the vault")]
    NoPath,

    #[error("No primary passphrase was given for saving the vault")]
    NoPassphrase,

    #[error("Encrypted data does not match the current data: nothing was written")]
    EncryptionVerificationFailed,

    #[error("Could not write the vault to {path} or to {fallback}")]
    WriteFailed { path: PathBuf, fallback: PathBuf },

    #[error("Vault not found at {0}")]
    VaultNotFound(PathBuf),

    #[error("Vault already exists at {0}")]
    VaultAlreadyExists(PathBuf),

    // --- Generator errors ---
    #[error("Invalid generator parameters: {0}")]
    InvalidParameters(String),

    #[error("Not enough characters left for the generator: {0}")]
    ExhaustedCharset(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Broad failure classes, used by callers that only need to know how to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad field, tag or name content. Fix the input and retry.
    Validation,
    /// Position outside the collection.
    Bounds,
    /// Wrong passphrase or ciphertext that does not decrypt.
    Crypto,
    /// Reading or writing the vault file failed.
    Io,
    /// Unsupported version or malformed decrypted payload.
    Format,
    /// Password generator misconfiguration.
    Generation,
    /// Host-side problems: config, prompts, missing path or passphrase.
    Usage,
}

impl PasstableError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        use PasstableError::*;
        match self {
            InvalidField(_) | IncompleteRecord | InvalidTag(_) => ErrorKind::Validation,
            OutOfBounds { .. } => ErrorKind::Bounds,
            InvalidKeyLength(_)
            | EmptyInput
            | EncryptionFailed(_)
            | DecryptionFailed
            | InvalidPassphrase
            | EncryptionVerificationFailed => ErrorKind::Crypto,
            WriteFailed { .. } | VaultNotFound(_) | Io(_) => ErrorKind::Io,
            UnsupportedVersion(_) | CorruptData(_) | SerializationError(_) => ErrorKind::Format,
            InvalidParameters(_) | ExhaustedCharset(_) => ErrorKind::Generation,
            MissingCiphertext
            | MissingPassphrase
            | NoPath
            | NoPassphrase
            | VaultAlreadyExists(_)
            | ConfigError(_)
            | CommandFailed(_) => ErrorKind::Usage,
        }
    }
}

/// Convenience type alias for Passtable results.
pub type Result<T> = std::result::Result<T, PasstableError>;
