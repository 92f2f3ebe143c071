//! Primary passphrase to AES key normalization.
//!
//! The passphrase is stretched to the nearest AES key size (16, 24 or 32
//! bytes) by appending bytes from a fixed, public padding sequence. This is
//! a length normalization only: it adds no entropy, and it must stay
//! byte-for-byte identical so existing vault files keep opening.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{PasstableError, Result};

/// Bytes appended, in order, until the key reaches its target length.
const KEY_PADDING: &[u8; 15] = b"1a3b5c7d9e0f2g4";

/// Longest accepted passphrase in bytes (AES-256).
pub const MAX_PASSPHRASE_LEN: usize = 32;

/// An AES key built from a primary passphrase.
///
/// The bytes are wiped when the key is dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PaddedKey {
    bytes: Vec<u8>,
}

impl PaddedKey {
    /// Normalize `passphrase` into a 16, 24 or 32 byte key.
    ///
    /// Fails with `InvalidKeyLength` when the UTF-8 encoded passphrase is
    /// empty or longer than 32 bytes.
    pub fn from_passphrase(passphrase: &str) -> Result<Self> {
        let raw = passphrase.as_bytes();
        let target = key_len_for(raw.len())?;

        let mut bytes = Vec::with_capacity(target);
        bytes.extend_from_slice(raw);
        bytes.extend_from_slice(&KEY_PADDING[..target - raw.len()]);

        Ok(Self { bytes })
    }

    /// Access the raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Key length in bytes: 16, 24 or 32.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`; a padded key holds at least 16 bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Pick the AES key size a passphrase of `len` bytes is padded to.
fn key_len_for(len: usize) -> Result<usize> {
    match len {
        1..=16 => Ok(16),
        17..=24 => Ok(24),
        25..=MAX_PASSPHRASE_LEN => Ok(32),
        _ => Err(PasstableError::InvalidKeyLength(len)),
    }
}
