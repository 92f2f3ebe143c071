//! Cryptographic primitives for Passtable.
//!
//! This module provides:
//! - AES-CBC/PKCS#7 encryption and decryption with an appended IV (`encryption`)
//! - Passphrase to AES key length normalization (`keys`)

pub mod encryption;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt};
pub use encryption::{decrypt, encrypt, IV_LEN};
pub use keys::{PaddedKey, MAX_PASSPHRASE_LEN};
