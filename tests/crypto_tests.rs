//! Integration tests for the Passtable crypto module.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use passtable::crypto::{decrypt, encrypt, PaddedKey, IV_LEN};
use passtable::errors::{ErrorKind, PasstableError};

// ---------------------------------------------------------------------------
// Encryption round-trip
// ---------------------------------------------------------------------------

#[test]
fn encrypt_decrypt_roundtrip() {
    let blob = encrypt(b"hello world", "abc").expect("encrypt");
    let plain = decrypt(&blob, "abc").expect("decrypt");
    assert_eq!(plain.as_slice(), b"hello world");
}

#[test]
fn each_key_size_roundtrips() {
    // 5 bytes -> AES-128, 20 -> AES-192, 30 -> AES-256.
    for pass in ["short", "twenty-byte-password", "a-thirty-byte-passphrase-12345"] {
        let blob = encrypt(b"payload", pass).unwrap();
        assert_eq!(decrypt(&blob, pass).unwrap().as_slice(), b"payload");
    }
}

#[test]
fn blob_is_ciphertext_followed_by_iv() {
    let blob = encrypt(b"0123456789", "abc").unwrap();
    let raw = STANDARD.decode(&blob).unwrap();
    // One padded block plus the trailing IV.
    assert_eq!(raw.len(), 16 + IV_LEN);
}

#[test]
fn same_input_gives_different_blobs() {
    let a = encrypt(b"same", "abc").unwrap();
    let b = encrypt(b"same", "abc").unwrap();
    assert_ne!(a, b, "a fresh IV is used for every encryption");
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn wrong_passphrase_fails() {
    let blob = encrypt(b"some secret payload", "right").unwrap();
    match decrypt(&blob, "wrong") {
        Err(e) => assert_eq!(e.kind(), ErrorKind::Crypto),
        // Padding can occasionally check out by chance; the data must not.
        Ok(plain) => assert_ne!(plain.as_slice(), b"some secret payload"),
    }
}

#[test]
fn empty_plaintext_is_rejected() {
    assert!(matches!(encrypt(b"", "abc"), Err(PasstableError::EmptyInput)));
}

#[test]
fn blob_no_longer_than_iv_is_rejected() {
    let short = STANDARD.encode([0u8; IV_LEN]);
    assert!(matches!(decrypt(&short, "abc"), Err(PasstableError::EmptyInput)));
}

#[test]
fn non_base64_blob_is_corrupt() {
    assert!(matches!(
        decrypt("***not base64***", "abc"),
        Err(PasstableError::CorruptData(_))
    ));
}

#[test]
fn passphrase_length_limits() {
    assert!(matches!(
        encrypt(b"x", ""),
        Err(PasstableError::InvalidKeyLength(0))
    ));
    let long = "p".repeat(33);
    assert!(matches!(
        encrypt(b"x", &long),
        Err(PasstableError::InvalidKeyLength(33))
    ));
}

// ---------------------------------------------------------------------------
// Key padding
// ---------------------------------------------------------------------------

#[test]
fn key_padding_picks_smallest_aes_size() {
    assert_eq!(PaddedKey::from_passphrase("abc").unwrap().len(), 16);
    assert_eq!(PaddedKey::from_passphrase(&"x".repeat(16)).unwrap().len(), 16);
    assert_eq!(PaddedKey::from_passphrase(&"x".repeat(17)).unwrap().len(), 24);
    assert_eq!(PaddedKey::from_passphrase(&"x".repeat(25)).unwrap().len(), 32);
}

#[test]
fn key_padding_is_fixed_sequence() {
    let key = PaddedKey::from_passphrase("abc").unwrap();
    assert_eq!(key.as_bytes(), b"abc1a3b5c7d9e0f2");
}
