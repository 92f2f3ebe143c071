//! AES-CBC encryption with PKCS#7 padding.
//!
//! Each call to `encrypt` generates a fresh random 16-byte IV and
//! appends it to the ciphertext.  `decrypt` splits the IV back off the
//! end before decrypting.
//!
//! Layout of the blob before base64 encoding:
//!   [ ciphertext (multiple of 16 bytes) | 16-byte IV ]
//!
//! The AES variant (128/192/256) follows the padded key length.

use aes::{Aes128, Aes192, Aes256};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::TryRngCore;
use zeroize::{Zeroize, Zeroizing};

use super::keys::PaddedKey;
use crate::errors::{PasstableError, Result};

/// Size of the CBC initialization vector in bytes.
pub const IV_LEN: usize = 16;

/// Encrypt `plaintext` under `passphrase`.
///
/// Returns base64(ciphertext || IV).
pub fn encrypt(plaintext: &[u8], passphrase: &str) -> Result<String> {
    if plaintext.is_empty() {
        return Err(PasstableError::EmptyInput);
    }
    let key = PaddedKey::from_passphrase(passphrase)?;

    let mut iv = [0u8; IV_LEN];
    rand::rngs::OsRng
        .try_fill_bytes(&mut iv)
        .map_err(|e| PasstableError::EncryptionFailed(format!("no randomness for IV: {e}")))?;

    let sealed = cbc_encrypt(&key, &iv, plaintext);

    let result = sealed.map(|mut ciphertext| {
        ciphertext.extend_from_slice(&iv);
        let encoded = BASE64.encode(&ciphertext);
        ciphertext.zeroize();
        encoded
    });
    iv.zeroize();

    result
}

/// Decrypt a blob produced by `encrypt`.
///
/// Any padding or block failure collapses into `DecryptionFailed` so a
/// wrong passphrase and damaged data look the same to the caller.
/// Input that is not base64 at all yields `CorruptData`.
pub fn decrypt(encoded: &str, passphrase: &str) -> Result<Zeroizing<Vec<u8>>> {
    let key = PaddedKey::from_passphrase(passphrase)?;

    let mut blob = BASE64
        .decode(encoded.trim())
        .map_err(|e| PasstableError::CorruptData(format!("invalid base64: {e}")))?;

    if blob.len() <= IV_LEN {
        blob.zeroize();
        return Err(PasstableError::EmptyInput);
    }

    let split = blob.len() - IV_LEN;
    let mut iv = [0u8; IV_LEN];
    iv.copy_from_slice(&blob[split..]);

    let mut plain = Zeroizing::new(blob[..split].to_vec());
    let opened = cbc_decrypt(&key, &iv, &mut plain);

    blob.zeroize();
    iv.zeroize();

    // On failure `plain` is dropped here and zeroized with it.
    let len = opened?;
    plain.truncate(len);
    Ok(plain)
}

/// Run AES-CBC encryption with the variant matching the key size.
fn cbc_encrypt(key: &PaddedKey, iv: &[u8; IV_LEN], msg: &[u8]) -> Result<Vec<u8>> {
    let k = key.as_bytes();
    let ciphertext = match k.len() {
        16 => cbc::Encryptor::<Aes128>::new_from_slices(k, iv)
            .map_err(|e| PasstableError::EncryptionFailed(format!("cipher init: {e}")))?
            .encrypt_padded_vec_mut::<Pkcs7>(msg),
        24 => cbc::Encryptor::<Aes192>::new_from_slices(k, iv)
            .map_err(|e| PasstableError::EncryptionFailed(format!("cipher init: {e}")))?
            .encrypt_padded_vec_mut::<Pkcs7>(msg),
        32 => cbc::Encryptor::<Aes256>::new_from_slices(k, iv)
            .map_err(|e| PasstableError::EncryptionFailed(format!("cipher init: {e}")))?
            .encrypt_padded_vec_mut::<Pkcs7>(msg),
        n => return Err(PasstableError::InvalidKeyLength(n)),
    };
    Ok(ciphertext)
}

/// Run AES-CBC decryption in place and strip the PKCS#7 padding.
///
/// Returns the plaintext length. The caller owns `buf`, so whatever the
/// cipher left in it is wiped on drop whether or not unpadding succeeded.
fn cbc_decrypt(key: &PaddedKey, iv: &[u8; IV_LEN], buf: &mut [u8]) -> Result<usize> {
    let k = key.as_bytes();
    let opened = match k.len() {
        16 => cbc::Decryptor::<Aes128>::new_from_slices(k, iv)
            .map_err(|_| PasstableError::DecryptionFailed)?
            .decrypt_padded_mut::<Pkcs7>(buf)
            .map(<[u8]>::len),
        24 => cbc::Decryptor::<Aes192>::new_from_slices(k, iv)
            .map_err(|_| PasstableError::DecryptionFailed)?
            .decrypt_padded_mut::<Pkcs7>(buf)
            .map(<[u8]>::len),
        32 => cbc::Decryptor::<Aes256>::new_from_slices(k, iv)
            .map_err(|_| PasstableError::DecryptionFailed)?
            .decrypt_padded_mut::<Pkcs7>(buf)
            .map(<[u8]>::len),
        n => return Err(PasstableError::InvalidKeyLength(n)),
    };
    opened.map_err(|_| PasstableError::DecryptionFailed)
}
