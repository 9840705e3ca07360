//! AES-256-CBC encryption/decryption
//!
//! Output layout is `IV || ciphertext`. Every call to [`encrypt`] draws a
//! fresh IV from the OS random source, so saving the same records twice under
//! the same key never produces the same bytes.
//!
//! CBC gives confidentiality only. Whether the key was right is decided by
//! the caller (record shape check, or the sealed file's MAC).

use aes::Aes256;
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::codec::PADDING_BYTE;
use crate::error::{LockerError, LockerResult};

use super::CipherKey;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// AES block size in bytes (also the IV size)
pub const BLOCK_SIZE: usize = 16;

/// Number of padding bytes needed to reach a block boundary
///
/// An already aligned length gets no extra block.
pub fn padding_len(len: usize) -> usize {
    (BLOCK_SIZE - len % BLOCK_SIZE) % BLOCK_SIZE
}

/// Generate a random IV
pub fn generate_iv() -> [u8; BLOCK_SIZE] {
    let mut iv = [0u8; BLOCK_SIZE];
    OsRng.fill_bytes(&mut iv);
    iv
}

/// Encrypt plaintext, returning `IV || ciphertext`
pub fn encrypt(key: &CipherKey, plaintext: &[u8]) -> LockerResult<Vec<u8>> {
    encrypt_with_iv(key, &generate_iv(), plaintext)
}

/// Encrypt with a caller-supplied IV
pub fn encrypt_with_iv(
    key: &CipherKey,
    iv: &[u8; BLOCK_SIZE],
    plaintext: &[u8],
) -> LockerResult<Vec<u8>> {
    let padded_len = plaintext.len() + padding_len(plaintext.len());
    let mut buffer = Vec::with_capacity(padded_len);
    buffer.extend_from_slice(plaintext);
    buffer.resize(padded_len, PADDING_BYTE);

    let ciphertext = Aes256CbcEnc::new(key.as_bytes().into(), iv.into())
        .encrypt_padded_mut::<NoPadding>(&mut buffer, padded_len)
        .map_err(|e| LockerError::Crypto(format!("Encryption failed: {}", e)))?;

    let mut out = Vec::with_capacity(BLOCK_SIZE + ciphertext.len());
    out.extend_from_slice(iv);
    out.extend_from_slice(ciphertext);
    Ok(out)
}

/// Decrypt `IV || ciphertext`, returning the still-padded plaintext
pub fn decrypt(key: &CipherKey, data: &[u8]) -> LockerResult<Vec<u8>> {
    if data.len() < BLOCK_SIZE {
        return Err(LockerError::Crypto(format!(
            "Ciphertext too short: {} bytes, need at least {}",
            data.len(),
            BLOCK_SIZE
        )));
    }

    let (iv, ciphertext) = data.split_at(BLOCK_SIZE);
    if ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(LockerError::Crypto(format!(
            "Ciphertext length {} is not a multiple of the block size",
            ciphertext.len()
        )));
    }

    let iv: &[u8; BLOCK_SIZE] = iv
        .try_into()
        .map_err(|_| LockerError::Crypto("Invalid IV".to_string()))?;

    let mut buffer = ciphertext.to_vec();
    let plaintext_len = Aes256CbcDec::new(key.as_bytes().into(), iv.into())
        .decrypt_padded_mut::<NoPadding>(&mut buffer)
        .map_err(|e| LockerError::Crypto(format!("Decryption failed: {}", e)))?
        .len();
    buffer.truncate(plaintext_len);

    Ok(buffer)
}

/// Remove trailing padding bytes
pub fn strip_padding(plaintext: &[u8]) -> &[u8] {
    let end = plaintext
        .iter()
        .rposition(|&b| b != PADDING_BYTE)
        .map_or(0, |i| i + 1);
    &plaintext[..end]
}
