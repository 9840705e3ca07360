//! HMAC-SHA256 authentication for sealed files
//!
//! Two values are computed with the MAC key:
//!
//! - a short **key check** over the header, which tells a wrong passphrase
//!   apart from a damaged file before any ciphertext is touched;
//! - a full **tag** over header, IV and ciphertext (encrypt-then-MAC).

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{LockerError, LockerResult};

use super::MacKey;

type HmacSha256 = Hmac<Sha256>;

/// Length of the authentication tag in bytes
pub const TAG_LEN: usize = 32;

/// Length of the header key check in bytes
pub const KEY_CHECK_LEN: usize = 16;

const KEY_CHECK_CONTEXT: &[u8] = b"passlocker key check";

fn keyed(key: &MacKey) -> LockerResult<HmacSha256> {
    HmacSha256::new_from_slice(key.as_bytes())
        .map_err(|e| LockerError::Crypto(format!("Failed to create MAC: {}", e)))
}

/// Compute the authentication tag over `data`
pub fn compute_tag(key: &MacKey, data: &[u8]) -> LockerResult<[u8; TAG_LEN]> {
    let mut mac = keyed(key)?;
    mac.update(data);

    let mut tag = [0u8; TAG_LEN];
    tag.copy_from_slice(&mac.finalize().into_bytes());
    Ok(tag)
}

/// Verify a tag in constant time
pub fn verify_tag(key: &MacKey, data: &[u8], tag: &[u8]) -> LockerResult<()> {
    let mut mac = keyed(key)?;
    mac.update(data);
    mac.verify_slice(tag)
        .map_err(|_| LockerError::Integrity("authentication tag mismatch".to_string()))
}

/// Compute the key check value bound to `header`
pub fn compute_key_check(key: &MacKey, header: &[u8]) -> LockerResult<[u8; KEY_CHECK_LEN]> {
    let mut mac = keyed(key)?;
    mac.update(KEY_CHECK_CONTEXT);
    mac.update(header);
    let full = mac.finalize().into_bytes();

    let mut check = [0u8; KEY_CHECK_LEN];
    check.copy_from_slice(&full[..KEY_CHECK_LEN]);
    Ok(check)
}

/// Verify the key check, reporting a mismatch as a wrong passphrase
pub fn verify_key_check(key: &MacKey, header: &[u8], check: &[u8]) -> LockerResult<()> {
    let mut mac = keyed(key)?;
    mac.update(KEY_CHECK_CONTEXT);
    mac.update(header);
    mac.verify_truncated_left(check)
        .map_err(|_| LockerError::WrongPassphrase)
}
