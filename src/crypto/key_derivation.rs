//! Passphrase key derivation
//!
//! Two derivations are supported:
//!
//! - **Legacy**: a single SHA-256 pass over the passphrase. Unsalted and fast
//!   to brute-force offline; kept only so older databases still open.
//! - **Argon2id**: memory-hard, salted, producing separate cipher and MAC keys.
//!   Used by sealed (v2) files, which store the salt and cost parameters in
//!   their header.

use argon2::{Argon2, Params};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use zeroize::ZeroizeOnDrop;

use crate::error::{LockerError, LockerResult};

/// Length of the AES-256 key in bytes
pub const KEY_LEN: usize = 32;

/// Length of the Argon2 salt in bytes
pub const SALT_LEN: usize = 16;

/// Upper bounds accepted when reading parameters from a file header
const MAX_MEMORY_COST: u32 = 1024 * 1024;
const MAX_TIME_COST: u32 = 64;
const MAX_PARALLELISM: u32 = 64;

/// Argon2id cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDerivationParams {
    /// Memory cost in KiB (default: 65536 = 64 MiB)
    pub memory_cost: u32,
    /// Time cost (iterations, default: 3)
    pub time_cost: u32,
    /// Parallelism degree (default: 4)
    pub parallelism: u32,
}

impl Default for KeyDerivationParams {
    fn default() -> Self {
        Self {
            memory_cost: 65536,
            time_cost: 3,
            parallelism: 4,
        }
    }
}

impl KeyDerivationParams {
    /// Create params with specific values
    pub fn with_values(memory_cost: u32, time_cost: u32, parallelism: u32) -> Self {
        Self {
            memory_cost,
            time_cost,
            parallelism,
        }
    }

    /// Reject parameters that are invalid for Argon2 or unreasonably large
    pub fn validate(&self) -> LockerResult<()> {
        if self.memory_cost > MAX_MEMORY_COST
            || self.time_cost > MAX_TIME_COST
            || self.parallelism > MAX_PARALLELISM
        {
            return Err(LockerError::Integrity(format!(
                "key derivation parameters out of range (m={}, t={}, p={})",
                self.memory_cost, self.time_cost, self.parallelism
            )));
        }
        self.argon2_params().map(|_| ())
    }

    fn argon2_params(&self) -> LockerResult<Params> {
        Params::new(
            self.memory_cost,
            self.time_cost,
            self.parallelism,
            Some(KEY_LEN * 2),
        )
        .map_err(|e| LockerError::Crypto(format!("Invalid Argon2 parameters: {}", e)))
    }
}

/// AES-256 key, zeroed on drop
#[derive(ZeroizeOnDrop)]
pub struct CipherKey([u8; KEY_LEN]);

impl CipherKey {
    /// Wrap raw key bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

/// HMAC-SHA256 key, zeroed on drop
#[derive(ZeroizeOnDrop)]
pub struct MacKey([u8; KEY_LEN]);

impl MacKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

/// Keys derived for a sealed file
pub struct SealedKeys {
    pub cipher: CipherKey,
    pub mac: MacKey,
}

/// Derive the legacy cipher key: SHA-256 of the UTF-8 passphrase
pub fn derive_legacy_key(passphrase: &str) -> CipherKey {
    let digest = Sha256::digest(passphrase.as_bytes());
    let mut key = [0u8; KEY_LEN];
    key.copy_from_slice(&digest);
    CipherKey(key)
}

/// Derive cipher and MAC keys with Argon2id
pub fn derive_key(
    passphrase: &str,
    params: &KeyDerivationParams,
    salt: &[u8; SALT_LEN],
) -> LockerResult<SealedKeys> {
    let argon2 = Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        params.argon2_params()?,
    );

    let mut output = zeroize::Zeroizing::new([0u8; KEY_LEN * 2]);
    argon2
        .hash_password_into(passphrase.as_bytes(), salt, &mut output[..])
        .map_err(|e| LockerError::Crypto(format!("Key derivation failed: {}", e)))?;

    let mut cipher = [0u8; KEY_LEN];
    let mut mac = [0u8; KEY_LEN];
    cipher.copy_from_slice(&output[..KEY_LEN]);
    mac.copy_from_slice(&output[KEY_LEN..]);

    Ok(SealedKeys {
        cipher: CipherKey(cipher),
        mac: MacKey(mac),
    })
}

/// Generate a fresh random salt
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    salt
}
