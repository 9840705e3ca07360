//! Cryptographic functions for PassLocker
//!
//! Provides AES-256-CBC encryption with per-write random IVs, SHA-256 (legacy)
//! and Argon2id key derivation, and HMAC-SHA256 authentication for sealed
//! database files.

pub mod envelope;
pub mod integrity;
pub mod key_derivation;
pub mod secure_memory;

pub use envelope::{decrypt, encrypt, strip_padding, BLOCK_SIZE};
pub use key_derivation::{
    derive_key, derive_legacy_key, generate_salt, CipherKey, KeyDerivationParams, MacKey,
    SealedKeys, SALT_LEN,
};
pub use secure_memory::SecureString;
