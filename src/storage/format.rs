//! On-disk database layouts
//!
//! - **Legacy**: `IV || AES-256-CBC(records)` keyed by SHA-256 of the
//!   passphrase, raw field encoding, no authentication.
//! - **V2**: a versioned header carrying the Argon2id parameters, salt and a
//!   key check, then `IV || ciphertext`, then an HMAC-SHA256 tag over
//!   everything before it. Fields use the escaped encoding.
//!
//! ```text
//! 0   4   magic "PLKR"
//! 4   1   version (2)
//! 5   12  memory / time / parallelism, u32 LE each
//! 17  16  salt
//! 33  16  key check
//! 49  ..  IV || ciphertext
//! -32 32  tag
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

use crate::codec::{self, FieldEncoding};
use crate::crypto::integrity::{self, KEY_CHECK_LEN, TAG_LEN};
use crate::crypto::{
    self, derive_key, derive_legacy_key, generate_salt, CipherKey, KeyDerivationParams,
    SealedKeys, BLOCK_SIZE, SALT_LEN,
};
use crate::error::{LockerError, LockerResult};
use crate::models::Record;

/// Leading bytes of a v2 file
pub const MAGIC: &[u8; 4] = b"PLKR";

/// Version byte following the magic
pub const FORMAT_VERSION: u8 = 2;

const PARAMS_OFFSET: usize = 5;
const SALT_OFFSET: usize = 17;
const CHECK_OFFSET: usize = SALT_OFFSET + SALT_LEN;

/// Length of the v2 header, up to the IV
pub const HEADER_LEN: usize = CHECK_OFFSET + KEY_CHECK_LEN;

/// Database file layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    /// Unsalted SHA-256 key, unauthenticated
    Legacy,
    /// Argon2id key, authenticated
    #[default]
    V2,
}

impl FileFormat {
    /// Guess the layout of an existing file from its first bytes
    pub fn detect(data: &[u8]) -> Self {
        if data.len() > MAGIC.len()
            && &data[..MAGIC.len()] == MAGIC
            && data[MAGIC.len()] == FORMAT_VERSION
        {
            Self::V2
        } else {
            Self::Legacy
        }
    }

    /// Field encoding used inside the ciphertext
    pub fn field_encoding(self) -> FieldEncoding {
        match self {
            Self::Legacy => FieldEncoding::Raw,
            Self::V2 => FieldEncoding::Escaped,
        }
    }

    /// Parse a format name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "legacy" | "v1" => Some(Self::Legacy),
            "v2" | "sealed" => Some(Self::V2),
            _ => None,
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::V2 => write!(f, "v2"),
        }
    }
}

/// Key material for one open database
///
/// Holds everything needed to write the file again without the passphrase.
pub enum SessionKey {
    Legacy(CipherKey),
    V2 {
        params: KeyDerivationParams,
        salt: [u8; SALT_LEN],
        keys: SealedKeys,
    },
}

impl SessionKey {
    /// Derive a key for `format`; v2 gets a fresh salt
    pub fn derive(
        passphrase: &str,
        format: FileFormat,
        params: &KeyDerivationParams,
    ) -> LockerResult<Self> {
        match format {
            FileFormat::Legacy => Ok(Self::Legacy(derive_legacy_key(passphrase))),
            FileFormat::V2 => {
                params.validate()?;
                let salt = generate_salt();
                let keys = derive_key(passphrase, params, &salt)?;
                Ok(Self::V2 {
                    params: *params,
                    salt,
                    keys,
                })
            }
        }
    }

    /// Derive a key for a new passphrase, keeping layout and cost parameters
    pub fn rederive(&self, passphrase: &str) -> LockerResult<Self> {
        match self {
            Self::Legacy(_) => Self::derive(
                passphrase,
                FileFormat::Legacy,
                &KeyDerivationParams::default(),
            ),
            Self::V2 { params, .. } => Self::derive(passphrase, FileFormat::V2, params),
        }
    }

    /// Layout this key writes
    pub fn format(&self) -> FileFormat {
        match self {
            Self::Legacy(_) => FileFormat::Legacy,
            Self::V2 { .. } => FileFormat::V2,
        }
    }

    /// Argon2id parameters, if any
    pub fn params(&self) -> Option<&KeyDerivationParams> {
        match self {
            Self::Legacy(_) => None,
            Self::V2 { params, .. } => Some(params),
        }
    }
}

/// Encrypt records into file bytes
pub fn seal(key: &SessionKey, records: &[Record]) -> LockerResult<Vec<u8>> {
    let plaintext = Zeroizing::new(codec::serialize(records, key.format().field_encoding())?);

    let data = match key {
        SessionKey::Legacy(cipher) => crypto::encrypt(cipher, &plaintext)?,
        SessionKey::V2 { params, salt, keys } => {
            let mut out = Vec::with_capacity(HEADER_LEN + BLOCK_SIZE + plaintext.len() + 32);
            out.extend_from_slice(MAGIC);
            out.push(FORMAT_VERSION);
            out.extend_from_slice(&params.memory_cost.to_le_bytes());
            out.extend_from_slice(&params.time_cost.to_le_bytes());
            out.extend_from_slice(&params.parallelism.to_le_bytes());
            out.extend_from_slice(salt);

            let check = integrity::compute_key_check(&keys.mac, &out)?;
            out.extend_from_slice(&check);

            out.extend_from_slice(&crypto::encrypt(&keys.cipher, &plaintext)?);

            let tag = integrity::compute_tag(&keys.mac, &out)?;
            out.extend_from_slice(&tag);
            out
        }
    };

    debug!(
        format = %key.format(),
        records = records.len(),
        bytes = data.len(),
        "sealed database"
    );
    Ok(data)
}

/// Decrypt file bytes, returning the session key and the records
pub fn unseal(passphrase: &str, data: &[u8]) -> LockerResult<(SessionKey, Vec<Record>)> {
    let format = FileFormat::detect(data);
    debug!(%format, bytes = data.len(), "unsealing database");

    match format {
        FileFormat::Legacy => {
            let key = derive_legacy_key(passphrase);
            let plaintext = Zeroizing::new(crypto::decrypt(&key, data)?);
            let records = codec::deserialize(crypto::strip_padding(&plaintext), FieldEncoding::Raw)?;
            Ok((SessionKey::Legacy(key), records))
        }
        FileFormat::V2 => unseal_v2(passphrase, data),
    }
}

fn unseal_v2(passphrase: &str, data: &[u8]) -> LockerResult<(SessionKey, Vec<Record>)> {
    if data.len() < HEADER_LEN + BLOCK_SIZE + TAG_LEN {
        return Err(LockerError::Integrity(format!(
            "file is truncated ({} bytes)",
            data.len()
        )));
    }

    let params = KeyDerivationParams::with_values(
        read_u32(data, PARAMS_OFFSET),
        read_u32(data, PARAMS_OFFSET + 4),
        read_u32(data, PARAMS_OFFSET + 8),
    );
    params
        .validate()
        .map_err(|e| LockerError::Integrity(format!("bad header: {}", e)))?;

    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&data[SALT_OFFSET..CHECK_OFFSET]);

    let keys = derive_key(passphrase, &params, &salt)?;
    integrity::verify_key_check(
        &keys.mac,
        &data[..CHECK_OFFSET],
        &data[CHECK_OFFSET..HEADER_LEN],
    )?;

    let (body, tag) = data.split_at(data.len() - TAG_LEN);
    integrity::verify_tag(&keys.mac, body, tag)?;

    let plaintext = Zeroizing::new(crypto::decrypt(&keys.cipher, &body[HEADER_LEN..])?);
    let records = codec::deserialize(crypto::strip_padding(&plaintext), FieldEncoding::Escaped)?;

    Ok((SessionKey::V2 { params, salt, keys }, records))
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&data[offset..offset + 4]);
    u32::from_le_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_params() -> KeyDerivationParams {
        KeyDerivationParams::with_values(64, 1, 1)
    }

    fn sample() -> Vec<Record> {
        vec![
            Record::new("Bank", "alice", "p@ss1", "Finance", ""),
            Record::new("Mail", "bob", "hunter2", "Personal", "two-factor on"),
        ]
    }

    #[test]
    fn test_legacy_round_trip() {
        let key = SessionKey::derive("pw", FileFormat::Legacy, &fast_params()).unwrap();
        let data = seal(&key, &sample()).unwrap();

        assert_eq!(FileFormat::detect(&data), FileFormat::Legacy);
        assert_eq!(data.len() % BLOCK_SIZE, 0);

        let (key, records) = unseal("pw", &data).unwrap();
        assert_eq!(key.format(), FileFormat::Legacy);
        assert_eq!(records, sample());
    }

    #[test]
    fn test_v2_round_trip() {
        let key = SessionKey::derive("pw", FileFormat::V2, &fast_params()).unwrap();
        let data = seal(&key, &sample()).unwrap();

        assert_eq!(&data[..4], MAGIC);
        assert_eq!(data[4], FORMAT_VERSION);
        assert_eq!(FileFormat::detect(&data), FileFormat::V2);

        let (key, records) = unseal("pw", &data).unwrap();
        assert_eq!(key.format(), FileFormat::V2);
        assert_eq!(key.params(), Some(&fast_params()));
        assert_eq!(records, sample());
    }

    #[test]
    fn test_v2_keeps_separators_in_fields() {
        let records = vec![Record::new("a\x1eb", "c\x1dd", "e\x1bf", "", "")];
        let key = SessionKey::derive("pw", FileFormat::V2, &fast_params()).unwrap();
        let data = seal(&key, &records).unwrap();

        let (_, decoded) = unseal("pw", &data).unwrap();
        assert_eq!(decoded, records);
    }

    #[test]
    fn test_legacy_refuses_separators_in_fields() {
        let records = vec![Record::new("a\x1eb", "", "", "", "")];
        let key = SessionKey::derive("pw", FileFormat::Legacy, &fast_params()).unwrap();
        assert!(matches!(seal(&key, &records), Err(LockerError::Format(_))));
    }

    #[test]
    fn test_empty_database_round_trips() {
        for format in [FileFormat::Legacy, FileFormat::V2] {
            let key = SessionKey::derive("pw", format, &fast_params()).unwrap();
            let data = seal(&key, &[]).unwrap();
            let (_, records) = unseal("pw", &data).unwrap();
            assert!(records.is_empty());
        }
    }

    #[test]
    fn test_legacy_wrong_passphrase_is_format_error() {
        let key = SessionKey::derive("right", FileFormat::Legacy, &fast_params()).unwrap();
        let data = seal(&key, &sample()).unwrap();
        assert!(matches!(unseal("wrong", &data), Err(LockerError::Format(_))));
    }

    #[test]
    fn test_v2_wrong_passphrase_detected_by_key_check() {
        let key = SessionKey::derive("right", FileFormat::V2, &fast_params()).unwrap();
        let data = seal(&key, &sample()).unwrap();
        assert!(matches!(
            unseal("wrong", &data),
            Err(LockerError::WrongPassphrase)
        ));
    }

    #[test]
    fn test_v2_flipped_ciphertext_bit_fails_integrity() {
        let key = SessionKey::derive("pw", FileFormat::V2, &fast_params()).unwrap();
        let mut data = seal(&key, &sample()).unwrap();
        data[HEADER_LEN + BLOCK_SIZE] ^= 0x01;
        assert!(matches!(unseal("pw", &data), Err(LockerError::Integrity(_))));
    }

    #[test]
    fn test_v2_truncated_file_fails_integrity() {
        let key = SessionKey::derive("pw", FileFormat::V2, &fast_params()).unwrap();
        let data = seal(&key, &sample()).unwrap();
        assert!(matches!(
            unseal("pw", &data[..HEADER_LEN + 8]),
            Err(LockerError::Integrity(_))
        ));
    }

    #[test]
    fn test_v2_absurd_header_params_rejected() {
        let key = SessionKey::derive("pw", FileFormat::V2, &fast_params()).unwrap();
        let mut data = seal(&key, &sample()).unwrap();
        data[PARAMS_OFFSET..PARAMS_OFFSET + 4].copy_from_slice(&u32::MAX.to_le_bytes());
        assert!(matches!(unseal("pw", &data), Err(LockerError::Integrity(_))));
    }

    #[test]
    fn test_fresh_salt_per_derivation() {
        let a = SessionKey::derive("pw", FileFormat::V2, &fast_params()).unwrap();
        let b = a.rederive("pw").unwrap();
        match (a, b) {
            (SessionKey::V2 { salt: s1, .. }, SessionKey::V2 { salt: s2, .. }) => {
                assert_ne!(s1, s2)
            }
            _ => panic!("expected v2 keys"),
        }
    }

    #[test]
    fn test_short_legacy_file_is_crypto_error() {
        assert!(matches!(unseal("pw", b"short"), Err(LockerError::Crypto(_))));
    }

    #[test]
    fn test_format_parse_and_display() {
        assert_eq!(FileFormat::parse("legacy"), Some(FileFormat::Legacy));
        assert_eq!(FileFormat::parse("V2"), Some(FileFormat::V2));
        assert_eq!(FileFormat::parse("zip"), None);
        assert_eq!(FileFormat::V2.to_string(), "v2");
        assert_eq!(FileFormat::default(), FileFormat::V2);
    }
}
