//! Delimited binary encoding of a record set
//!
//! Each record is its five fields joined by [`SEP_FIELD`]; records are joined
//! by [`SEP_RECORD`] and the whole string ends with one trailing
//! [`SEP_RECORD`]. This is the plaintext that gets encrypted.
//!
//! Legacy files store fields raw, so a field containing either separator
//! cannot be written. Sealed (v2) files escape separators and the escape byte
//! itself with [`ESCAPE`], which makes the encoding lossless for any text.

use tracing::debug;

use crate::error::{LockerError, LockerResult};
use crate::models::{Record, FIELD_COUNT, FIELD_NAMES};

/// Separates records
pub const SEP_RECORD: u8 = 0x1E;

/// Separates fields within a record
pub const SEP_FIELD: u8 = 0x1D;

/// Marks the next byte as literal field content (escaped encoding only)
pub const ESCAPE: u8 = 0x1B;

/// Byte used to pad plaintext up to the cipher block size
pub const PADDING_BYTE: u8 = 0x00;

/// How field text is written between separators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEncoding {
    /// Fields are written verbatim; separator bytes are not representable
    Raw,
    /// Separator and escape bytes inside fields are prefixed with [`ESCAPE`]
    Escaped,
}

/// Serialize records into the delimited byte string
pub fn serialize(records: &[Record], encoding: FieldEncoding) -> LockerResult<Vec<u8>> {
    let mut out = Vec::new();

    for (index, record) in records.iter().enumerate() {
        if index > 0 {
            out.push(SEP_RECORD);
        }
        for (field_index, field) in record.fields().iter().enumerate() {
            if field_index > 0 {
                out.push(SEP_FIELD);
            }
            write_field(&mut out, field, encoding).map_err(|byte| {
                LockerError::Format(format!(
                    "{} of record {} contains reserved byte 0x{:02X}",
                    FIELD_NAMES[field_index],
                    index + 1,
                    byte
                ))
            })?;
        }
    }
    out.push(SEP_RECORD);

    debug!(records = records.len(), bytes = out.len(), "serialized records");
    Ok(out)
}

/// Append one field, returning the offending byte if it cannot be encoded
fn write_field(out: &mut Vec<u8>, field: &str, encoding: FieldEncoding) -> Result<(), u8> {
    for &byte in field.as_bytes() {
        let reserved = byte == SEP_RECORD || byte == SEP_FIELD;
        match encoding {
            FieldEncoding::Raw if reserved => return Err(byte),
            FieldEncoding::Escaped if reserved || byte == ESCAPE => {
                out.push(ESCAPE);
                out.push(byte);
            }
            _ => out.push(byte),
        }
    }
    Ok(())
}

/// Parse the delimited byte string back into records
///
/// The shape check doubles as wrong-key detection: bytes produced by
/// decrypting with the wrong key almost never split into 5-field chunks.
pub fn deserialize(bytes: &[u8], encoding: FieldEncoding) -> LockerResult<Vec<Record>> {
    let mut records = Vec::new();
    let mut fields: Vec<Vec<u8>> = Vec::new();
    let mut current = Vec::new();
    let mut chunk_is_padding = true;
    let mut saw_record_separator = false;
    let mut iter = bytes.iter().copied();

    while let Some(byte) = iter.next() {
        match byte {
            ESCAPE if encoding == FieldEncoding::Escaped => {
                let literal = iter.next().ok_or_else(|| {
                    LockerError::Format("escape byte at end of data".to_string())
                })?;
                current.push(literal);
                chunk_is_padding = false;
            }
            SEP_FIELD => {
                fields.push(std::mem::take(&mut current));
                chunk_is_padding = false;
            }
            SEP_RECORD => {
                saw_record_separator = true;
                fields.push(std::mem::take(&mut current));
                finish_chunk(&mut records, std::mem::take(&mut fields), chunk_is_padding)?;
                chunk_is_padding = true;
            }
            other => {
                current.push(other);
                chunk_is_padding &= other == PADDING_BYTE;
            }
        }
    }

    if !bytes.is_empty() && !saw_record_separator {
        return Err(LockerError::Format(
            "no record separator found".to_string(),
        ));
    }
    fields.push(current);
    finish_chunk(&mut records, fields, chunk_is_padding)?;

    debug!(records = records.len(), bytes = bytes.len(), "deserialized records");
    Ok(records)
}

/// Validate one chunk between record separators and push it if it is a record
///
/// A chunk is either exactly five fields, or a single run of padding bytes
/// (including the empty chunk after the trailing separator).
fn finish_chunk(
    records: &mut Vec<Record>,
    fields: Vec<Vec<u8>>,
    is_padding: bool,
) -> LockerResult<()> {
    if fields.len() == 1 && is_padding {
        return Ok(());
    }

    if fields.len() != FIELD_COUNT {
        return Err(LockerError::Format(format!(
            "record has {} fields, expected {}",
            fields.len(),
            FIELD_COUNT
        )));
    }

    let mut text: [String; FIELD_COUNT] = Default::default();
    for (slot, raw) in text.iter_mut().zip(fields) {
        *slot = String::from_utf8(raw)
            .map_err(|_| LockerError::Format("field is not valid UTF-8".to_string()))?;
    }

    records.push(Record::from_fields(text));
    Ok(())
}
