//! Record codecs
//!
//! - `records`: the delimited byte string that gets encrypted
//! - `csv`: plaintext CSV import/export

pub mod csv;
pub mod records;

pub use records::{deserialize, serialize, FieldEncoding, PADDING_BYTE, SEP_FIELD, SEP_RECORD};
