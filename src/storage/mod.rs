//! Storage layer for PassLocker
//!
//! Encrypted database files with atomic writes, in either the legacy or the
//! authenticated v2 layout.

pub mod file_io;
pub mod format;
pub mod store;

pub use file_io::{read_bytes, write_bytes_atomic};
pub use format::{FileFormat, SessionKey};
pub use store::{ImportSummary, Store, StoreOptions};
