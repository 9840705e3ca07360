//! Process-local record identifiers
//!
//! A [`RecordId`] lets callers address one in-memory record without relying
//! on value equality, which is deliberately non-unique. Ids are never written
//! to disk; reopening a database assigns fresh ones.

use std::fmt;
use uuid::Uuid;

/// Opaque identifier for a record, unique within this process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rec-{}", &self.0.to_string()[..8])
    }
}
