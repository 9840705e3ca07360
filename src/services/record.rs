//! Record service
//!
//! Editing policy on top of [`Store`]: exact duplicates are refused on add,
//! a blank category becomes "None", and an update that changes nothing is
//! reported as such.

use crate::error::{LockerError, LockerResult};
use crate::models::{Record, RecordId, DEFAULT_CATEGORY};
use crate::storage::Store;

/// Service for record management
pub struct RecordService<'a> {
    store: &'a mut Store,
}

impl<'a> RecordService<'a> {
    /// Create a new record service
    pub fn new(store: &'a mut Store) -> Self {
        Self { store }
    }

    /// Add a record unless an identical one already exists
    pub fn add(&mut self, values: Record) -> LockerResult<RecordId> {
        self.store.ensure_valid()?;
        let record = normalize(values);

        if self.store.contains(&record) {
            return Err(LockerError::duplicate_record(record.title.clone()));
        }

        self.store.add_record(record)
    }

    /// Replace the fields of an existing record
    ///
    /// Returns `false` when the new values equal the current ones.
    pub fn update(&mut self, id: RecordId, values: Record) -> LockerResult<bool> {
        self.store.ensure_valid()?;
        let values = normalize(values);

        let current = self
            .store
            .record(id)
            .ok_or_else(|| LockerError::record_not_found(id.to_string()))?;
        if *current == values {
            return Ok(false);
        }

        self.store.update_record(id, &values)?;
        Ok(true)
    }

    /// Remove a record
    pub fn remove(&mut self, id: RecordId) -> LockerResult<Record> {
        self.store.remove_record(id)
    }
}

fn normalize(mut record: Record) -> Record {
    if record.category.is_empty() {
        record.category = DEFAULT_CATEGORY.to_string();
    }
    record
}
