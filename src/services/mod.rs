//! Service layer for PassLocker
//!
//! The service layer applies editing policy on top of the storage layer.

pub mod record;

pub use record::RecordService;
