//! Core data models for PassLocker
//!
//! Records, their process-local ids, and category filtering.

pub mod category;
pub mod ids;
pub mod record;

pub use category::{CategoryFilter, ALL_CATEGORIES, DEFAULT_CATEGORY};
pub use ids::RecordId;
pub use record::{Record, FIELD_COUNT, FIELD_NAMES};
