//! Display formatting for terminal output
//!
//! Provides utilities for formatting records for terminal display.

pub mod record;

pub use record::{format_category_list, format_record_details, format_record_list};
