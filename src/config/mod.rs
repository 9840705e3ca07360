//! Configuration module for PassLocker
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LockerPaths;
pub use settings::{GuessRates, Settings};
