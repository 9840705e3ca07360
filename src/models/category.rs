//! Category filtering
//!
//! Categories are plain strings on each record. The pseudo-category "All"
//! selects every record.

use std::fmt;

use super::record::Record;

/// Name of the pseudo-category that matches every record
pub const ALL_CATEGORIES: &str = "All";

/// Category assigned when a record is added without one
pub const DEFAULT_CATEGORY: &str = "None";

/// Which records to list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Parse a category name, mapping "All" to [`CategoryFilter::All`]
    pub fn parse(name: &str) -> Self {
        if name == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Named(name.to_string())
        }
    }

    /// Check whether a record passes this filter
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => record.category == *name,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "{}", ALL_CATEGORIES),
            Self::Named(name) => write!(f, "{}", name),
        }
    }
}
