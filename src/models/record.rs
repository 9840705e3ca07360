//! Credential record model
//!
//! A record holds five free-form text fields plus a process-local id.
//! Equality compares the text fields only.

use std::fmt;

use super::ids::RecordId;

/// Number of persisted text fields per record
pub const FIELD_COUNT: usize = 5;

/// Column names in persisted order
pub const FIELD_NAMES: [&str; FIELD_COUNT] = ["title", "account", "secret", "category", "notes"];

/// One stored credential
#[derive(Clone)]
pub struct Record {
    id: RecordId,

    /// Display name of the entry (e.g. the site or service)
    pub title: String,

    /// Account or user name
    pub account: String,

    /// The stored password or secret
    pub secret: String,

    /// Free-form grouping label
    pub category: String,

    /// Additional notes
    pub notes: String,
}

impl Record {
    /// Create a new record with a fresh id
    pub fn new(
        title: impl Into<String>,
        account: impl Into<String>,
        secret: impl Into<String>,
        category: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: RecordId::new(),
            title: title.into(),
            account: account.into(),
            secret: secret.into(),
            category: category.into(),
            notes: notes.into(),
        }
    }

    /// Build a record from fields in persisted order
    pub fn from_fields(fields: [String; FIELD_COUNT]) -> Self {
        let [title, account, secret, category, notes] = fields;
        Self::new(title, account, secret, category, notes)
    }

    /// The process-local identifier
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Field values in persisted order: title, account, secret, category, notes
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            &self.title,
            &self.account,
            &self.secret,
            &self.category,
            &self.notes,
        ]
    }

    /// Copy all text fields from `values`, keeping this record's id
    pub fn update_from(&mut self, values: &Record) {
        self.title = values.title.clone();
        self.account = values.account.clone();
        self.secret = values.secret.clone();
        self.category = values.category.clone();
        self.notes = values.notes.clone();
    }

    /// Key used to order records for display
    pub fn sort_key(&self) -> String {
        format!("{} {}", self.category, self.title)
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.fields() == other.fields()
    }
}

impl Eq for Record {}

// Secrets stay out of debug output
impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("account", &self.account)
            .field("secret", &"[REDACTED]")
            .field("category", &self.category)
            .field("notes", &self.notes)
            .finish()
    }
}
