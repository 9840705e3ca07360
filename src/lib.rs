//! PassLocker - Encrypted, file-backed credential locker
//!
//! This library keeps a list of credential records (title, account, secret,
//! category, notes) in a single encrypted file, and offers CSV import/export,
//! password strength estimation and password generation.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Records, ids and category filters
//! - `codec`: Record byte encoding and CSV
//! - `crypto`: Key derivation, AES-256-CBC and HMAC authentication
//! - `storage`: File layouts, atomic writes and the open database
//! - `services`: Editing policy on top of the store
//! - `password`: Strength estimation and generation
//! - `cli` / `display`: Command handlers and terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use passlocker::models::{CategoryFilter, Record};
//! use passlocker::storage::{Store, StoreOptions};
//!
//! let mut store = Store::create_new("passphrase", "vault.pdb", &StoreOptions::default())?;
//! store.add_record(Record::new("Bank", "alice", "p@ss1", "Finance", ""))?;
//! store.save()?;
//!
//! let reopened = Store::try_open("passphrase", "vault.pdb")?;
//! assert_eq!(reopened.list_records(&CategoryFilter::All).len(), 1);
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod password;
pub mod services;
pub mod storage;

pub use error::{LoadError, LockerError, LockerResult};
