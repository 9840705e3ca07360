//! The open credential database
//!
//! A [`Store`] owns the in-memory records, the snapshot last written to disk,
//! the session key, and the file path. Opening never fails outright: a file
//! that cannot be read or decrypted still yields a `Store`, marked invalid with
//! a [`LoadError`], and every mutating or saving call on it is refused.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::codec;
use crate::crypto::KeyDerivationParams;
use crate::error::{LoadError, LockerError, LockerResult};
use crate::models::{CategoryFilter, Record, RecordId, ALL_CATEGORIES};

use super::file_io::{read_bytes, write_bytes_atomic};
use super::format::{self, FileFormat, SessionKey};

/// Settings for a newly created database
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    pub format: FileFormat,
    pub key_derivation: KeyDerivationParams,
}

/// Outcome of a CSV import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Records appended to the store
    pub imported: usize,
    /// Rows skipped because an equal record already existed
    pub duplicates_skipped: usize,
}

/// An open, decrypted credential database
pub struct Store {
    records: Vec<Record>,
    committed: Vec<Record>,
    key: Option<SessionKey>,
    path: PathBuf,
    load_error: Option<LoadError>,
}

impl Store {
    /// Open an existing database
    ///
    /// Check [`Store::is_valid`] before use.
    pub fn open(passphrase: &str, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();

        match Self::load(passphrase, &path) {
            Ok((key, records)) => {
                info!(
                    path = %path.display(),
                    format = %key.format(),
                    records = records.len(),
                    "opened database"
                );
                Self {
                    committed: records.clone(),
                    records,
                    key: Some(key),
                    path,
                    load_error: None,
                }
            }
            Err(e) => {
                let load_error = LoadError::from(e);
                warn!(path = %path.display(), error = %load_error, "failed to open database");
                Self {
                    records: Vec::new(),
                    committed: Vec::new(),
                    key: None,
                    path,
                    load_error: Some(load_error),
                }
            }
        }
    }

    /// Open an existing database, returning the load error directly
    pub fn try_open(passphrase: &str, path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let mut store = Self::open(passphrase, path);
        match store.load_error.take() {
            Some(e) => Err(e),
            None => Ok(store),
        }
    }

    fn load(passphrase: &str, path: &Path) -> LockerResult<(SessionKey, Vec<Record>)> {
        let data = read_bytes(path)?;
        format::unseal(passphrase, &data)
    }

    /// Create an empty database and write it to `path` immediately
    pub fn create_new(
        passphrase: &str,
        path: impl AsRef<Path>,
        options: &StoreOptions,
    ) -> LockerResult<Self> {
        let key = SessionKey::derive(passphrase, options.format, &options.key_derivation)?;
        let mut store = Self {
            records: Vec::new(),
            committed: Vec::new(),
            key: Some(key),
            path: path.as_ref().to_path_buf(),
            load_error: None,
        };
        store.save()?;
        Ok(store)
    }

    /// Whether the database loaded successfully
    pub fn is_valid(&self) -> bool {
        self.load_error.is_none() && self.key.is_some()
    }

    /// Why the database failed to load
    pub fn load_error(&self) -> Option<&LoadError> {
        self.load_error.as_ref()
    }

    /// Current file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Layout used for the next save
    pub fn format(&self) -> Option<FileFormat> {
        self.key.as_ref().map(SessionKey::format)
    }

    /// Argon2id parameters of a v2 database
    pub fn key_derivation(&self) -> Option<&KeyDerivationParams> {
        self.key.as_ref().and_then(SessionKey::params)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in store order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Look up a record by id
    pub fn record(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Zero-based store position of a record
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    /// Check whether a value-equal record exists
    pub fn contains(&self, values: &Record) -> bool {
        self.records.iter().any(|r| r == values)
    }

    /// "All" followed by the distinct categories in sorted order
    pub fn list_categories(&self) -> Vec<String> {
        let distinct: BTreeSet<&str> = self.records.iter().map(|r| r.category.as_str()).collect();

        std::iter::once(ALL_CATEGORIES.to_string())
            .chain(distinct.into_iter().map(str::to_string))
            .collect()
    }

    /// Records passing `filter`, in store order
    pub fn list_records(&self, filter: &CategoryFilter) -> Vec<&Record> {
        self.records.iter().filter(|r| filter.matches(r)).collect()
    }

    /// Resolve a 1-based store position to a record id
    pub fn find_by_position(&self, position: usize) -> LockerResult<RecordId> {
        position
            .checked_sub(1)
            .and_then(|index| self.records.get(index))
            .map(Record::id)
            .ok_or_else(|| LockerError::record_not_found(format!("#{}", position)))
    }

    /// Records passing `filter` in display order, with their 1-based positions
    pub fn list_sorted(&self, filter: &CategoryFilter) -> Vec<(usize, &Record)> {
        let mut listed: Vec<(usize, &Record)> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| filter.matches(r))
            .map(|(index, r)| (index + 1, r))
            .collect();

        listed.sort_by_cached_key(|(_, r)| r.sort_key());
        listed
    }

    /// Append a record; duplicates are permitted here
    pub fn add_record(&mut self, record: Record) -> LockerResult<RecordId> {
        self.ensure_valid()?;
        let id = record.id();
        self.records.push(record);
        Ok(id)
    }

    /// Overwrite the text fields of a record, keeping its id
    pub fn update_record(&mut self, id: RecordId, values: &Record) -> LockerResult<()> {
        self.ensure_valid()?;
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| LockerError::record_not_found(id.to_string()))?;
        record.update_from(values);
        Ok(())
    }

    /// Remove a record, returning it
    pub fn remove_record(&mut self, id: RecordId) -> LockerResult<Record> {
        self.ensure_valid()?;
        let index = self
            .position(id)
            .ok_or_else(|| LockerError::record_not_found(id.to_string()))?;
        Ok(self.records.remove(index))
    }

    /// Whether the records differ from what was last written
    ///
    /// Comparison is positional, so a reorder counts as a change.
    pub fn has_unsaved_changes(&self) -> bool {
        self.records.len() != self.committed.len()
            || self
                .records
                .iter()
                .zip(&self.committed)
                .any(|(current, saved)| current != saved)
    }

    /// Write the records to the current path with the current key
    pub fn save(&mut self) -> LockerResult<()> {
        self.save_as(None, None)
    }

    /// Write the records, optionally to a new path and under a new passphrase
    ///
    /// The new key and path are only adopted once the write succeeded.
    pub fn save_as(&mut self, path: Option<&Path>, passphrase: Option<&str>) -> LockerResult<()> {
        let current = self.session_key()?;
        let new_key = passphrase.map(|p| current.rederive(p)).transpose()?;
        let target = path.map_or_else(|| self.path.clone(), Path::to_path_buf);

        self.write_with(target, new_key)
    }

    /// Write the records in place under a freshly derived key and layout
    ///
    /// Used to upgrade a legacy file. The key is only adopted once the write
    /// succeeded, so a failure leaves the store and the file as they were.
    pub fn save_with_format(
        &mut self,
        passphrase: &str,
        format: FileFormat,
        params: &KeyDerivationParams,
    ) -> LockerResult<()> {
        self.ensure_valid()?;
        let new_key = SessionKey::derive(passphrase, format, params)?;
        let target = self.path.clone();

        self.write_with(target, Some(new_key))?;
        info!(path = %self.path.display(), %format, "database rewritten in new layout");
        Ok(())
    }

    fn write_with(&mut self, target: PathBuf, new_key: Option<SessionKey>) -> LockerResult<()> {
        let key = match new_key.as_ref() {
            Some(key) => key,
            None => self.session_key()?,
        };

        let data = format::seal(key, &self.records)?;
        write_bytes_atomic(&target, &data)?;

        info!(
            path = %target.display(),
            records = self.records.len(),
            rekeyed = new_key.is_some(),
            "saved database"
        );

        if let Some(key) = new_key {
            self.key = Some(key);
        }
        self.path = target;
        self.committed = self.records.clone();
        Ok(())
    }

    /// Write all records to an unencrypted CSV file
    pub fn export_csv(&self, path: impl AsRef<Path>) -> LockerResult<usize> {
        self.ensure_valid()?;
        let path = path.as_ref();

        let data = Zeroizing::new(codec::csv::encode(&self.records)?);
        write_bytes_atomic(path, &data)?;

        info!(path = %path.display(), records = self.records.len(), "exported CSV");
        Ok(self.records.len())
    }

    /// Append records from a CSV file, skipping value duplicates
    ///
    /// The whole file is decoded first, so a malformed file adds nothing.
    pub fn import_csv(&mut self, path: impl AsRef<Path>) -> LockerResult<ImportSummary> {
        self.ensure_valid()?;
        let path = path.as_ref();

        let data = Zeroizing::new(read_bytes(path)?);
        let incoming = codec::csv::read_records(data.as_slice())?;

        let mut summary = ImportSummary::default();
        for record in incoming {
            if self.contains(&record) {
                summary.duplicates_skipped += 1;
            } else {
                self.records.push(record);
                summary.imported += 1;
            }
        }

        info!(
            path = %path.display(),
            imported = summary.imported,
            skipped = summary.duplicates_skipped,
            "imported CSV"
        );
        Ok(summary)
    }

    fn session_key(&self) -> LockerResult<&SessionKey> {
        self.ensure_valid()?;
        self.key
            .as_ref()
            .ok_or_else(|| LockerError::InvalidStore("no key loaded".to_string()))
    }

    /// Fail with `InvalidStore` if the database did not load
    pub(crate) fn ensure_valid(&self) -> LockerResult<()> {
        match &self.load_error {
            Some(e) => Err(LockerError::InvalidStore(e.message())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fast_options(format: FileFormat) -> StoreOptions {
        StoreOptions {
            format,
            key_derivation: KeyDerivationParams::with_values(64, 1, 1),
        }
    }

    fn create(temp_dir: &TempDir, format: FileFormat) -> (Store, PathBuf) {
        let path = temp_dir.path().join("locker.pdb");
        let store = Store::create_new("secret", &path, &fast_options(format)).unwrap();
        (store, path)
    }

    fn bank() -> Record {
        Record::new("Bank", "alice", "p@ss1", "Finance", "")
    }

    #[test]
    fn test_create_add_save_reopen() {
        for format in [FileFormat::Legacy, FileFormat::V2] {
            let temp_dir = TempDir::new().unwrap();
            let (mut store, path) = create(&temp_dir, format);
            assert!(path.exists());

            store.add_record(bank()).unwrap();
            store.save().unwrap();

            let reopened = Store::open("secret", &path);
            assert!(reopened.is_valid());
            assert_eq!(reopened.format(), Some(format));
            assert_eq!(reopened.records(), &[bank()]);
        }
    }

    #[test]
    fn test_wrong_passphrase_legacy_is_undecryptable() {
        let temp_dir = TempDir::new().unwrap();
        let (mut store, path) = create(&temp_dir, FileFormat::Legacy);
        store.add_record(bank()).unwrap();
        store.save().unwrap();

        let reopened = Store::open("wrong", &path);
        assert!(!reopened.is_valid());
        assert_eq!(reopened.load_error(), Some(&LoadError::Undecryptable));
    }

    #[test]
    fn test_wrong_passphrase_v2_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let (_, path) = create(&temp_dir, FileFormat::V2);

        let err = Store::try_open("wrong", &path).err().unwrap();
        assert_eq!(err, LoadError::WrongPassphrase);
        assert!(err.may_be_wrong_passphrase());
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open("secret", temp_dir.path().join("missing.pdb"));

        assert!(!store.is_valid());
        let err = store.load_error().unwrap();
        assert!(matches!(err, LoadError::Unreadable(_)));
        assert_ne!(err.message(), LoadError::Undecryptable.message());
    }

    #[test]
    fn test_flipped_bit_is_corrupted() {
        let temp_dir = TempDir::new().unwrap();
        let (mut store, path) = create(&temp_dir, FileFormat::V2);
        store.add_record(bank()).unwrap();
        store.save().unwrap();

        let mut data = fs::read(&path).unwrap();
        let last = data.len() - 40;
        data[last] ^= 0x80;
        fs::write(&path, &data).unwrap();

        let store = Store::open("secret", &path);
        assert!(matches!(store.load_error(), Some(LoadError::Corrupted(_))));
    }

    #[test]
    fn test_invalid_store_refuses_mutation_and_save() {
        let temp_dir = TempDir::new().unwrap();
        let (_, path) = create(&temp_dir, FileFormat::V2);
        let before = fs::read(&path).unwrap();

        let mut store = Store::open("wrong", &path);
        assert!(matches!(
            store.add_record(bank()),
            Err(LockerError::InvalidStore(_))
        ));
        assert!(matches!(store.save(), Err(LockerError::InvalidStore(_))));
        assert!(matches!(
            store.export_csv(temp_dir.path().join("out.csv")),
            Err(LockerError::InvalidStore(_))
        ));

        let csv_path = temp_dir.path().join("in.csv");
        fs::write(&csv_path, "Mail,bob,hunter2,Personal,\n").unwrap();
        assert!(matches!(
            store.import_csv(&csv_path),
            Err(LockerError::InvalidStore(_))
        ));

        let stray = RecordId::new();
        assert!(matches!(
            store.update_record(stray, &bank()),
            Err(LockerError::InvalidStore(_))
        ));
        assert!(matches!(
            store.remove_record(stray),
            Err(LockerError::InvalidStore(_))
        ));

        let elsewhere = temp_dir.path().join("elsewhere.pdb");
        assert!(matches!(
            store.save_as(Some(&elsewhere), Some("other")),
            Err(LockerError::InvalidStore(_))
        ));
        assert!(matches!(
            store.save_with_format(
                "wrong",
                FileFormat::V2,
                &KeyDerivationParams::with_values(64, 1, 1)
            ),
            Err(LockerError::InvalidStore(_))
        ));

        assert!(store.is_empty());
        assert!(!elsewhere.exists());
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn test_find_by_position() {
        let temp_dir = TempDir::new().unwrap();
        let (mut store, _) = create(&temp_dir, FileFormat::Legacy);

        let first = store.add_record(Record::new("A", "", "", "", "")).unwrap();
        let second = store.add_record(Record::new("B", "", "", "", "")).unwrap();

        assert_eq!(store.find_by_position(1).unwrap(), first);
        assert_eq!(store.find_by_position(2).unwrap(), second);
        assert!(store.find_by_position(0).unwrap_err().is_not_found());
        assert!(store.find_by_position(3).unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_sorted_by_category_then_title() {
        let temp_dir = TempDir::new().unwrap();
        let (mut store, _) = create(&temp_dir, FileFormat::Legacy);

        store.add_record(Record::new("Zoo", "", "", "Alpha", "")).unwrap();
        store.add_record(Record::new("Mail", "", "", "Personal", "")).unwrap();
        store.add_record(Record::new("Bank", "", "", "Alpha", "")).unwrap();

        let order: Vec<_> = store
            .list_sorted(&CategoryFilter::All)
            .iter()
            .map(|(pos, r)| (*pos, r.title.as_str()))
            .collect();
        assert_eq!(order, vec![(3, "Bank"), (1, "Zoo"), (2, "Mail")]);

        let alpha = store.list_sorted(&CategoryFilter::parse("Alpha"));
        assert_eq!(alpha.len(), 2);
    }

    #[test]
    fn test_change_tracking() {
        let temp_dir = TempDir::new().unwrap();
        let (mut store, path) = create(&temp_dir, FileFormat::Legacy);
        assert!(!store.has_unsaved_changes());

        let id = store.add_record(bank()).unwrap();
        assert!(store.has_unsaved_changes());
        store.save().unwrap();
        assert!(!store.has_unsaved_changes());

        let mut values = bank();
        values.secret = "rotated".into();
        store.update_record(id, &values).unwrap();
        assert!(store.has_unsaved_changes());
        store.save().unwrap();

        store.export_csv(temp_dir.path().join("out.csv")).unwrap();
        assert!(!store.has_unsaved_changes());

        store.remove_record(id).unwrap();
        assert!(store.has_unsaved_changes());

        let reopened = Store::open("secret", &path);
        assert!(!reopened.has_unsaved_changes());
        assert_eq!(reopened.records()[0].secret, "rotated");
    }

    #[test]
    fn test_reorder_counts_as_change() {
        let temp_dir = TempDir::new().unwrap();
        let (mut store, _) = create(&temp_dir, FileFormat::Legacy);
        store.add_record(bank()).unwrap();
        let mail = store
            .add_record(Record::new("Mail", "bob", "x", "Personal", ""))
            .unwrap();
        store.save().unwrap();

        let moved = store.remove_record(mail).unwrap();
        store.records.insert(0, moved);
        assert!(store.has_unsaved_changes());
    }

    #[test]
    fn test_update_keeps_id_and_unknown_id_fails() {
        let temp_dir = TempDir::new().unwrap();
        let (mut store, _) = create(&temp_dir, FileFormat::Legacy);
        let id = store.add_record(bank()).unwrap();

        let values = Record::new("Bank", "alice", "new", "Finance", "changed");
        store.update_record(id, &values).unwrap();
        assert_eq!(store.record(id).unwrap().notes, "changed");

        let err = store.update_record(RecordId::new(), &values).unwrap_err();
        assert!(err.is_not_found());
        assert!(store.remove_record(RecordId::new()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_store_permits_duplicates() {
        let temp_dir = TempDir::new().unwrap();
        let (mut store, _) = create(&temp_dir, FileFormat::Legacy);
        store.add_record(bank()).unwrap();
        store.add_record(bank()).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_list_categories_and_filter() {
        let temp_dir = TempDir::new().unwrap();
        let (mut store, _) = create(&temp_dir, FileFormat::Legacy);
        store.add_record(bank()).unwrap();
        store
            .add_record(Record::new("Mail", "bob", "x", "Personal", ""))
            .unwrap();
        store
            .add_record(Record::new("Broker", "alice", "y", "Finance", ""))
            .unwrap();

        assert_eq!(store.list_categories(), vec!["All", "Finance", "Personal"]);
        assert_eq!(store.list_records(&CategoryFilter::All).len(), 3);

        let finance = store.list_records(&CategoryFilter::parse("Finance"));
        let titles: Vec<_> = finance.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Bank", "Broker"]);
    }

    #[test]
    fn test_empty_store_categories() {
        let temp_dir = TempDir::new().unwrap();
        let (store, _) = create(&temp_dir, FileFormat::V2);
        assert_eq!(store.list_categories(), vec!["All"]);
        assert!(store.is_empty());
    }

    #[test]
    fn test_import_skips_duplicates() {
        let temp_dir = TempDir::new().unwrap();
        let (mut store, _) = create(&temp_dir, FileFormat::Legacy);
        store.add_record(bank()).unwrap();
        store.save().unwrap();

        let csv_path = temp_dir.path().join("in.csv");
        fs::write(
            &csv_path,
            "Bank,alice,p@ss1,Finance,\nMail,bob,hunter2,Personal,\nMail,bob,hunter2,Personal,\n",
        )
        .unwrap();

        let summary = store.import_csv(&csv_path).unwrap();
        assert_eq!(
            summary,
            ImportSummary {
                imported: 1,
                duplicates_skipped: 2
            }
        );
        assert_eq!(store.len(), 2);
        assert!(store.has_unsaved_changes());
    }

    #[test]
    fn test_malformed_import_adds_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let (mut store, _) = create(&temp_dir, FileFormat::Legacy);

        let csv_path = temp_dir.path().join("in.csv");
        fs::write(&csv_path, "Mail,bob,hunter2,Personal,\nshort,row\n").unwrap();

        let err = store.import_csv(&csv_path).unwrap_err();
        assert!(err.is_format());
        assert!(store.is_empty());
    }

    #[test]
    fn test_export_then_import_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let (mut store, _) = create(&temp_dir, FileFormat::V2);
        store.add_record(bank()).unwrap();
        store
            .add_record(Record::new("Quoted, \"one\"", "x", "y", "z", "line1\nline2"))
            .unwrap();

        let csv_path = temp_dir.path().join("out.csv");
        assert_eq!(store.export_csv(&csv_path).unwrap(), 2);

        let other_path = temp_dir.path().join("other.pdb");
        let mut other = Store::create_new("pw", &other_path, &fast_options(FileFormat::V2)).unwrap();
        other.import_csv(&csv_path).unwrap();
        assert_eq!(other.records(), store.records());
    }

    #[test]
    fn test_save_as_new_passphrase_and_path() {
        let temp_dir = TempDir::new().unwrap();
        let (mut store, path) = create(&temp_dir, FileFormat::V2);
        store.add_record(bank()).unwrap();

        let new_path = temp_dir.path().join("moved.pdb");
        store.save_as(Some(&new_path), Some("changed")).unwrap();
        assert_eq!(store.path(), new_path.as_path());
        assert!(!store.has_unsaved_changes());

        assert!(Store::open("changed", &new_path).is_valid());
        assert!(Store::open("secret", &path).records().is_empty());
        assert!(!Store::open("secret", &new_path).is_valid());
    }

    #[test]
    fn test_failed_save_as_keeps_old_key_and_path() {
        let temp_dir = TempDir::new().unwrap();
        let (mut store, path) = create(&temp_dir, FileFormat::Legacy);
        store.add_record(bank()).unwrap();

        let blocked = temp_dir.path().join("blocked");
        fs::create_dir(&blocked).unwrap();
        assert!(store.save_as(Some(&blocked), Some("changed")).is_err());

        assert_eq!(store.path(), path.as_path());
        assert!(store.has_unsaved_changes());
        store.save().unwrap();
        assert!(Store::open("secret", &path).is_valid());
    }

    #[test]
    fn test_save_with_format_upgrades_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let (mut store, path) = create(&temp_dir, FileFormat::Legacy);
        store.add_record(bank()).unwrap();
        store.save().unwrap();

        store
            .save_with_format(
                "secret",
                FileFormat::V2,
                &KeyDerivationParams::with_values(64, 1, 1),
            )
            .unwrap();

        assert_eq!(store.format(), Some(FileFormat::V2));
        assert!(!store.has_unsaved_changes());
        assert_eq!(FileFormat::detect(&fs::read(&path).unwrap()), FileFormat::V2);

        let reopened = Store::open("secret", &path);
        assert_eq!(reopened.format(), Some(FileFormat::V2));
        assert_eq!(reopened.records(), &[bank()]);
    }

    #[test]
    fn test_failed_save_with_format_keeps_old_layout() {
        let temp_dir = TempDir::new().unwrap();
        let (mut store, path) = create(&temp_dir, FileFormat::Legacy);
        store.add_record(bank()).unwrap();
        store.save().unwrap();

        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();
        assert!(store
            .save_with_format(
                "secret",
                FileFormat::V2,
                &KeyDerivationParams::with_values(64, 1, 1),
            )
            .is_err());

        assert_eq!(store.format(), Some(FileFormat::Legacy));
    }

    #[test]
    fn test_create_new_in_unwritable_location_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocked = temp_dir.path().join("blocked");
        fs::create_dir(&blocked).unwrap();

        let result = Store::create_new("pw", &blocked, &fast_options(FileFormat::Legacy));
        assert!(matches!(result, Err(LockerError::Io(_))));
    }
}
