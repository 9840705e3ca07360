//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{LockerError, LockerResult};

/// Read a whole file into memory
pub fn read_bytes<P: AsRef<Path>>(path: P) -> LockerResult<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|e| LockerError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

/// Write bytes to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all, so a crash
/// mid-save never leaves a half-written database behind. The temp file gets
/// a random name next to the target, so existing files are never touched.
pub fn write_bytes_atomic<P: AsRef<Path>>(path: P, data: &[u8]) -> LockerResult<()> {
    let path = path.as_ref();
    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => parent,
        None => Path::new("."),
    };

    fs::create_dir_all(parent).map_err(|e| {
        LockerError::Io(format!(
            "Failed to create directory {}: {}",
            parent.display(),
            e
        ))
    })?;

    // Same directory so the rename stays on one filesystem
    let mut temp = NamedTempFile::new_in(parent).map_err(|e| {
        LockerError::Io(format!(
            "Failed to create temp file in {}: {}",
            parent.display(),
            e
        ))
    })?;

    restrict_permissions(temp.as_file());

    temp.write_all(data)
        .map_err(|e| LockerError::Io(format!("Failed to write data: {}", e)))?;

    // Sync to disk before rename
    temp.as_file()
        .sync_all()
        .map_err(|e| LockerError::Io(format!("Failed to sync data: {}", e)))?;

    // On failure the returned temp file is dropped, which deletes it
    temp.persist(path).map_err(|e| {
        LockerError::Io(format!("Failed to replace {}: {}", path.display(), e.error))
    })?;

    Ok(())
}

#[cfg(unix)]
fn restrict_permissions(file: &File) {
    use std::os::unix::fs::PermissionsExt;

    if let Err(e) = file.set_permissions(fs::Permissions::from_mode(0o600)) {
        tracing::warn!("cannot restrict file permissions: {}", e);
    }
}

#[cfg(not(unix))]
fn restrict_permissions(_file: &File) {}
