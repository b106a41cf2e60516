//! File I/O utilities with atomic writes
//!
//! Provides the ledger file primitives (lazy creation, whole-file load and
//! save) on top of generic JSON helpers shared with the settings layer.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::WalletError;
use crate::models::Record;

/// Create the ledger file with an empty array if it does not exist
///
/// Existing files are left untouched and are not validated.
pub fn ensure_exists<P: AsRef<Path>>(path: P) -> Result<(), WalletError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                WalletError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(b"[]").map_err(|e| {
                WalletError::Storage(format!("Failed to initialize {}: {}", path.display(), e))
            })?;
            log::info!("Created empty ledger at {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(WalletError::Storage(format!(
            "Failed to create {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Load every record from the ledger file, creating it first if absent
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, WalletError> {
    let path = path.as_ref();
    ensure_exists(path)?;

    let records: Vec<Record> = read_json_required(path)?;
    log::debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Overwrite the ledger file with the given records
pub fn save_records<P: AsRef<Path>>(path: P, records: &[Record]) -> Result<(), WalletError> {
    let path = path.as_ref();
    write_json_atomic(path, &records)?;
    log::debug!("Saved {} records to {}", records.len(), path.display());
    Ok(())
}

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, WalletError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    read_json_required(path)
}

/// Read JSON from a file, returning an error if file doesn't exist
pub fn read_json_required<T, P>(path: P) -> Result<T, WalletError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(WalletError::Storage(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| WalletError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| WalletError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), WalletError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                WalletError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    // Same directory as the target so the rename stays on one filesystem
    let mut temp_name = path.as_os_str().to_os_string();
    temp_name.push(".tmp");
    let temp_path = std::path::PathBuf::from(temp_name);

    let file = File::create(&temp_path)
        .map_err(|e| WalletError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| WalletError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| WalletError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| WalletError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        WalletError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
