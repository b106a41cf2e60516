//! Record repository for JSON storage
//!
//! Holds the in-memory copy of the ledger and writes it back to the ledger
//! file as a whole.

use std::path::{Path, PathBuf};

use crate::error::WalletError;
use crate::models::Record;

use super::file_io::{load_records, save_records};

/// Repository for ledger persistence
pub struct RecordRepository {
    path: PathBuf,
    data: Vec<Record>,
}

impl RecordRepository {
    /// Create a new, empty repository bound to a ledger file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: Vec::new(),
        }
    }

    /// Load records from disk, replacing anything held in memory
    pub fn load(&mut self) -> Result<(), WalletError> {
        self.data = load_records(&self.path)?;
        Ok(())
    }

    fn save(&self) -> Result<(), WalletError> {
        save_records(&self.path, &self.data)
    }

    /// Get all records in ledger order
    pub fn get_all(&self) -> &[Record] {
        &self.data
    }

    /// Append a record and save, returning its index
    ///
    /// The record is dropped again if the save fails, so memory never runs
    /// ahead of the file.
    pub fn append(&mut self, record: Record) -> Result<usize, WalletError> {
        self.data.push(record);

        if let Err(e) = self.save() {
            self.data.pop();
            return Err(e);
        }

        Ok(self.data.len() - 1)
    }

    /// Replace the record at `index` and save, returning the previous value
    ///
    /// Returns `Ok(None)` without touching anything when `index` is out of
    /// range. The previous value is put back if the save fails.
    pub fn replace(&mut self, index: usize, record: Record) -> Result<Option<Record>, WalletError> {
        let Some(slot) = self.data.get_mut(index) else {
            return Ok(None);
        };
        let before = std::mem::replace(slot, record);

        if let Err(e) = self.save() {
            self.data[index] = before;
            return Err(e);
        }

        Ok(Some(before))
    }

    /// Count records
    pub fn count(&self) -> usize {
        self.data.len()
    }

    /// Path of the backing ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
