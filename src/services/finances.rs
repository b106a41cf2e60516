//! Finances service
//!
//! Owns the in-memory ledger and keeps it equal to the ledger file: every
//! mutation is followed by a full rewrite of the file.

use std::path::{Path, PathBuf};

use crate::audit::{generate_diff, AuditEntry, AuditLogger};
use crate::error::WalletResult;
use crate::models::{Amount, Category, Record};
use crate::storage::RecordRepository;

/// Income, expense and net totals over the whole ledger
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Balance {
    pub income: Amount,
    pub expenses: Amount,
    pub balance: Amount,
}

/// Exact-match filters for [`Finances::search`]
///
/// Every field that is set must match; unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub category: Option<Category>,
    pub date: Option<String>,
    pub amount: Option<Amount>,
}

impl SearchQuery {
    /// Create a new empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Filter by date
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Filter by amount
    pub fn amount(mut self, amount: impl Into<Amount>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// True when no filter is set
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.date.is_none() && self.amount.is_none()
    }

    /// Check a record against every set filter
    pub fn matches(&self, record: &Record) -> bool {
        self.category.as_ref().map_or(true, |c| *c == record.category)
            && self.date.as_ref().map_or(true, |d| *d == record.date)
            && self.amount.map_or(true, |a| a == record.amount)
    }
}

/// The ledger and its operations
pub struct Finances {
    records: RecordRepository,
    audit: Option<AuditLogger>,
}

impl Finances {
    /// Load the ledger at `path`, creating an empty one if it doesn't exist
    pub fn open(path: impl Into<PathBuf>) -> WalletResult<Self> {
        let mut records = RecordRepository::new(path.into());
        records.load()?;
        log::debug!(
            "Opened ledger {} with {} records",
            records.path().display(),
            records.count()
        );

        Ok(Self {
            records,
            audit: None,
        })
    }

    /// Record every change in the given audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Append a record and persist the ledger
    pub fn add(
        &mut self,
        date: impl Into<String>,
        category: Category,
        amount: impl Into<Amount>,
        description: impl Into<String>,
    ) -> WalletResult<()> {
        let record = Record::new(date, category, amount, description);
        let index = self.records.append(record.clone())?;
        log::info!("Added record #{}: {}", index, record);

        if let Some(audit) = &self.audit {
            let entry = AuditEntry::create(self.ledger_name(), index, &record);
            self.write_audit(audit, &entry);
        }

        Ok(())
    }

    /// Replace the record at `index` and persist the ledger
    ///
    /// Returns `false` and changes nothing when `index` is out of range.
    pub fn edit(
        &mut self,
        index: usize,
        date: impl Into<String>,
        category: Category,
        amount: impl Into<Amount>,
        description: impl Into<String>,
    ) -> WalletResult<bool> {
        let record = Record::new(date, category, amount, description);

        let Some(before) = self.records.replace(index, record.clone())? else {
            log::debug!(
                "Edit ignored: index {} out of range (len {})",
                index,
                self.records.count()
            );
            return Ok(false);
        };
        log::info!("Edited record #{}: {}", index, record);

        if let Some(audit) = &self.audit {
            let diff = match (serde_json::to_value(&before), serde_json::to_value(&record)) {
                (Ok(b), Ok(a)) => generate_diff(&b, &a),
                _ => None,
            };
            let entry = AuditEntry::update(self.ledger_name(), index, &before, &record, diff);
            self.write_audit(audit, &entry);
        }

        Ok(true)
    }

    /// Sum income and expenses; unknown categories count toward neither
    pub fn balance(&self) -> Balance {
        let records = self.records.get_all();

        let income: Amount = records
            .iter()
            .filter(|r| r.is_income())
            .map(|r| r.amount)
            .sum();
        let expenses: Amount = records
            .iter()
            .filter(|r| r.is_expense())
            .map(|r| r.amount)
            .sum();

        Balance {
            income,
            expenses,
            balance: income - expenses,
        }
    }

    /// All records matching the query, paired with their ledger index
    pub fn search(&self, query: &SearchQuery) -> Vec<(usize, &Record)> {
        self.records
            .get_all()
            .iter()
            .enumerate()
            .filter(|(_, record)| query.matches(record))
            .collect()
    }

    /// All records in ledger order
    pub fn records(&self) -> &[Record] {
        self.records.get_all()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.count()
    }

    /// True when the ledger holds no records
    pub fn is_empty(&self) -> bool {
        self.records.count() == 0
    }

    /// Path of the ledger file
    pub fn path(&self) -> &Path {
        self.records.path()
    }

    // The ledger is already saved at this point; a lost audit line must not
    // turn the operation into a failure.
    fn write_audit(&self, audit: &AuditLogger, entry: &AuditEntry) {
        if let Err(e) = audit.log(entry) {
            log::warn!(
                "Failed to write audit entry to {}: {}",
                audit.path().display(),
                e
            );
        }
    }

    fn ledger_name(&self) -> String {
        self.records.path().display().to_string()
    }
}
