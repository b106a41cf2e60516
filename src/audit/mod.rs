//! Audit trail for ledger changes
//!
//! Every appended or replaced record can be recorded with its before/after
//! values in an append-only, line-delimited JSON log.
//!
//! # Example
//!
//! ```rust,ignore
//! use wallet::audit::{AuditEntry, AuditLogger, generate_diff};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! logger.log(&AuditEntry::create("finances.json", 0, &record))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
