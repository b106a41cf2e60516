//! wallet-cli - personal finance ledger
//!
//! Records income and expense entries in a single JSON array file and
//! provides adding, editing, balance totals and filtered search over them.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Record, category and amount types
//! - `storage`: JSON file storage layer
//! - `services`: Ledger operations
//! - `audit`: Audit logging of ledger changes
//! - `display`: Terminal formatting
//! - `cli`: Command definitions and handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use wallet::models::Category;
//! use wallet::services::{Finances, SearchQuery};
//!
//! # fn main() -> Result<(), wallet::WalletError> {
//! let mut finances = Finances::open("finances.json")?;
//! finances.add("2024-04-01", Category::Income, 5000.0, "Salary")?;
//! let balance = finances.balance();
//! let income = finances.search(&SearchQuery::new().category(Category::Income));
//! # let _ = (balance, income);
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{WalletError, WalletResult};
