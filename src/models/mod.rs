//! Core data models for wallet-cli
//!
//! Records, their category, and the amount type stored in the ledger file.

pub mod amount;
pub mod record;

pub use amount::{Amount, AmountParseError};
pub use record::{Category, Record};
