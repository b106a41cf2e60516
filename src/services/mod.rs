//! Service layer for wallet-cli
//!
//! Business logic on top of the storage layer: appending and replacing
//! records, balance totals and filtered search.

pub mod finances;

pub use finances::{Balance, Finances, SearchQuery};
