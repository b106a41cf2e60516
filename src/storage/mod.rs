//! Storage layer for wallet-cli
//!
//! The whole ledger lives in one JSON array file. It is created lazily,
//! loaded in full and rewritten in full on every change.

pub mod file_io;
pub mod records;

pub use file_io::{ensure_exists, load_records, read_json, save_records, write_json_atomic};
pub use records::RecordRepository;
