//! Display formatting for terminal output

pub mod record;
pub mod report;

pub use record::{format_record_line, format_record_table};
pub use report::{format_balance, format_history, separator};
