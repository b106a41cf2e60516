//! Record display formatting
//!
//! Renders ledger records as a table with their positional index, which is
//! the handle `edit` takes.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Record;

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl RecordRow {
    fn new(index: usize, record: &Record) -> Self {
        Self {
            index,
            date: record.date.clone(),
            category: record.category.to_string(),
            amount: record.amount.to_string(),
            description: record.description.clone(),
        }
    }
}

/// Format indexed records as a table
pub fn format_record_table<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = (usize, &'a Record)>,
{
    let rows: Vec<RecordRow> = records
        .into_iter()
        .map(|(index, record)| RecordRow::new(index, record))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Format a single record on one line
pub fn format_record_line(index: usize, record: &Record) -> String {
    format!(
        "#{} {} {} {} {}",
        index, record.date, record.category, record.amount, record.description
    )
}
