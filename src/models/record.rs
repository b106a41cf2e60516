//! Ledger record model
//!
//! A record is one income or expense entry. Records carry no identifier of
//! their own; their position in the ledger is their index.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;

/// On-disk token for income records
pub const INCOME_TOKEN: &str = "доход";

/// On-disk token for expense records
pub const EXPENSE_TOKEN: &str = "расход";

/// Classification of a record
///
/// Serialized as the Cyrillic tokens used by existing ledger files. Any other
/// string is kept verbatim as `Unknown` so that it survives a load/save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Income,
    Expense,
    Unknown(String),
}

impl Category {
    /// The token written to the ledger file
    pub fn token(&self) -> &str {
        match self {
            Category::Income => INCOME_TOKEN,
            Category::Expense => EXPENSE_TOKEN,
            Category::Unknown(raw) => raw,
        }
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            INCOME_TOKEN => Category::Income,
            EXPENSE_TOKEN => Category::Expense,
            _ => Category::Unknown(raw),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Unknown(raw) => raw,
            known => known.token().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Income => write!(f, "income"),
            Category::Expense => write!(f, "expense"),
            Category::Unknown(raw) => write!(f, "{}", raw),
        }
    }
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Entry date, conventionally `YYYY-MM-DD` (not validated)
    pub date: String,

    /// Income or expense
    pub category: Category,

    /// Entry amount
    pub amount: Amount,

    /// Free-form description
    pub description: String,
}

impl Record {
    /// Create a new record
    pub fn new(
        date: impl Into<String>,
        category: Category,
        amount: impl Into<Amount>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category,
            amount: amount.into(),
            description: description.into(),
        }
    }

    /// Check if this record is income
    pub fn is_income(&self) -> bool {
        self.category == Category::Income
    }

    /// Check if this record is an expense
    pub fn is_expense(&self) -> bool {
        self.category == Category::Expense
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date, self.category, self.amount, self.description
        )
    }
}
