//! Report formatting utilities for terminal output

use crate::audit::AuditEntry;
use crate::services::Balance;

/// Format the balance summary, one total per line
pub fn format_balance(balance: &Balance, currency_label: &str) -> String {
    format!(
        "Income:   {}\nExpenses: {}\nBalance:  {}\n",
        balance.income.format_with_label(currency_label),
        balance.expenses.format_with_label(currency_label),
        balance.balance.format_with_label(currency_label)
    )
}

/// Format audit entries, oldest first
pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No history recorded.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
