//! Report CLI commands
//!
//! Implements the read-only commands: `balance`, `search`, `list` and
//! `history`.

use std::convert::Infallible;

use clap::{Args, ValueEnum};

use crate::audit::AuditLogger;
use crate::config::{Settings, WalletPaths};
use crate::display::{format_balance, format_history, format_record_table};
use crate::error::WalletResult;
use crate::models::{Amount, Category};
use crate::services::{Finances, SearchQuery};

use super::CategoryArg;

/// Arguments for `search`
#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Only records with this category (income, expense, or any token found in the ledger)
    #[arg(long, value_parser = parse_search_category)]
    pub category: Option<Category>,
    /// Only records with this exact date
    #[arg(long)]
    pub date: Option<String>,
    /// Only records with this exact amount
    #[arg(long, allow_hyphen_values = true)]
    pub amount: Option<Amount>,
}

impl From<SearchArgs> for SearchQuery {
    fn from(args: SearchArgs) -> Self {
        SearchQuery {
            category: args.category,
            date: args.date,
            amount: args.amount,
        }
    }
}

/// Map a `--category` filter to a category
///
/// `income`/`expense` and their Cyrillic aliases name the known categories;
/// anything else matches records whose category token is exactly that string.
fn parse_search_category(raw: &str) -> Result<Category, Infallible> {
    Ok(match <CategoryArg as ValueEnum>::from_str(raw, false) {
        Ok(arg) => arg.into(),
        Err(_) => Category::from(raw.to_string()),
    })
}

/// Handle `balance`
pub fn handle_balance_command(finances: &Finances, settings: &Settings) -> WalletResult<()> {
    print!("{}", format_balance(&finances.balance(), &settings.currency_label));
    Ok(())
}

/// Handle `search`
pub fn handle_search_command(finances: &Finances, args: SearchArgs) -> WalletResult<()> {
    let query = SearchQuery::from(args);
    let results = finances.search(&query);

    if results.is_empty() {
        println!("No matching records found.");
        return Ok(());
    }

    if query.is_empty() {
        println!("All records:");
    } else {
        println!("Found records:");
    }
    println!("{}", format_record_table(results));
    Ok(())
}

/// Handle `list`
pub fn handle_list_command(finances: &Finances) -> WalletResult<()> {
    if finances.is_empty() {
        println!("Ledger is empty: {}", finances.path().display());
        return Ok(());
    }

    println!("{}", format_record_table(finances.records().iter().enumerate()));
    println!("\nTotal: {} records", finances.len());
    Ok(())
}

/// Handle `history`
pub fn handle_history_command(
    paths: &WalletPaths,
    settings: &Settings,
    limit: usize,
) -> WalletResult<()> {
    let logger = AuditLogger::new(paths.audit_log());

    if !settings.audit_enabled {
        println!(
            "Audit logging is disabled (set \"audit_enabled\": true in {}).",
            paths.settings_file().display()
        );
        if !logger.exists() {
            return Ok(());
        }
    }

    let entries = logger.read_recent(limit)?;
    print!("{}", format_history(&entries));
    Ok(())
}
