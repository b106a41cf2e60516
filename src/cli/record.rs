//! Record CLI commands
//!
//! Implements `add` and `edit`, the two commands that change the ledger.

use clap::Args;

use crate::display::format_record_line;
use crate::error::WalletResult;
use crate::models::Amount;
use crate::services::Finances;

use super::CategoryArg;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,
    /// Record category
    #[arg(long, value_enum)]
    pub category: CategoryArg,
    /// Amount
    #[arg(long, allow_hyphen_values = true)]
    pub amount: Amount,
    /// Description
    #[arg(long)]
    pub description: String,
}

/// Arguments for `edit`
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Index of the record to replace (see `list`)
    #[arg(long, allow_hyphen_values = true)]
    pub index: i64,
    /// Date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,
    /// Record category
    #[arg(long, value_enum)]
    pub category: CategoryArg,
    /// Amount
    #[arg(long, allow_hyphen_values = true)]
    pub amount: Amount,
    /// Description
    #[arg(long)]
    pub description: String,
}

/// Handle `add`
pub fn handle_add_command(finances: &mut Finances, args: AddArgs) -> WalletResult<()> {
    finances.add(args.date, args.category.into(), args.amount, args.description)?;

    let index = finances.len() - 1;
    println!(
        "Added record: {}",
        format_record_line(index, &finances.records()[index])
    );
    Ok(())
}

/// Handle `edit`
///
/// An index outside the ledger (including a negative one) is reported and
/// leaves the ledger untouched; it is not an error.
pub fn handle_edit_command(finances: &mut Finances, args: EditArgs) -> WalletResult<()> {
    let index = usize::try_from(args.index).ok();
    let edited = match index {
        Some(index) => finances.edit(
            index,
            args.date,
            args.category.into(),
            args.amount,
            args.description,
        )?,
        None => false,
    };

    match index.filter(|_| edited) {
        Some(index) => println!(
            "Updated record: {}",
            format_record_line(index, &finances.records()[index])
        ),
        None => println!("No record at index {}", args.index),
    }

    Ok(())
}
