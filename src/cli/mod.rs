//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer. [`run`] maps each
//! [`Commands`] variant to its handler.

pub mod config;
pub mod record;
pub mod report;

use std::path::Path;

use clap::{Subcommand, ValueEnum};

use crate::audit::AuditLogger;
use crate::config::{Settings, WalletPaths};
use crate::error::WalletResult;
use crate::models::Category;
use crate::services::Finances;

pub use config::{handle_config_command, ConfigArgs};
pub use record::{handle_add_command, handle_edit_command, AddArgs, EditArgs};
pub use report::{
    handle_balance_command, handle_history_command, handle_list_command, handle_search_command,
    SearchArgs,
};

/// Category as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    #[value(alias = "доход")]
    Income,
    #[value(alias = "расход")]
    Expense,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Income => Category::Income,
            CategoryArg::Expense => Category::Expense,
        }
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new record
    Add(AddArgs),

    /// Replace an existing record
    Edit(EditArgs),

    /// Show income, expenses and balance
    Balance,

    /// Search records by category, date or amount
    Search(SearchArgs),

    /// List every record with its index
    #[command(alias = "ls")]
    List,

    /// Show recent ledger changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show or change configuration
    Config(ConfigArgs),
}

/// Open the ledger, attaching the audit log when enabled
pub fn open_finances(
    paths: &WalletPaths,
    settings: &Settings,
    ledger_override: Option<&Path>,
) -> WalletResult<Finances> {
    let ledger = settings.ledger_path(ledger_override);
    let finances = Finances::open(ledger)?;

    if settings.audit_enabled {
        Ok(finances.with_audit(AuditLogger::new(paths.audit_log())))
    } else {
        Ok(finances)
    }
}

/// Run a single command
pub fn run(
    command: Commands,
    paths: &WalletPaths,
    settings: Settings,
    ledger_override: Option<&Path>,
) -> WalletResult<()> {
    match command {
        Commands::Add(args) => {
            let mut finances = open_finances(paths, &settings, ledger_override)?;
            handle_add_command(&mut finances, args)
        }
        Commands::Edit(args) => {
            let mut finances = open_finances(paths, &settings, ledger_override)?;
            handle_edit_command(&mut finances, args)
        }
        Commands::Balance => {
            let finances = open_finances(paths, &settings, ledger_override)?;
            handle_balance_command(&finances, &settings)
        }
        Commands::Search(args) => {
            let finances = open_finances(paths, &settings, ledger_override)?;
            handle_search_command(&finances, args)
        }
        Commands::List => {
            let finances = open_finances(paths, &settings, ledger_override)?;
            handle_list_command(&finances)
        }
        Commands::History { limit } => handle_history_command(paths, &settings, limit),
        Commands::Config(args) => handle_config_command(paths, settings, args),
    }
}
