use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use wallet::cli::Commands;
use wallet::config::{Settings, WalletPaths};

#[derive(Parser)]
#[command(
    name = "wallet",
    version,
    about = "Personal finance ledger",
    long_about = "wallet records income and expense entries in a JSON ledger file \
                  and reports balances and filtered searches from the command line."
)]
struct Cli {
    /// Ledger file (defaults to the one in settings, normally finances.json)
    #[arg(short, long, global = true, env = "WALLET_LEDGER_FILE", value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let paths = WalletPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(command) => wallet::cli::run(command, &paths, settings, cli.file.as_deref())?,
        None => {
            println!("wallet - personal finance ledger");
            println!();
            println!("Run 'wallet --help' for usage information.");
        }
    }

    Ok(())
}
