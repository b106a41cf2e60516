//! Config CLI command
//!
//! Shows resolved paths and settings, and updates settings when flags are
//! given.

use std::path::PathBuf;

use clap::Args;

use crate::config::{Settings, WalletPaths};
use crate::display::separator;
use crate::error::WalletResult;

/// Arguments for `config`
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Set the default ledger file
    #[arg(long, value_name = "PATH")]
    pub ledger_file: Option<PathBuf>,
    /// Set the currency label printed after amounts
    #[arg(long, value_name = "LABEL")]
    pub currency_label: Option<String>,
    /// Turn the audit log on or off
    #[arg(long, value_name = "BOOL")]
    pub audit: Option<bool>,
}

impl ConfigArgs {
    fn has_changes(&self) -> bool {
        self.ledger_file.is_some() || self.currency_label.is_some() || self.audit.is_some()
    }
}

/// Apply requested changes, returning whether anything was modified
pub fn apply_config_changes(settings: &mut Settings, args: ConfigArgs) -> bool {
    if !args.has_changes() {
        return false;
    }

    if let Some(ledger_file) = args.ledger_file {
        settings.ledger_file = ledger_file;
    }
    if let Some(label) = args.currency_label {
        settings.currency_label = label;
    }
    if let Some(audit) = args.audit {
        settings.audit_enabled = audit;
    }
    true
}

/// Handle `config`
pub fn handle_config_command(
    paths: &WalletPaths,
    mut settings: Settings,
    args: ConfigArgs,
) -> WalletResult<()> {
    if apply_config_changes(&mut settings, args) {
        settings.save(paths)?;
        log::info!("Saved settings to {}", paths.settings_file().display());
        println!("Settings saved to {}", paths.settings_file().display());
        println!();
    }

    println!("wallet-cli configuration");
    println!("{}", separator(24));
    println!("Config directory: {}", paths.config_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Audit log:        {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Ledger file:    {}", settings.ledger_file.display());
    println!("  Currency label: {}", settings.currency_label);
    println!("  Audit enabled:  {}", settings.audit_enabled);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_changes_nothing() {
        let mut settings = Settings::default();
        assert!(!apply_config_changes(&mut settings, ConfigArgs::default()));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_flags_update_settings() {
        let mut settings = Settings::default();
        let args = ConfigArgs {
            ledger_file: Some(PathBuf::from("home.json")),
            currency_label: Some("EUR".into()),
            audit: Some(true),
        };

        assert!(apply_config_changes(&mut settings, args));
        assert_eq!(settings.ledger_file, PathBuf::from("home.json"));
        assert_eq!(settings.currency_label, "EUR");
        assert!(settings.audit_enabled);
    }
}
