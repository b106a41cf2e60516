//! Path management for wallet-cli
//!
//! ## Path Resolution Order
//!
//! 1. `WALLET_CLI_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (e.g. `~/.config/wallet-cli` on Linux)
//!
//! The ledger file itself is not resolved here; see
//! [`Settings::ledger_path`](super::settings::Settings::ledger_path).

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::WalletError;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "WALLET_CLI_CONFIG_DIR";

/// Manages the configuration paths used by wallet-cli
#[derive(Debug, Clone)]
pub struct WalletPaths {
    config_dir: PathBuf,
}

impl WalletPaths {
    /// Create a new WalletPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, WalletError> {
        let config_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "wallet-cli")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    WalletError::Config("Could not determine a configuration directory".into())
                })?,
        };

        Ok(Self { config_dir })
    }

    /// Create WalletPaths with a custom config directory (useful for testing)
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Get the config directory
    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.config_dir.join("audit.log")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), WalletError> {
        std::fs::create_dir_all(&self.config_dir)
            .map_err(|e| WalletError::Io(format!("Failed to create config directory: {}", e)))
    }
}
