//! User settings for wallet-cli
//!
//! Manages the default ledger location, the currency label used in reports,
//! and whether ledger changes are written to the audit log.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::paths::WalletPaths;
use crate::error::WalletError;
use crate::storage::{read_json, write_json_atomic};

/// User settings for wallet-cli
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Ledger file used when no `--file` is given (relative to the working directory)
    #[serde(default = "default_ledger_file")]
    pub ledger_file: PathBuf,

    /// Label printed after amounts in reports
    #[serde(default = "default_currency_label")]
    pub currency_label: String,

    /// Whether ledger changes are appended to the audit log
    #[serde(default)]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_ledger_file() -> PathBuf {
    PathBuf::from("finances.json")
}

fn default_currency_label() -> String {
    "руб.".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            ledger_file: default_ledger_file(),
            currency_label: default_currency_label(),
            audit_enabled: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &WalletPaths) -> Result<Self, WalletError> {
        // A missing file yields defaults; don't save yet - let caller decide when to persist
        read_json(paths.settings_file())
            .map_err(|e| WalletError::Config(format!("Failed to load settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WalletPaths) -> Result<(), WalletError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Resolve the ledger file, preferring an explicit override
    pub fn ledger_path(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.ledger_file.clone())
    }
}
