//! User settings for the ledger
//!
//! Stored as `config.json` in the base directory. Every field has a serde
//! default so older or hand-edited files keep loading.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;

/// Name of the unallocated-funds envelope unless configured otherwise
pub const DEFAULT_POOL_ENVELOPE: &str = "Income Pool";

/// Whether spending and transfer sources may go below zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverdraftPolicy {
    /// Reject any movement that would leave a source negative
    #[default]
    Reject,
    /// Let balances go negative
    Allow,
}

impl OverdraftPolicy {
    pub fn allows_negative(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Envelope that holds unallocated money
    #[serde(default = "default_pool_envelope")]
    pub pool_envelope: String,

    #[serde(default)]
    pub overdraft_policy: OverdraftPolicy,

    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for display (strftime)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_pool_envelope() -> String {
    DEFAULT_POOL_ENVELOPE.to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            pool_envelope: default_pool_envelope(),
            overdraft_policy: OverdraftPolicy::default(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the ledger cannot work with
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.pool_envelope.trim().is_empty() {
            return Err(LedgerError::Config(
                "pool_envelope must not be empty".into(),
            ));
        }

        // Time fields such as %H cannot be rendered for a calendar date
        let mut sample = String::new();
        write!(sample, "{}", NaiveDate::MIN.format(&self.date_format)).map_err(|_| {
            LedgerError::Config(format!(
                "date_format '{}' cannot format a date",
                self.date_format
            ))
        })?;

        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.pool_envelope, "Income Pool");
        assert_eq!(settings.overdraft_policy, OverdraftPolicy::Reject);
        assert!(!settings.overdraft_policy.allows_negative());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            overdraft_policy: OverdraftPolicy::Allow,
            pool_envelope: "To Be Budgeted".into(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.overdraft_policy, OverdraftPolicy::Allow);
        assert_eq!(loaded.pool_envelope, "To Be Budgeted");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"overdraft_policy":"allow"}"#).unwrap();
        assert_eq!(settings.pool_envelope, DEFAULT_POOL_ENVELOPE);
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.overdraft_policy.allows_negative());
    }

    #[test]
    fn test_time_date_format_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format":"%Y-%m-%d %H:%M"}"#).unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(LedgerError::Config(_))
        ));
    }

    #[test]
    fn test_date_only_formats_accepted() {
        for format in ["%Y-%m-%d", "%d/%m/%Y", "%b %e, %Y", ""] {
            let settings = Settings {
                date_format: format.into(),
                ..Settings::default()
            };
            assert!(settings.validate().is_ok(), "{format}");
        }
    }

    #[test]
    fn test_empty_pool_name_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"pool_envelope":"  "}"#).unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(LedgerError::Config(_))
        ));
    }
}
