//! User settings
//!
//! Defaults used by the command line: which currency a bare amount is in,
//! how many hours make a working year, and whether mutations are audited.

use serde::{Deserialize, Serialize};

use super::paths::HouseholdPaths;
use crate::error::HouseholdError;
use crate::models::{Currency, DEFAULT_ANNUAL_HOURS};

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency assumed for amounts given without a code
    #[serde(default)]
    pub default_currency: Currency,

    /// Hours used by `job income` when none are given
    #[serde(default = "default_annual_hours")]
    pub annual_hours: i64,

    /// Whether household mutations are written to the audit log
    #[serde(default)]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_annual_hours() -> i64 {
    DEFAULT_ANNUAL_HOURS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_currency: Currency::default(),
            annual_hours: default_annual_hours(),
            audit_enabled: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &HouseholdPaths) -> Result<Self, HouseholdError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| HouseholdError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| HouseholdError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &HouseholdPaths) -> Result<(), HouseholdError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| HouseholdError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| HouseholdError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
