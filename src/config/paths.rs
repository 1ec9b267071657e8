//! Path management
//!
//! ## Path Resolution Order
//!
//! 1. `HOUSEHOLD_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory from `directories`
//!    (`~/.config/household` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::HouseholdError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "HOUSEHOLD_DATA_DIR";

/// Manages all paths used by the household CLI
#[derive(Debug, Clone)]
pub struct HouseholdPaths {
    base_dir: PathBuf,
}

impl HouseholdPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override is not set.
    pub fn new() -> Result<Self, HouseholdError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => ProjectDirs::from("", "", "household")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    HouseholdError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), HouseholdError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| HouseholdError::Io(format!("Failed to create base directory: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HouseholdPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("household");
        let paths = HouseholdPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();
        assert!(base.is_dir());
    }
}
