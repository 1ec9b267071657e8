//! Configuration
//!
//! - Path resolution for the settings file and audit log
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::HouseholdPaths;
pub use settings::Settings;
