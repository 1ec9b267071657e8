//! Export
//!
//! - CSV: one row per member (spreadsheet-compatible)
//! - JSON: full family with metadata (machine-readable)
//! - YAML: full family with metadata (human-readable)

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_members_csv;
pub use json::{export_family_json, FamilyExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_family_yaml;
