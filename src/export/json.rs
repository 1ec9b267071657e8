//! JSON export
//!
//! Exports a family with metadata in a machine-readable format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{HouseholdError, HouseholdResult};
use crate::models::Family;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// A family export with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyExport {
    pub schema_version: u32,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    /// Combined annual income at export time
    pub household_income: i64,
    pub family: Family,
}

impl FamilyExport {
    /// Snapshot a family
    pub fn from_family(family: &Family) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            household_income: family.household_income(),
            family: family.clone(),
        }
    }
}

/// Export a family as pretty-printed JSON
pub fn export_family_json<W: Write>(family: &Family, writer: &mut W) -> HouseholdResult<()> {
    let export = FamilyExport::from_family(family);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| HouseholdError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| HouseholdError::Export(e.to_string()))?;

    Ok(())
}
