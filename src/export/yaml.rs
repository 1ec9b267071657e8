//! YAML export
//!
//! Exports a family to YAML for human reading.

use std::io::Write;

use crate::error::{HouseholdError, HouseholdResult};
use crate::export::json::FamilyExport;
use crate::models::Family;

/// Export a family as YAML with a comment header
pub fn export_family_yaml<W: Write>(family: &Family, writer: &mut W) -> HouseholdResult<()> {
    let export = FamilyExport::from_family(family);

    let header = format!(
        "# Household export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| HouseholdError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export)
        .map_err(|e| HouseholdError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Job, Person};

    #[test]
    fn test_yaml_export() {
        let mut family = Family::new(
            Person::new("Ted", "Neward", 45),
            Person::new("Charlotte", "Neward", 45),
        )
        .unwrap();
        let charlotte_id = family.members()[1].id;
        family
            .member_mut(charlotte_id)
            .unwrap()
            .set_job(Job::hourly("Consultant", 10.0));

        let mut output = Vec::new();
        export_family_yaml(&family, &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# Household export"));
        assert!(yaml.contains("household_income: 20000"));
        assert!(yaml.contains("first_name: Charlotte"));

        let export: FamilyExport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(export.family.len(), 2);
        assert_eq!(export.family.members()[1].job().unwrap().wage(), Some(10.0));
    }
}
