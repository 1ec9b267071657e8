//! Audit log CLI command

use crate::audit::AuditLogger;
use crate::config::paths::HouseholdPaths;
use crate::error::HouseholdResult;

/// Show the most recent audit entries
pub fn handle_audit_command(paths: &HouseholdPaths, count: usize) -> HouseholdResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(count)?;

    if entries.is_empty() {
        println!("No audit entries found.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
