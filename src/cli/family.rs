//! Family CLI commands
//!
//! Families are described by roster files (JSON or YAML) and rebuilt on
//! every run.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};

use crate::audit::AuditLogger;
use crate::config::{paths::HouseholdPaths, settings::Settings};
use crate::display::{format_family_table, format_member_details};
use crate::error::{HouseholdError, HouseholdResult};
use crate::export::{export_family_json, export_family_yaml, export_members_csv};
use crate::services::{FamilyRoster, HouseholdService, ImportReport};

/// Export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

/// Family subcommands
#[derive(Subcommand)]
pub enum FamilyCommands {
    /// Build a family from a roster and show its members
    Show {
        /// Roster file (.json, .yaml or .yml)
        roster: PathBuf,

        /// Also show each member's details
        #[arg(short, long)]
        details: bool,
    },

    /// Build a family from a roster and export it
    Export {
        /// Roster file (.json, .yaml or .yml)
        roster: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a family command
pub fn handle_family_command(
    paths: &HouseholdPaths,
    settings: &Settings,
    cmd: FamilyCommands,
) -> HouseholdResult<()> {
    match cmd {
        FamilyCommands::Show { roster, details } => {
            let (service, report) = build_family(paths, settings, &roster)?;
            let family = service.family();

            print!("{}", format_family_table(family));

            if details {
                for member in family.members() {
                    if let Some(text) = format_member_details(family, member.id) {
                        println!();
                        print!("{}", text);
                    }
                }
            }

            print_report(&report);
        }

        FamilyCommands::Export {
            roster,
            format,
            output,
        } => {
            let (service, report) = build_family(paths, settings, &roster)?;
            let family = service.family();

            let mut writer: Box<dyn Write> = match &output {
                Some(path) => Box::new(File::create(path).map_err(|e| {
                    HouseholdError::Export(format!("Failed to create {}: {}", path.display(), e))
                })?),
                None => Box::new(io::stdout().lock()),
            };

            match format {
                ExportFormat::Json => export_family_json(family, &mut writer)?,
                ExportFormat::Yaml => export_family_yaml(family, &mut writer)?,
                ExportFormat::Csv => export_members_csv(family, &mut writer)?,
            }
            writer.flush()?;

            if let Some(path) = output {
                println!("Exported {} members to {}", family.len(), path.display());
                print_report(&report);
            }
        }
    }

    Ok(())
}

fn build_family(
    paths: &HouseholdPaths,
    settings: &Settings,
    roster: &Path,
) -> HouseholdResult<(HouseholdService, ImportReport)> {
    let logger = if settings.audit_enabled {
        paths.ensure_directories()?;
        Some(AuditLogger::new(paths.audit_log()))
    } else {
        None
    };

    FamilyRoster::load(roster)?.build(logger)
}

fn print_report(report: &ImportReport) {
    for name in &report.dropped_jobs {
        println!("Note: {} is too young to hold a job; job dropped", name);
    }
    for name in &report.refused_children {
        println!("Note: no member old enough to have {}; child dropped", name);
    }
}
