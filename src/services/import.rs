//! Roster import
//!
//! A roster describes a family as data: the couple, their jobs and the
//! children in birth order. Building a roster replays it through
//! `HouseholdService`, so every age rule applies exactly as it would to
//! hand-written calls, and reports what the rules dropped.
//!
//! ```yaml
//! spouses:
//!   - { first_name: Ted, last_name: Neward, age: 45, job: { title: Lecturer, salary: 1000 } }
//!   - { first_name: Charlotte, last_name: Neward, age: 45 }
//! children:
//!   - first_name: Matt
//!     last_name: Neward
//!     age: 15
//!     job: { title: Burger-Flipper, hourly: 5.5 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::household::HouseholdService;
use crate::audit::AuditLogger;
use crate::error::{HouseholdError, HouseholdResult};
use crate::models::{Compensation, Family, Job, Person};

/// A job as written in a roster: a title and exactly one of `hourly`/`salary`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<u64>,
}

impl JobRecord {
    /// Build the job this record describes
    pub fn to_job(&self) -> HouseholdResult<Job> {
        let compensation = match (self.hourly, self.salary) {
            (Some(wage), None) => Compensation::Hourly(wage),
            (None, Some(salary)) => Compensation::Salaried(salary),
            _ => {
                return Err(HouseholdError::Import(format!(
                    "job '{}' must have exactly one of 'hourly' or 'salary'",
                    self.title
                )))
            }
        };
        Ok(Job::new(self.title.clone(), compensation))
    }
}

/// A person as written in a roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<JobRecord>,
}

impl PersonRecord {
    fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    fn to_person(&self) -> Person {
        Person::new(self.first_name.clone(), self.last_name.clone(), self.age)
    }
}

/// A family described as data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyRoster {
    pub spouses: [PersonRecord; 2],
    #[serde(default)]
    pub children: Vec<PersonRecord>,
}

/// What the age rules dropped while building a roster
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Names of people whose job was dropped
    pub dropped_jobs: Vec<String>,
    /// Names of children the family could not have
    pub refused_children: Vec<String>,
}

impl ImportReport {
    /// Returns true if nothing was dropped
    pub fn is_clean(&self) -> bool {
        self.dropped_jobs.is_empty() && self.refused_children.is_empty()
    }
}

impl FamilyRoster {
    /// Parse a roster from JSON
    pub fn from_json(s: &str) -> HouseholdResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| HouseholdError::Import(format!("Invalid roster: {}", e)))
    }

    /// Parse a roster from YAML
    pub fn from_yaml(s: &str) -> HouseholdResult<Self> {
        serde_yaml::from_str(s)
            .map_err(|e| HouseholdError::Import(format!("Invalid roster: {}", e)))
    }

    /// Load a roster file, picking the format from its extension
    /// (`.json`, `.yaml` or `.yml`)
    pub fn load(path: &Path) -> HouseholdResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            HouseholdError::Io(format!("Failed to read roster {}: {}", path.display(), e))
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&contents),
            Some("yaml") | Some("yml") => Self::from_yaml(&contents),
            _ => Err(HouseholdError::Import(format!(
                "Unsupported roster format: {}",
                path.display()
            ))),
        }
    }

    /// Build the family
    ///
    /// The couple is married, then each spouse is hired, then children are
    /// offered in order and hired once they are members. Malformed jobs fail
    /// the whole import; age-rule drops are collected in the report.
    pub fn build(
        &self,
        logger: Option<AuditLogger>,
    ) -> HouseholdResult<(HouseholdService, ImportReport)> {
        let jobs = self
            .spouses
            .iter()
            .chain(&self.children)
            .map(|record| record.job.as_ref().map(JobRecord::to_job).transpose())
            .collect::<HouseholdResult<Vec<_>>>()?;
        let (spouse_jobs, child_jobs) = jobs.split_at(2);

        let [first, second] = &self.spouses;
        let family = Family::new(first.to_person(), second.to_person())
            .ok_or_else(|| {
                HouseholdError::Import("roster spouses are married to someone else".into())
            })?;
        let spouse_ids: Vec<_> = family.members().iter().map(|m| m.id).collect();

        let mut service = HouseholdService::new(family, logger)?;
        let mut report = ImportReport::default();

        let spouses = spouse_ids.into_iter().zip(&self.spouses);
        for ((id, record), job) in spouses.zip(spouse_jobs) {
            if let Some(job) = job {
                if !service.hire(id, job.clone())? {
                    report.dropped_jobs.push(record.full_name());
                }
            }
        }

        for (record, job) in self.children.iter().zip(child_jobs) {
            let child = record.to_person();
            let child_id = child.id;

            if !service.have_child(child)? {
                report.refused_children.push(record.full_name());
                continue;
            }

            if let Some(job) = job {
                if !service.hire(child_id, job.clone())? {
                    report.dropped_jobs.push(record.full_name());
                }
            }
        }

        Ok((service, report))
    }
}
