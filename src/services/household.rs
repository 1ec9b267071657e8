//! Household service
//!
//! Wraps a `Family` with member lookup by id and audit logging. The model's
//! silent-drop rules are kept: a refused job or child is not an error, it is
//! reported as `Ok(false)` and audited as a rejection.
//!
//! Entries are logged before the family changes, so an audit write error
//! leaves the family as it was.

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::error::{HouseholdError, HouseholdResult};
use crate::models::{Family, Job, Person, PersonId, Raise};

/// Service for audited household mutations
#[derive(Debug)]
pub struct HouseholdService {
    family: Family,
    logger: Option<AuditLogger>,
}

impl HouseholdService {
    /// Take charge of a family, auditing its creation when a logger is given
    pub fn new(family: Family, logger: Option<AuditLogger>) -> HouseholdResult<Self> {
        let service = Self { family, logger };

        service.log(&AuditEntry::create(
            EntityType::Family,
            service.family.id.to_string(),
            Some(family_name(&service.family)),
            &service.family,
        ))?;

        Ok(service)
    }

    pub fn family(&self) -> &Family {
        &self.family
    }

    pub fn into_family(self) -> Family {
        self.family
    }

    /// Give a member a job
    ///
    /// Returns `Ok(false)` if the member is too young to work.
    pub fn hire(&mut self, member_id: PersonId, job: Job) -> HouseholdResult<bool> {
        job.validate()
            .map_err(|e| HouseholdError::Validation(e.to_string()))?;

        let before = self.member(member_id)?.clone();
        let mut after = before.clone();
        let hired = after.set_job(job.clone());

        let entry = if hired {
            AuditEntry::update(
                EntityType::Person,
                member_id.to_string(),
                Some(after.full_name()),
                &before,
                &after,
                diff_of(&before, &after),
            )
        } else {
            AuditEntry::reject(
                EntityType::Person,
                member_id.to_string(),
                Some(before.full_name()),
                &before,
                &job,
                format!("too young to hold a job (age {})", before.age()),
            )
        };
        self.log(&entry)?;

        if hired {
            *self.member_mut(member_id)? = after;
        }
        Ok(hired)
    }

    /// Raise a member's pay and return the updated job
    pub fn raise(&mut self, member_id: PersonId, raise: Raise) -> HouseholdResult<Job> {
        let member = self.member(member_id)?;
        let name = member.full_name();
        let before = member
            .job()
            .cloned()
            .ok_or_else(|| HouseholdError::Validation(format!("{} has no job to raise", name)))?;

        let mut after = before.clone();
        after.apply_raise(raise);

        let entry = AuditEntry::update(
            EntityType::Job,
            after.id.to_string(),
            Some(format!("{} ({})", after.title, name)),
            &before,
            &after,
            diff_of(&before, &after),
        );
        self.log(&entry)?;

        if let Some(job) = self.member_mut(member_id)?.job_mut() {
            *job = after.clone();
        }
        Ok(after)
    }

    /// Add a child to the family
    ///
    /// Returns `Ok(false)` if no member is old enough to have children.
    pub fn have_child(&mut self, child: Person) -> HouseholdResult<bool> {
        let snapshot = serde_json::to_value(&child)?;

        let entry = if self.family.can_have_children() {
            AuditEntry::create(
                EntityType::Person,
                child.id.to_string(),
                Some(child.full_name()),
                &snapshot,
            )
        } else {
            AuditEntry::reject(
                EntityType::Family,
                self.family.id.to_string(),
                Some(family_name(&self.family)),
                &self.family,
                &snapshot,
                format!(
                    "no member old enough to have {} as a child",
                    child.full_name()
                ),
            )
        };
        self.log(&entry)?;

        Ok(self.family.have_child(child))
    }

    pub fn household_income(&self) -> i64 {
        self.family.household_income()
    }

    fn member(&self, id: PersonId) -> HouseholdResult<&Person> {
        self.family
            .member(id)
            .ok_or_else(|| HouseholdError::person_not_found(id.to_string()))
    }

    fn member_mut(&mut self, id: PersonId) -> HouseholdResult<&mut Person> {
        self.family
            .member_mut(id)
            .ok_or_else(|| HouseholdError::person_not_found(id.to_string()))
    }

    fn log(&self, entry: &AuditEntry) -> HouseholdResult<()> {
        match &self.logger {
            Some(logger) => logger.log(entry),
            None => Ok(()),
        }
    }
}

/// "The Newards", from the first member's last name
fn family_name(family: &Family) -> String {
    family
        .members()
        .first()
        .map(|m| format!("The {}s", m.last_name))
        .unwrap_or_else(|| "Family".to_string())
}

fn diff_of<T: serde::Serialize>(before: &T, after: &T) -> Option<String> {
    let before = serde_json::to_value(before).ok()?;
    let after = serde_json::to_value(after).ok()?;
    generate_diff(&before, &after)
}
