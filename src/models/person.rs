//! Person model
//!
//! A person may hold a job and may be married. Both are gated by age:
//! assignments that break the age rules are silently dropped, leaving the
//! person unchanged. Dropping is not an error; gated setters return `false`
//! so callers that care can tell.
//!
//! The spouse relation is stored as a `PersonId` on both sides and is always
//! symmetric. Link two people with [`marry`].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::PersonId;
use super::job::Job;

/// Youngest age at which a person may hold a job
pub const MINIMUM_WORKING_AGE: u32 = 16;

/// Youngest age at which a person may be married
pub const MINIMUM_MARRIAGE_AGE: u32 = 21;

/// A person
///
/// Deserialized people go through the same age rules as constructed ones: a
/// stored job or spouse the person is too young for is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredPerson")]
pub struct Person {
    /// Unique identifier
    pub id: PersonId,

    pub first_name: String,

    pub last_name: String,

    /// Age in years, fixed at construction
    age: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    job: Option<Job>,

    #[serde(skip_serializing_if = "Option::is_none")]
    spouse: Option<PersonId>,
}

/// A person as read from storage, before the age rules are applied
#[derive(Deserialize)]
struct StoredPerson {
    id: PersonId,
    first_name: String,
    last_name: String,
    age: u32,
    #[serde(default)]
    job: Option<Job>,
    #[serde(default)]
    spouse: Option<PersonId>,
}

impl From<StoredPerson> for Person {
    fn from(stored: StoredPerson) -> Self {
        let mut person = Person {
            id: stored.id,
            first_name: stored.first_name,
            last_name: stored.last_name,
            age: stored.age,
            job: None,
            spouse: None,
        };

        if let Some(job) = stored.job {
            person.set_job(job);
        }

        if let Some(spouse) = stored.spouse {
            if person.can_marry() && spouse != person.id {
                person.spouse = Some(spouse);
            } else {
                tracing::warn!(
                    person = %person.id,
                    age = person.age,
                    "stored spouse link not allowed, link dropped"
                );
            }
        }

        person
    }
}

impl Person {
    /// Create a person with no job and no spouse
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: u32) -> Self {
        Self {
            id: PersonId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            job: None,
            spouse: None,
        }
    }

    /// Builder form of [`Person::set_job`]; the job is dropped if the person
    /// is too young to work
    pub fn with_job(mut self, job: Job) -> Self {
        self.set_job(job);
        self
    }

    /// Builder form of [`marry`]; the link is dropped if either person is
    /// too young or already married to someone else
    pub fn married_to(mut self, spouse: &mut Person) -> Self {
        marry(&mut self, spouse);
        self
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns true if this person is old enough to hold a job
    pub fn can_work(&self) -> bool {
        self.age >= MINIMUM_WORKING_AGE
    }

    /// Returns true if this person is old enough to be married
    pub fn can_marry(&self) -> bool {
        self.age >= MINIMUM_MARRIAGE_AGE
    }

    pub fn job(&self) -> Option<&Job> {
        self.job.as_ref()
    }

    /// Mutable access to the current job, e.g. to give a raise
    pub fn job_mut(&mut self) -> Option<&mut Job> {
        self.job.as_mut()
    }

    /// Assign a job
    ///
    /// Silent drop: if the person is under `MINIMUM_WORKING_AGE` the job is
    /// discarded, any current job is kept, and `false` is returned.
    pub fn set_job(&mut self, job: Job) -> bool {
        if !self.can_work() {
            tracing::warn!(
                person = %self.id,
                age = self.age,
                job = %job.title,
                "too young to hold a job, assignment dropped"
            );
            return false;
        }

        self.job = Some(job);
        true
    }

    /// Remove and return the current job
    pub fn clear_job(&mut self) -> Option<Job> {
        self.job.take()
    }

    /// The spouse's identifier, if married
    pub fn spouse(&self) -> Option<PersonId> {
        self.spouse
    }

    pub fn is_married(&self) -> bool {
        self.spouse.is_some()
    }

    /// Drop this side of the spouse link only
    pub(super) fn forget_spouse(&mut self) {
        self.spouse = None;
    }

    /// Diagnostic description
    ///
    /// `spouse` is the person this one is married to, looked up by the
    /// caller. Its first name is shown only if it really is this person's
    /// spouse; otherwise the spouse shows as `nil`.
    pub fn describe(&self, spouse: Option<&Person>) -> String {
        let spouse = spouse.filter(|s| self.spouse == Some(s.id));

        format!(
            "[Person: firstName: {} lastName: {} age: {} job: {} spouse: {}]",
            self.first_name,
            self.last_name,
            self.age,
            self.job.as_ref().map_or("nil", |j| j.title.as_str()),
            spouse.map_or("nil", |s| s.first_name.as_str()),
        )
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (age {})",
            self.first_name, self.last_name, self.age
        )
    }
}

/// Marry two people
///
/// Links both sides symmetrically and returns `true`. Silent drop (returns
/// `false`, nobody changes) if either person is under
/// `MINIMUM_MARRIAGE_AGE`, if both are the same person, or if either is
/// already married to someone else. Marrying one's current spouse is a
/// no-op that returns `true`.
pub fn marry(a: &mut Person, b: &mut Person) -> bool {
    if a.id == b.id {
        tracing::warn!(person = %a.id, "cannot marry oneself, link dropped");
        return false;
    }

    if a.spouse == Some(b.id) && b.spouse == Some(a.id) {
        return true;
    }

    if !a.can_marry() || !b.can_marry() {
        tracing::warn!(
            first = %a.id,
            first_age = a.age,
            second = %b.id,
            second_age = b.age,
            "too young to marry, link dropped"
        );
        return false;
    }

    if a.spouse.is_some() || b.spouse.is_some() {
        tracing::warn!(
            first = %a.id,
            second = %b.id,
            "already married, link dropped"
        );
        return false;
    }

    a.spouse = Some(b.id);
    b.spouse = Some(a.id);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_person() {
        let person = Person::new("Ted", "Neward", 45);
        assert_eq!(person.first_name, "Ted");
        assert_eq!(person.last_name, "Neward");
        assert_eq!(person.age(), 45);
        assert!(person.job().is_none());
        assert!(person.spouse().is_none());
        assert_eq!(person.full_name(), "Ted Neward");
    }

    #[test]
    fn test_job_assignment() {
        let mut person = Person::new("Ted", "Neward", 45);
        assert!(person.set_job(Job::salaried("Gues Lecturer", 1000)));
        assert_eq!(person.job().unwrap().title, "Gues Lecturer");
    }

    #[test]
    fn test_too_young_for_job() {
        let mut person = Person::new("Matt", "Neward", 15);
        assert!(!person.set_job(Job::hourly("Burger-Flipper", 5.5)));
        assert!(person.job().is_none());

        let person = Person::new("Matt", "Neward", 15)
            .with_job(Job::hourly("Burger-Flipper", 5.5));
        assert!(person.job().is_none());
    }

    #[test]
    fn test_working_age_boundary() {
        let mut person = Person::new("Sam", "Lee", MINIMUM_WORKING_AGE);
        assert!(person.set_job(Job::hourly("Cashier", 12.0)));
    }

    #[test]
    fn test_clear_job() {
        let mut person = Person::new("Ann", "Lee", 30)
            .with_job(Job::hourly("Cook", 14.0));
        let old = person.clear_job();
        assert_eq!(old.map(|j| j.title), Some("Cook".to_string()));
        assert!(person.job().is_none());
    }

    #[test]
    fn test_job_mut_raise() {
        let mut person = Person::new("Ann", "Lee", 30)
            .with_job(Job::hourly("Cook", 20.0));
        person.job_mut().unwrap().raise_by_amount(2.0);
        assert_eq!(person.job().unwrap().wage(), Some(22.0));
    }

    #[test]
    fn test_marry_is_symmetric() {
        let mut ted = Person::new("Ted", "Neward", 45);
        let mut charlotte = Person::new("Charlotte", "Neward", 45);

        assert!(marry(&mut ted, &mut charlotte));
        assert_eq!(ted.spouse(), Some(charlotte.id));
        assert_eq!(charlotte.spouse(), Some(ted.id));

        // Already linked to each other
        assert!(marry(&mut charlotte, &mut ted));
    }

    #[test]
    fn test_too_young_to_marry() {
        let mut minor = Person::new("Matt", "Neward", 17);
        let mut adult = Person::new("Jane", "Doe", 30);

        assert!(!marry(&mut minor, &mut adult));
        assert!(minor.spouse().is_none());
        assert!(adult.spouse().is_none());

        let mut adult = Person::new("Jane", "Doe", 30);
        let minor = Person::new("Matt", "Neward", 17).married_to(&mut adult);
        assert!(minor.spouse().is_none());
        assert!(adult.spouse().is_none());
    }

    #[test]
    fn test_marriage_age_boundary() {
        let mut a = Person::new("A", "X", MINIMUM_MARRIAGE_AGE);
        let mut b = Person::new("B", "Y", MINIMUM_MARRIAGE_AGE);
        assert!(marry(&mut a, &mut b));
    }

    #[test]
    fn test_already_married_to_someone_else() {
        let mut a = Person::new("A", "X", 30);
        let mut b = Person::new("B", "X", 30);
        let mut c = Person::new("C", "Y", 30);

        assert!(marry(&mut a, &mut b));
        assert!(!marry(&mut a, &mut c));
        assert_eq!(a.spouse(), Some(b.id));
        assert!(c.spouse().is_none());
    }

    #[test]
    fn test_married_to_builder() {
        let mut charlotte = Person::new("Charlotte", "Neward", 45);
        let ted = Person::new("Ted", "Neward", 45).married_to(&mut charlotte);
        assert_eq!(ted.spouse(), Some(charlotte.id));
        assert_eq!(charlotte.spouse(), Some(ted.id));
    }

    #[test]
    fn test_describe() {
        let mut ted = Person::new("Ted", "Neward", 45);
        assert_eq!(
            ted.describe(None),
            "[Person: firstName: Ted lastName: Neward age: 45 job: nil spouse: nil]"
        );

        let mut charlotte = Person::new("Charlotte", "Neward", 45);
        marry(&mut ted, &mut charlotte);
        ted.set_job(Job::salaried("Gues Lecturer", 1000));
        assert_eq!(
            ted.describe(Some(&charlotte)),
            "[Person: firstName: Ted lastName: Neward age: 45 job: Gues Lecturer spouse: Charlotte]"
        );
    }

    #[test]
    fn test_describe_ignores_non_spouse() {
        let ted = Person::new("Ted", "Neward", 45);
        let stranger = Person::new("Stranger", "Danger", 40);

        assert!(ted.describe(Some(&stranger)).ends_with("spouse: nil]"));
    }

    #[test]
    fn test_display() {
        let person = Person::new("Ted", "Neward", 45);
        assert_eq!(person.to_string(), "Ted Neward (age 45)");
    }

    #[test]
    fn test_serialization() {
        let person = Person::new("Ted", "Neward", 45)
            .with_job(Job::salaried("Lecturer", 1000));
        let json = serde_json::to_string(&person).unwrap();
        assert!(!json.contains("spouse"));

        let deserialized: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(person, deserialized);
    }

    #[test]
    fn test_deserialize_applies_age_rules() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "first_name": "Matt",
            "last_name": "Neward",
            "age": 10,
            "job": {
                "id": "650e8400-e29b-41d4-a716-446655440000",
                "title": "Miner",
                "compensation": {"hourly": 5.0}
            },
            "spouse": "750e8400-e29b-41d4-a716-446655440000"
        }"#;

        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.age(), 10);
        assert!(person.job().is_none());
        assert!(person.spouse().is_none());
    }

    #[test]
    fn test_deserialize_keeps_adult_links() {
        let mut ted = Person::new("Ted", "Neward", 45)
            .with_job(Job::hourly("Cook", 12.0));
        let mut charlotte = Person::new("Charlotte", "Neward", 45);
        marry(&mut ted, &mut charlotte);

        let json = serde_json::to_string(&ted).unwrap();
        let restored: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.spouse(), Some(charlotte.id));
        assert_eq!(restored.job().unwrap().title, "Cook");
    }
}
