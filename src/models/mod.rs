//! Core data models
//!
//! The household domain: money in several currencies, jobs and their pay,
//! people with age-gated rules, and families.

pub mod family;
pub mod ids;
pub mod job;
pub mod money;
pub mod person;

pub use family::Family;
pub use ids::{FamilyId, JobId, PersonId};
pub use job::{Compensation, Job, JobValidationError, Raise, DEFAULT_ANNUAL_HOURS};
pub use money::{Currency, Money, MoneyParseError};
pub use person::{marry, Person};
