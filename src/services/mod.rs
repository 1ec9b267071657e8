//! Service layer
//!
//! Audited operations on a family and roster import on top of the models.

pub mod household;
pub mod import;

pub use household::HouseholdService;
pub use import::{FamilyRoster, ImportReport, JobRecord, PersonRecord};
