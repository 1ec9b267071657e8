//! household - currency, compensation and family domain model
//!
//! Money that converts between a fixed set of currencies, jobs paid hourly
//! or by salary, people whose jobs and marriages are gated by age, and
//! families whose household income is the sum of their members' pay.
//!
//! # Architecture
//!
//! - `models`: the domain (`Money`, `Job`, `Person`, `Family`)
//! - `error`: custom error types for the ambient layers
//! - `config`: path resolution and user settings
//! - `audit`: append-only audit log of household mutations
//! - `services`: audited family operations and roster import
//! - `export`: JSON, YAML and CSV export
//! - `display`: terminal tables
//! - `cli`: command handlers for the `household` binary
//!
//! # Example
//!
//! ```
//! use household::models::{Family, Job, Person};
//!
//! let ted = Person::new("Ted", "Neward", 45)
//!     .with_job(Job::salaried("Lecturer", 1000));
//! let charlotte = Person::new("Charlotte", "Neward", 45)
//!     .with_job(Job::hourly("Consultant", 10.0));
//! let mut family = Family::new(ted, charlotte).unwrap();
//!
//! assert!(family.have_child(Person::new("Matt", "Neward", 15)));
//! assert_eq!(family.household_income(), 21000);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;

pub use error::{HouseholdError, HouseholdResult};
