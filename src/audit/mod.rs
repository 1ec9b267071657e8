//! Audit logging
//!
//! Records every household mutation, including the ones dropped by an age
//! rule, in an append-only audit log.
//!
//! - `AuditEntry`: one operation with timestamp, entity information and
//!   optional before/after snapshots.
//! - `AuditLogger`: writes entries to the log file as JSON lines.
//! - `generate_diff`: summarizes the change between two snapshots.
//!
//! # Example
//!
//! ```rust,ignore
//! use household::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::create(
//!     EntityType::Person,
//!     person.id.to_string(),
//!     Some(person.full_name()),
//!     &person,
//! );
//! logger.log(&entry)?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
