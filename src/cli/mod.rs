//! CLI command handlers
//!
//! Each submodule defines a clap subcommand enum and the handler that runs
//! it against the library.

pub mod audit;
pub mod family;
pub mod job;
pub mod money;

pub use audit::handle_audit_command;
pub use family::{handle_family_command, ExportFormat, FamilyCommands};
pub use job::{handle_job_command, JobCommands};
pub use money::{handle_money_command, MoneyCommands};
