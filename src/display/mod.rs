//! Display formatting for terminal output

pub mod family;

pub use family::{format_family_table, format_member_details};
