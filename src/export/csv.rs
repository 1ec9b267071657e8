//! CSV export
//!
//! One row per family member, spreadsheet-compatible.

use std::io::Write;

use serde::Serialize;

use crate::error::HouseholdResult;
use crate::models::{Compensation, Family};

#[derive(Serialize)]
struct MemberRow<'a> {
    id: String,
    first_name: &'a str,
    last_name: &'a str,
    age: u32,
    job_title: &'a str,
    compensation: &'static str,
    rate: String,
    annual_income: i64,
    spouse: &'a str,
}

/// Export the members of a family to CSV
pub fn export_members_csv<W: Write>(family: &Family, writer: W) -> HouseholdResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for member in family.members() {
        let job = member.job();
        let (kind, rate) = match job.map(|j| j.compensation) {
            Some(Compensation::Hourly(wage)) => ("hourly", format!("{:.2}", wage)),
            Some(Compensation::Salaried(salary)) => ("salaried", salary.to_string()),
            None => ("", String::new()),
        };

        csv_writer.serialize(MemberRow {
            id: member.id.to_string(),
            first_name: &member.first_name,
            last_name: &member.last_name,
            age: member.age(),
            job_title: job.map_or("", |j| j.title.as_str()),
            compensation: kind,
            rate,
            annual_income: job.map_or(0, |j| j.annual_income()),
            spouse: family
                .spouse_of(member.id)
                .map_or("", |s| s.first_name.as_str()),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}
