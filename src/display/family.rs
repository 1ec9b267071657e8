//! Family display formatting
//!
//! Formats families and members for terminal output in table and detail
//! views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Family, PersonId};

#[derive(Tabled)]
struct MemberRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Age")]
    age: u32,
    #[tabled(rename = "Job")]
    job: String,
    #[tabled(rename = "Income")]
    income: i64,
    #[tabled(rename = "Spouse")]
    spouse: String,
}

/// Format every member of a family as a table, followed by the household
/// income
pub fn format_family_table(family: &Family) -> String {
    let rows = family.members().iter().map(|member| MemberRow {
        id: member.id.to_string(),
        name: member.full_name(),
        age: member.age(),
        job: member
            .job()
            .map_or_else(|| "-".to_string(), |job| job.to_string()),
        income: member.job().map_or(0, |job| job.annual_income()),
        spouse: family
            .spouse_of(member.id)
            .map_or_else(|| "-".to_string(), |s| s.first_name.clone()),
    });

    let mut table = Table::new(rows);
    table.with(Style::modern());

    format!(
        "{}\nHousehold income: {}\n",
        table,
        family.household_income()
    )
}

/// Format a single member's details
pub fn format_member_details(family: &Family, id: PersonId) -> Option<String> {
    let member = family.member(id)?;

    let mut output = String::new();
    output.push_str(&format!("Person: {}\n", member.full_name()));
    output.push_str(&format!("  ID:      {}\n", member.id));
    output.push_str(&format!("  Age:     {}\n", member.age()));

    match member.job() {
        Some(job) => {
            output.push_str(&format!("  Job:     {}\n", job));
            output.push_str(&format!("  Income:  {}\n", job.annual_income()));
        }
        None => output.push_str("  Job:     (none)\n"),
    }

    match family.spouse_of(id) {
        Some(spouse) => output.push_str(&format!("  Spouse:  {}\n", spouse.full_name())),
        None => output.push_str("  Spouse:  (none)\n"),
    }

    Some(output)
}
