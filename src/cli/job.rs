//! Job CLI commands
//!
//! Income and raise calculations for a single job described on the command
//! line.

use clap::{Args, Subcommand};

use crate::config::settings::Settings;
use crate::error::{HouseholdError, HouseholdResult};
use crate::models::{Job, Raise};

/// How the job is paid; exactly one of `--hourly` or `--salary`
#[derive(Args)]
pub struct PayArgs {
    /// Hourly wage
    #[arg(long, conflicts_with = "salary", required_unless_present = "salary")]
    pub hourly: Option<f64>,

    /// Annual salary
    #[arg(long)]
    pub salary: Option<u64>,

    /// Job title
    #[arg(short, long, default_value = "Job")]
    pub title: String,
}

impl PayArgs {
    fn to_job(&self) -> HouseholdResult<Job> {
        let job = match (self.hourly, self.salary) {
            (Some(wage), _) => Job::hourly(self.title.clone(), wage),
            (None, Some(salary)) => Job::salaried(self.title.clone(), salary),
            (None, None) => {
                return Err(HouseholdError::Validation(
                    "one of --hourly or --salary is required".into(),
                ))
            }
        };

        job.validate()
            .map_err(|e| HouseholdError::Validation(e.to_string()))?;
        Ok(job)
    }
}

/// Job subcommands
#[derive(Subcommand)]
pub enum JobCommands {
    /// Calculate income for a number of hours
    Income {
        #[command(flatten)]
        pay: PayArgs,

        /// Hours worked (defaults to the configured working year)
        #[arg(long)]
        hours: Option<i64>,
    },

    /// Apply a raise and show the new pay
    Raise {
        #[command(flatten)]
        pay: PayArgs,

        /// Fixed raise (whole units only for salaries)
        #[arg(
            long,
            allow_negative_numbers = true,
            conflicts_with = "percent",
            required_unless_present = "percent"
        )]
        amount: Option<f64>,

        /// Percentage raise (10 for ten percent)
        #[arg(long, allow_negative_numbers = true)]
        percent: Option<f64>,
    },
}

/// Handle a job command
pub fn handle_job_command(settings: &Settings, cmd: JobCommands) -> HouseholdResult<()> {
    match cmd {
        JobCommands::Income { pay, hours } => {
            let job = pay.to_job()?;
            let hours = hours.unwrap_or(settings.annual_hours);

            println!("{}", job);
            println!(
                "Income for {} hours: {}",
                hours,
                job.calculate_income(hours)
            );
        }

        JobCommands::Raise {
            pay,
            amount,
            percent,
        } => {
            let mut job = pay.to_job()?;
            let raise = match (amount, percent) {
                (Some(amount), _) => Raise::ByAmount(amount),
                (None, Some(percent)) => Raise::ByPercent(percent / 100.0),
                (None, None) => {
                    return Err(HouseholdError::Validation(
                        "one of --amount or --percent is required".into(),
                    ))
                }
            };

            let before = job.clone();
            job.apply_raise(raise);

            println!("Before: {}", before);
            println!("After:  {}", job);
            println!(
                "Annual income: {} -> {}",
                before.annual_income(),
                job.annual_income()
            );
        }
    }

    Ok(())
}
