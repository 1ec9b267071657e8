//! Job model
//!
//! A job is a title plus a compensation scheme, either an hourly wage or an
//! annual salary. Jobs are mutated in place by raises.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::JobId;

/// Hours worked in a year when none are given
pub const DEFAULT_ANNUAL_HOURS: i64 = 2000;

/// How a job is paid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compensation {
    /// Paid per hour worked
    Hourly(f64),
    /// Fixed annual salary
    Salaried(u64),
}

impl Compensation {
    /// Short name of the scheme
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Hourly(_) => "hourly",
            Self::Salaried(_) => "salaried",
        }
    }
}

impl fmt::Display for Compensation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hourly(wage) => write!(f, "{:.2}/hr", wage),
            Self::Salaried(salary) => write!(f, "{}/yr", salary),
        }
    }
}

/// A raise to apply to a job
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Raise {
    /// Add a fixed amount to the wage or salary
    ByAmount(f64),
    /// Scale the wage or salary by `1 + percent` (0.1 is ten percent)
    ByPercent(f64),
}

impl fmt::Display for Raise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByAmount(amount) => write!(f, "{:+}", amount),
            Self::ByPercent(percent) => write!(f, "{:+}%", percent * 100.0),
        }
    }
}

/// A job held (or to be held) by a person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Unique identifier
    pub id: JobId,

    /// Job title (e.g., "Engineer")
    pub title: String,

    /// Pay scheme
    pub compensation: Compensation,
}

impl Job {
    /// Create a new job
    pub fn new(title: impl Into<String>, compensation: Compensation) -> Self {
        Self {
            id: JobId::new(),
            title: title.into(),
            compensation,
        }
    }

    /// Create an hourly job
    pub fn hourly(title: impl Into<String>, wage: f64) -> Self {
        Self::new(title, Compensation::Hourly(wage))
    }

    /// Create a salaried job
    pub fn salaried(title: impl Into<String>, salary: u64) -> Self {
        Self::new(title, Compensation::Salaried(salary))
    }

    /// The hourly wage, if this is an hourly job
    pub fn wage(&self) -> Option<f64> {
        match self.compensation {
            Compensation::Hourly(wage) => Some(wage),
            Compensation::Salaried(_) => None,
        }
    }

    /// The annual salary, if this is a salaried job
    pub fn salary(&self) -> Option<u64> {
        match self.compensation {
            Compensation::Hourly(_) => None,
            Compensation::Salaried(salary) => Some(salary),
        }
    }

    /// Income for the given number of hours
    ///
    /// Hourly jobs pay `floor(hours * wage)`; salaried jobs pay the salary
    /// regardless of hours.
    pub fn calculate_income(&self, hours: i64) -> i64 {
        match self.compensation {
            Compensation::Hourly(wage) => (hours as f64 * wage).floor() as i64,
            Compensation::Salaried(salary) => i64::try_from(salary).unwrap_or(i64::MAX),
        }
    }

    /// Income for a standard year of `DEFAULT_ANNUAL_HOURS`
    pub fn annual_income(&self) -> i64 {
        self.calculate_income(DEFAULT_ANNUAL_HOURS)
    }

    /// Raise pay by a fixed amount
    ///
    /// Salaries only take the whole part of `amount`. Negative amounts are
    /// accepted; a salary bottoms out at zero.
    pub fn raise_by_amount(&mut self, amount: f64) {
        self.compensation = match self.compensation {
            Compensation::Hourly(wage) => Compensation::Hourly(wage + amount),
            Compensation::Salaried(salary) => {
                Compensation::Salaried(salary.saturating_add_signed(amount.trunc() as i64))
            }
        };
    }

    /// Raise pay by a fraction (0.1 is ten percent)
    ///
    /// Salaries are truncated to a whole number after scaling and bottom out
    /// at zero.
    pub fn raise_by_percent(&mut self, percent: f64) {
        self.compensation = match self.compensation {
            Compensation::Hourly(wage) => Compensation::Hourly(wage * (1.0 + percent)),
            Compensation::Salaried(salary) => {
                Compensation::Salaried((salary as f64 * (1.0 + percent)) as u64)
            }
        };
    }

    /// Apply a raise
    pub fn apply_raise(&mut self, raise: Raise) {
        match raise {
            Raise::ByAmount(amount) => self.raise_by_amount(amount),
            Raise::ByPercent(percent) => self.raise_by_percent(percent),
        }
    }

    /// Validate the job
    pub fn validate(&self) -> Result<(), JobValidationError> {
        if self.title.trim().is_empty() {
            return Err(JobValidationError::EmptyTitle);
        }

        if let Compensation::Hourly(wage) = self.compensation {
            if !wage.is_finite() || wage < 0.0 {
                return Err(JobValidationError::InvalidWage(wage.to_string()));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.compensation)
    }
}

/// Validation errors for jobs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobValidationError {
    EmptyTitle,
    InvalidWage(String),
}

impl fmt::Display for JobValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Job title cannot be empty"),
            Self::InvalidWage(wage) => write!(f, "Invalid hourly wage: {}", wage),
        }
    }
}

impl std::error::Error for JobValidationError {}
