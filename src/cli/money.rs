//! Money CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{HouseholdError, HouseholdResult};
use crate::models::{Currency, Money};

/// Money subcommands
#[derive(Subcommand)]
pub enum MoneyCommands {
    /// Convert an amount into another currency
    Convert {
        /// Amount with optional currency code (e.g., "12.50 EUR")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Target currency code (USD, EUR, CAN, GBP; others convert at par)
        to: String,
    },

    /// Add two amounts; the sum is in the second amount's currency
    Add {
        /// First amount (e.g., "10 USD")
        #[arg(allow_hyphen_values = true)]
        first: String,

        /// Second amount (e.g., "5 GBP")
        #[arg(allow_hyphen_values = true)]
        second: String,
    },
}

/// Handle a money command
pub fn handle_money_command(settings: &Settings, cmd: MoneyCommands) -> HouseholdResult<()> {
    match cmd {
        MoneyCommands::Convert { amount, to } => {
            let money = parse_money(&amount, settings)?;
            let target = Currency::from_code(to.trim());
            let converted = money.convert(&target);

            println!("{} = {}", money, converted);
        }

        MoneyCommands::Add { first, second } => {
            let first = parse_money(&first, settings)?;
            let second = parse_money(&second, settings)?;
            let sum = first.add(&second);

            println!("{} + {} = {}", first, second, sum);
        }
    }

    Ok(())
}

fn parse_money(s: &str, settings: &Settings) -> HouseholdResult<Money> {
    Money::parse_with_default(s, &settings.default_currency)
        .map_err(|e| HouseholdError::Validation(e.to_string()))
}
