use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use household::cli::{
    handle_audit_command, handle_family_command, handle_job_command, handle_money_command,
    FamilyCommands, JobCommands, MoneyCommands,
};
use household::config::{paths::HouseholdPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "household",
    version,
    about = "Currency conversion, job income and household calculations",
    long_about = "Convert money between currencies, work out job income and raises, \
                  and build families from roster files to see their household income."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Currency conversion and addition
    #[command(subcommand)]
    Money(MoneyCommands),

    /// Job income and raises
    #[command(subcommand)]
    Job(JobCommands),

    /// Families built from roster files
    #[command(subcommand)]
    Family(FamilyCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        count: usize,
    },

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = HouseholdPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Money(cmd)) => handle_money_command(&settings, cmd)?,
        Some(Commands::Job(cmd)) => handle_job_command(&settings, cmd)?,
        Some(Commands::Family(cmd)) => handle_family_command(&paths, &settings, cmd)?,
        Some(Commands::Audit { count }) => handle_audit_command(&paths, count)?,
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("Household Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Default currency: {}", settings.default_currency);
            println!("  Annual hours:     {}", settings.annual_hours);
            println!("  Audit enabled:    {}", settings.audit_enabled);
        }
        None => {
            println!("household - currency, income and family calculations");
            println!();
            println!("Run 'household --help' for usage information.");
        }
    }

    Ok(())
}
