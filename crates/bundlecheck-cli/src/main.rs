//! bundlecheck CLI
//!
//! Command-line interface for validating and comparing competition bundles

use bundlecheck_core::logging_facility::{init, Profile};
use clap::{Parser, Subcommand};

mod commands;

use commands::{ExitStatus, LogFormat};

#[derive(Debug, Parser)]
#[command(name = "bundlecheck")]
#[command(about = "bundlecheck - Validate and compare competition bundles", long_about = None)]
struct Cli {
    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate a single bundle
    Validate(commands::validate::ValidateArgs),
    /// Validate two bundles and report their differences
    Compare(commands::compare::CompareArgs),
}

fn main() {
    let cli = Cli::parse();

    init(match cli.log_format {
        LogFormat::Text => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let result = match cli.command {
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::Compare(args) => commands::compare::execute(args),
    };

    match result {
        Ok(ExitStatus::Success) => {}
        Ok(ExitStatus::Failure) => std::process::exit(2),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
