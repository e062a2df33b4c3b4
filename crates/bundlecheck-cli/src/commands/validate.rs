//! Validate command
//!
//! Usage: bundlecheck validate <BUNDLE> [--manifest <NAME>] [--format text|json]

use super::{render_report, BundleArgs, ExitStatus, OutputFormat};
use bundlecheck_engine::{apply_engine_command, EngineCommand, EngineCommandResult};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Bundle directory or zip archive
    pub bundle: PathBuf,

    #[command(flatten)]
    pub common: BundleArgs,
}

/// Execute validate command
pub fn execute(args: ValidateArgs) -> Result<ExitStatus, Box<dyn std::error::Error>> {
    let result = apply_engine_command(EngineCommand::Validate {
        input: args.bundle,
        options: args.common.options(),
    })?;
    let EngineCommandResult::Validate(outcome) = result else {
        return Err("unexpected engine result for validate".into());
    };

    match args.common.format {
        OutputFormat::Text => print!(
            "{}",
            render_report(&outcome.report.errors, &outcome.report.warnings, true)
        ),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    Ok(if outcome.is_valid() {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    })
}
