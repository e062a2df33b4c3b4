//! Compare command
//!
//! Usage: bundlecheck compare <BUNDLE_A> <BUNDLE_B> [--fail-on-diff]

use super::{render_report, BundleArgs, ExitStatus, OutputFormat};
use bundlecheck_core::render_human_summary;
use bundlecheck_engine::{apply_engine_command, CompareOutcome, EngineCommand, EngineCommandResult};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// First bundle directory or zip archive
    pub bundle_a: PathBuf,

    /// Second bundle directory or zip archive
    pub bundle_b: PathBuf,

    /// Exit with status 2 when differences are found
    #[arg(long)]
    pub fail_on_diff: bool,

    #[command(flatten)]
    pub common: BundleArgs,
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> Result<ExitStatus, Box<dyn std::error::Error>> {
    let result = apply_engine_command(EngineCommand::Compare {
        a: args.bundle_a,
        b: args.bundle_b,
        options: args.common.options(),
    })?;
    let EngineCommandResult::Compare(outcome) = result else {
        return Err("unexpected engine result for compare".into());
    };

    match args.common.format {
        OutputFormat::Text => print!("{}", render_outcome(&outcome)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    let status = match &outcome {
        CompareOutcome::Invalid { .. } => ExitStatus::Failure,
        CompareOutcome::Compared { comparison, .. }
            if args.fail_on_diff && !comparison.is_identical() =>
        {
            ExitStatus::Failure
        }
        CompareOutcome::Compared { .. } => ExitStatus::Success,
    };
    Ok(status)
}

fn render_outcome(outcome: &CompareOutcome) -> String {
    match outcome {
        CompareOutcome::Invalid { bundles } => bundles
            .iter()
            .map(|invalid| {
                format!(
                    "[{}]\n{}",
                    invalid.bundle_name,
                    render_report(&invalid.report.errors, &invalid.report.warnings, false)
                )
            })
            .collect(),
        CompareOutcome::Compared { comparison, .. } => {
            let names = outcome.side_names().unwrap_or_default();
            format!("\n{}", render_human_summary(comparison, &names))
        }
    }
}
