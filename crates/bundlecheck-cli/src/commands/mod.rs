pub mod compare;
pub mod validate;

use bundlecheck_engine::BundleOptions;
use clap::{Args, ValueEnum};

/// Report format on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Log format on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// How a successful run should exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// Invalid bundle, or differences with `--fail-on-diff`
    Failure,
}

/// Flags shared by every subcommand
#[derive(Debug, Args)]
pub struct BundleArgs {
    /// Manifest file name at the bundle root
    #[arg(long, default_value_t = default_manifest_name())]
    pub manifest: String,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl BundleArgs {
    pub fn options(&self) -> BundleOptions {
        BundleOptions {
            manifest_name: self.manifest.clone(),
        }
    }
}

fn default_manifest_name() -> String {
    BundleOptions::default().manifest_name
}

/// Text rendering of a validation report, matching the console sections
/// `WARNINGS:`, `ERRORS:` and `Yaml bundle is valid`.
pub fn render_report(errors: &[String], warnings: &[String], show_warnings: bool) -> String {
    let mut out = String::new();
    if show_warnings && !warnings.is_empty() {
        out.push_str("WARNINGS:\n");
        for warning in warnings {
            out.push_str(&format!("- {}\n", warning));
        }
    }
    if errors.is_empty() {
        if show_warnings {
            out.push_str("Yaml bundle is valid\n");
        }
    } else {
        out.push_str("ERRORS:\n");
        for error in errors {
            out.push_str(&format!("- {}\n", error));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_valid_report_with_warning() {
        let rendered = render_report(&[], &["key shortcut".to_string()], true);
        assert_eq!(rendered, "WARNINGS:\n- key shortcut\nYaml bundle is valid\n");
    }

    #[test]
    fn test_render_errors_only_when_silent() {
        let rendered = render_report(
            &["Image file - (logo.png) - not found".to_string()],
            &["ignored".to_string()],
            false,
        );
        assert_eq!(rendered, "ERRORS:\n- Image file - (logo.png) - not found\n");
    }

    #[test]
    fn test_render_silent_valid_report_is_empty() {
        assert_eq!(render_report(&[], &[], false), "");
    }
}
