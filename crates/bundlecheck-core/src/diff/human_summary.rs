//! Human-readable rendering of a [`BundleComparison`].

use super::model::{BundleComparison, BundleSide, Difference};
use crate::model::EntityLabel;
use serde_json::Value;

/// Display names of the two compared bundles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideNames {
    pub a: String,
    pub b: String,
}

impl SideNames {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    pub fn name(&self, side: BundleSide) -> &str {
        match side {
            BundleSide::A => &self.a,
            BundleSide::B => &self.b,
        }
    }
}

impl Default for SideNames {
    fn default() -> Self {
        Self::new("A", "B")
    }
}

/// Render the comparison as the text report printed by the CLI.
///
/// Each difference is a `- Heading` line followed by one indented line per
/// side, and blocks are separated by a blank line.
pub fn render_human_summary(comparison: &BundleComparison, names: &SideNames) -> String {
    if comparison.is_identical() {
        return "No significant differences between these files\n".to_string();
    }

    let mut out = String::from("Differences:\n\n");
    for difference in &comparison.differences {
        out.push_str(&render_difference(difference, names));
        out.push_str("\n\n");
    }
    out
}

fn render_difference(difference: &Difference, names: &SideNames) -> String {
    match difference {
        Difference::MismatchedValues {
            label,
            index_a,
            index_b,
            field,
            value_a,
            value_b,
        } => format!(
            "- Mismatched values\n{}\n{}",
            side_line(names, BundleSide::A, *label, *index_a, field, &display_value(value_a)),
            side_line(names, BundleSide::B, *label, *index_b, field, &display_value(value_b)),
        ),
        Difference::DefaultValueChange {
            label,
            index_a,
            index_b,
            field,
            value_a,
            value_b,
            default,
        } => {
            let shown = |value: &Option<Value>| match value {
                Some(v) => display_value(v),
                None => format!("None (defaults to: {})", display_value(default)),
            };
            format!(
                "- Default Value Change\n{}\n{}",
                side_line(names, BundleSide::A, *label, Some(*index_a), field, &shown(value_a)),
                side_line(names, BundleSide::B, *label, Some(*index_b), field, &shown(value_b)),
            )
        }
        Difference::MissingValue {
            label,
            index_a,
            index_b,
            field,
            value_a,
            value_b,
        } => {
            let shown = |value: &Option<Value>| {
                value
                    .as_ref()
                    .map(display_value)
                    .unwrap_or_else(|| "None".to_string())
            };
            format!(
                "- Missing value\n{}\n{}",
                side_line(names, BundleSide::A, *label, Some(*index_a), field, &shown(value_a)),
                side_line(names, BundleSide::B, *label, Some(*index_b), field, &shown(value_b)),
            )
        }
        Difference::NoEquivalentValue { side, label, index } => format!(
            "- No Equivalent Value\n  - [{}] {} index:{} has no equivalent {} in [{}]",
            names.name(*side),
            label,
            index,
            label,
            names.name(side.other()),
        ),
        Difference::FileMismatch { field, .. } => {
            format!("- {} files do not match", capitalize(field))
        }
    }
}

fn side_line(
    names: &SideNames,
    side: BundleSide,
    label: EntityLabel,
    index: Option<i64>,
    field: &str,
    value: &str,
) -> String {
    match index {
        Some(index) => format!(
            "  - [{}] {} index:{} ({}) = {}",
            names.name(side),
            label,
            index,
            field,
            value
        ),
        // Root-level field
        None => format!("  - [{}] {} = {}", names.name(side), capitalize(field), value),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names() -> SideNames {
        SideNames::new("comp_a.zip", "comp_b")
    }

    #[test]
    fn test_empty_comparison() {
        let out = render_human_summary(&BundleComparison::default(), &names());
        assert_eq!(out, "No significant differences between these files\n");
    }

    #[test]
    fn test_title_mismatch_format() {
        let comparison = BundleComparison {
            differences: vec![Difference::MismatchedValues {
                label: EntityLabel::Bundle,
                index_a: None,
                index_b: None,
                field: "title".to_string(),
                value_a: json!("Comp A"),
                value_b: json!("Comp B"),
            }],
        };
        let out = render_human_summary(&comparison, &names());
        assert_eq!(
            out,
            "Differences:\n\n- Mismatched values\n  - [comp_a.zip] Title = Comp A\n  - [comp_b] Title = Comp B\n\n"
        );
    }

    #[test]
    fn test_default_value_change_shows_default() {
        let diff = Difference::DefaultValueChange {
            label: EntityLabel::Phase,
            index_a: 2,
            index_b: 0,
            field: "execution_time_limit_ms".to_string(),
            value_a: None,
            value_b: Some(json!(900)),
            default: json!(600),
        };
        assert_eq!(
            render_difference(&diff, &names()),
            "- Default Value Change\n  - [comp_a.zip] Phase index:2 (execution_time_limit_ms) = None (defaults to: 600)\n  - [comp_b] Phase index:0 (execution_time_limit_ms) = 900"
        );
    }

    #[test]
    fn test_no_equivalent_names_both_sides() {
        let diff = Difference::NoEquivalentValue {
            side: BundleSide::B,
            label: EntityLabel::Task,
            index: 3,
        };
        assert_eq!(
            render_difference(&diff, &names()),
            "- No Equivalent Value\n  - [comp_b] Task index:3 has no equivalent Task in [comp_a.zip]"
        );
    }

    #[test]
    fn test_image_mismatch_heading() {
        let diff = Difference::FileMismatch {
            label: EntityLabel::Bundle,
            field: "image".to_string(),
            value_a: "aa".to_string(),
            value_b: "bb".to_string(),
        };
        assert_eq!(render_difference(&diff, &names()), "- Image files do not match");
    }
}
