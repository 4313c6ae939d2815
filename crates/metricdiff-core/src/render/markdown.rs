//! Markdown report renderer.

use crate::diff::comparators::LINE_BREAK;
use crate::diff::model::{ChangeType, DiffSummary, MetricDiff};
use crate::errors::Result;
use crate::model::MetricRecord;
use crate::render::line_diff::full_context_diff;

/// Report heading used when none is configured.
pub const DEFAULT_TITLE: &str = "Kubernetes Metrics Changes";

/// Presentation settings for a markdown report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub title: String,
    /// Label for the old catalog, usually derived from its file name
    pub old_version: String,
    /// Label for the new catalog
    pub new_version: String,
    /// Emit the per-metric "Detailed Changes" section
    pub include_details: bool,
}

impl ReportOptions {
    pub fn new(old_version: impl Into<String>, new_version: impl Into<String>) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            old_version: old_version.into(),
            new_version: new_version.into(),
            include_details: true,
        }
    }

    pub fn with_details(mut self, include_details: bool) -> Self {
        self.include_details = include_details;
        self
    }
}

/// Render the ordered diff list as a markdown report.
///
/// Layout: title, summary counts, a table with one row per diff, then
/// (optionally) one full-context YAML diff block per metric.
///
/// # Errors
///
/// - `Serialization` — a record could not be dumped as YAML for its
///   detail block
pub fn render_markdown(diffs: &[MetricDiff<'_>], options: &ReportOptions) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!(
        "# {}: {} → {}\n\n",
        options.title, options.old_version, options.new_version
    ));

    if diffs.is_empty() {
        out.push_str(&format!(
            "No differences found between {} and {}.\n",
            options.old_version, options.new_version
        ));
        return Ok(out);
    }

    let summary = DiffSummary::from_diffs(diffs);
    out.push_str("## Summary\n");
    out.push_str(&format!("- **Added**: {} metrics\n", summary.added));
    out.push_str(&format!("- **Removed**: {} metrics\n", summary.removed));
    out.push_str(&format!("- **Updated**: {} metrics\n", summary.updated));
    out.push_str(&format!(
        "- **Total Changes**: {} metrics\n\n",
        summary.total
    ));

    out.push_str("## Changed Metrics\n\n");
    out.push_str("| Metric Name | Type | Change Type | Stability Level | Description |\n");
    out.push_str("|-------------|------|-------------|----------------|-------------|\n");
    for diff in diffs {
        out.push_str(&table_row(diff));
    }

    if options.include_details {
        out.push_str("## Detailed Changes\n\n");
        for diff in diffs {
            let old = dump_record(diff.old)?;
            let new = dump_record(diff.new)?;
            out.push_str(&format!("### {}\n", diff.key));
            out.push_str("```diff\n");
            out.push_str(&full_context_diff(&old, &new));
            out.push_str("```\n\n");
        }
    }

    Ok(out)
}

fn table_row(diff: &MetricDiff<'_>) -> String {
    let (metric_type, stability_level) = diff
        .current()
        .map(|r| (r.metric_type.as_str(), r.stability_level.as_str()))
        .unwrap_or_default();

    let description = match diff.change_type {
        ChangeType::Updated => escape_cell(&diff.changes.join(LINE_BREAK)),
        ChangeType::Added | ChangeType::Removed => String::new(),
    };

    format!(
        "| [{key}](#{key}) | {} | {} | `{}` | {} |\n",
        metric_type,
        diff.change_type,
        stability_level,
        description,
        key = diff.key,
    )
}

/// Escape characters that would break a markdown table cell.
pub fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Dump one side of a diff as a single-element YAML sequence.
fn dump_record(record: Option<&MetricRecord>) -> Result<String> {
    match record {
        Some(record) => Ok(serde_yaml::to_string(&[record])?),
        None => Ok(String::new()),
    }
}
