//! Report renderer.

use super::row::{BranchReportRow, COLUMNS};
use super::text::render_text_table;
use super::{ReportError, ReportFormat};
use chrono::{DateTime, Local};
use handlebars::Handlebars;
use serde_json::{json, Value};

/// HTML page template.
const HTML_TEMPLATE: &str = include_str!("template.html");

/// Default for the "only show branches older than" filter, in days.
pub const DEFAULT_MIN_AGE_DAYS: u32 = 90;

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - HTML escaping (branch and author names are user-controlled)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    hbs
}

/// Renders report rows as HTML or plain text.
pub struct ReportRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer {
    /// Creates a new report renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the report in the requested format.
    ///
    /// # Arguments
    ///
    /// * `format` - Output format
    /// * `title` - The group or project path the report was requested for
    /// * `rows` - Report rows, in output order
    /// * `generated_at` - Timestamp shown in the HTML footer
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render(
        &self,
        format: ReportFormat,
        title: &str,
        rows: &[BranchReportRow],
        generated_at: DateTime<Local>,
    ) -> Result<String, ReportError> {
        match format {
            ReportFormat::Html => self.render_html(title, rows, generated_at),
            ReportFormat::Text => Ok(render_text_table(rows)),
        }
    }

    /// Renders the standalone HTML page.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_html(
        &self,
        title: &str,
        rows: &[BranchReportRow],
        generated_at: DateTime<Local>,
    ) -> Result<String, ReportError> {
        let data = json!({
            "title": title,
            "headers": COLUMNS,
            "rows": rows.iter().map(row_data).collect::<Vec<_>>(),
            "min_age_days": DEFAULT_MIN_AGE_DAYS,
            "generated_at": generated_at.format("%Y-%m-%d %H:%M:%S").to_string()
        });

        Ok(self.handlebars.render_template(HTML_TEMPLATE, &data)?)
    }
}

/// Template data for one row. Every key is always present for strict mode.
fn row_data(row: &BranchReportRow) -> Value {
    let (merge_request, merge_request_url) = row
        .merge_request
        .as_ref()
        .map_or((String::new(), String::new()), |mr| {
            (mr.label(), mr.web_url.clone())
        });

    json!({
        "project": row.project,
        "project_url": row.project_url,
        "branch": row.branch,
        "branch_url": row.branch_url(),
        "author": row.last_commit_author,
        "commit_day": row.commit_day(),
        "commit_timestamp": row.commit_timestamp(),
        "commit_iso": row.last_commit_date.to_rfc3339(),
        "protected": row.protected,
        "protected_label": row.protected_label(),
        "merged_into": row.merged_into.clone().unwrap_or_default(),
        "merge_request": merge_request,
        "merge_request_url": merge_request_url
    })
}
