//! Report rendering error types.

use thiserror::Error;

/// Errors that can occur while rendering or writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Handlebars rendering error.
    #[error("Template rendering error: {0}")]
    Template(#[from] handlebars::RenderError),

    /// Failed to write the report.
    #[error("Failed to write report to '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Unknown report format name.
#[derive(Debug, Error)]
#[error("Unknown report format '{0}', expected 'html' or 'text'")]
pub struct ParseFormatError(pub String);
