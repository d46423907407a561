//! Runner configuration.

use crate::report::{OutputDestination, ReportFormat};
use std::path::PathBuf;

/// Configuration for a single report run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Group or project path to report on.
    target: String,
    /// Output format.
    format: ReportFormat,
    /// Where the report goes.
    output: OutputDestination,
    /// Whether to open the written report in a browser.
    display: bool,
}

impl RunnerConfig {
    /// Creates a configuration writing `format`'s default file name.
    pub fn new(target: impl Into<String>, format: ReportFormat) -> Self {
        Self {
            target: target.into(),
            format,
            output: OutputDestination::File(PathBuf::from(format.default_file_name())),
            display: false,
        }
    }

    /// Sets a custom output destination.
    #[must_use]
    pub fn with_output(mut self, output: OutputDestination) -> Self {
        self.output = output;
        self
    }

    /// Sets whether the report is opened in a browser after writing.
    #[must_use]
    pub fn with_display(mut self, display: bool) -> Self {
        self.display = display;
        self
    }

    /// Returns the group or project path.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the output format.
    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Returns the output destination.
    pub fn output(&self) -> &OutputDestination {
        &self.output
    }

    /// Returns whether the report is opened in a browser.
    pub fn display(&self) -> bool {
        self.display
    }
}
