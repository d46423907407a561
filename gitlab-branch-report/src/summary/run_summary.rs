//! Run summary types.

use super::result::ProjectResult;
use std::path::PathBuf;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of projects the target resolved to.
    pub projects_found: usize,

    /// Number of projects included in the report.
    pub projects_processed: usize,

    /// Number of projects left out (e.g., no read access).
    pub projects_skipped: usize,

    /// Number of rows in the report.
    pub branches_reported: usize,

    /// Number of reported branches merged through an MR.
    pub merged_branches: usize,

    /// Absolute path of the written report, if written to a file.
    pub output: Option<PathBuf>,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the summary with a processing result.
    pub fn record_result(&mut self, result: &ProjectResult) {
        match result {
            ProjectResult::Processed {
                branches, merged, ..
            } => {
                self.projects_processed += 1;
                self.branches_reported += branches;
                self.merged_branches += merged;
            }
            ProjectResult::Skipped { .. } => self.projects_skipped += 1,
        }
    }

    /// Returns true if any project was left out.
    #[must_use]
    pub fn has_skipped(&self) -> bool {
        self.projects_skipped > 0
    }
}
