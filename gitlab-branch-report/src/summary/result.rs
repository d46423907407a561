//! Per-project processing results.

/// Result of processing a single project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectResult {
    /// Branches were listed and annotated.
    Processed {
        /// Project path.
        project: String,
        /// Number of rows added to the report.
        branches: usize,
        /// How many of those branches were merged through an MR.
        merged: usize,
    },

    /// The project was left out of the report.
    Skipped {
        /// Project path.
        project: String,
        /// Reason for skipping.
        reason: String,
    },
}
