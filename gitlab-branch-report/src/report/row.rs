//! Report row types.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use url::Url;

/// Column headers, in output order.
pub const COLUMNS: [&str; 7] = [
    "Project",
    "Branch",
    "Last Commit Author",
    "Last Commit Date",
    "Protected Status",
    "Merged Into",
    "Merge Request",
];

/// Reference to the merge request a branch was merged through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeRequestRef {
    /// Project-scoped MR number.
    pub iid: u64,

    /// Browser URL of the MR.
    pub web_url: String,
}

impl MergeRequestRef {
    /// Returns the GitLab short reference, e.g. `!12`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("!{}", self.iid)
    }
}

/// One branch of one project, as shown in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchReportRow {
    /// Project path, e.g. "acme/backend".
    pub project: String,

    /// Browser URL of the project.
    pub project_url: String,

    pub branch: String,

    pub last_commit_author: String,

    pub last_commit_date: DateTime<FixedOffset>,

    pub protected: bool,

    /// Target branch of the merged MR, if any.
    pub merged_into: Option<String>,

    /// The merged MR, if any.
    pub merge_request: Option<MergeRequestRef>,
}

impl BranchReportRow {
    /// Browser URL of the branch tree.
    ///
    /// Each `/`-separated part of the branch name is percent-encoded, so
    /// names containing `#`, `?` or `%` still link to the branch.
    #[must_use]
    pub fn branch_url(&self) -> String {
        let Ok(mut url) = Url::parse(&self.project_url) else {
            return format!(
                "{}/-/tree/{}",
                self.project_url.trim_end_matches('/'),
                self.branch
            );
        };
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(["-", "tree"])
                .extend(self.branch.split('/'));
        }
        url.into()
    }

    /// Commit date as `YYYY-MM-DD`.
    #[must_use]
    pub fn commit_day(&self) -> String {
        self.last_commit_date.format("%Y-%m-%d").to_string()
    }

    /// Commit timestamp as `YYYY-MM-DD HH:MM:SS`.
    #[must_use]
    pub fn commit_timestamp(&self) -> String {
        self.last_commit_date.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// "Yes" or "No".
    #[must_use]
    pub fn protected_label(&self) -> &'static str {
        if self.protected {
            "Yes"
        } else {
            "No"
        }
    }

    /// Plain cell values in [`COLUMNS`] order; absent values are empty.
    #[must_use]
    pub fn cells(&self) -> [String; 7] {
        [
            self.project.clone(),
            self.branch.clone(),
            self.last_commit_author.clone(),
            self.commit_day(),
            self.protected_label().to_string(),
            self.merged_into.clone().unwrap_or_default(),
            self.merge_request
                .as_ref()
                .map(MergeRequestRef::label)
                .unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_row() -> BranchReportRow {
        BranchReportRow {
            project: "acme/backend".to_string(),
            project_url: "https://gitlab.com/acme/backend".to_string(),
            branch: "main".to_string(),
            last_commit_author: "alice".to_string(),
            last_commit_date: DateTime::parse_from_rfc3339("2024-01-10T09:30:00+00:00").unwrap(),
            protected: true,
            merged_into: None,
            merge_request: None,
        }
    }

    #[test]
    fn cells_for_unmerged_protected_branch() {
        assert_eq!(
            sample_row().cells(),
            [
                "acme/backend",
                "main",
                "alice",
                "2024-01-10",
                "Yes",
                "",
                ""
            ]
        );
    }

    #[test]
    fn cells_for_merged_branch() {
        let mut row = sample_row();
        row.branch = "feature/login".to_string();
        row.protected = false;
        row.merged_into = Some("main".to_string());
        row.merge_request = Some(MergeRequestRef {
            iid: 12,
            web_url: "https://gitlab.com/acme/backend/-/merge_requests/12".to_string(),
        });

        let cells = row.cells();
        assert_eq!(cells[4], "No");
        assert_eq!(cells[5], "main");
        assert_eq!(cells[6], "!12");
    }

    #[test]
    fn branch_url_points_at_tree() {
        assert_eq!(
            sample_row().branch_url(),
            "https://gitlab.com/acme/backend/-/tree/main"
        );
    }

    #[test]
    fn branch_url_keeps_slashes_and_encodes_reserved_characters() {
        let mut row = sample_row();
        row.project_url = "https://gitlab.com/acme/backend/".to_string();

        row.branch = "feature/login".to_string();
        assert_eq!(
            row.branch_url(),
            "https://gitlab.com/acme/backend/-/tree/feature/login"
        );

        row.branch = "fix/#42?draft%".to_string();
        assert_eq!(
            row.branch_url(),
            "https://gitlab.com/acme/backend/-/tree/fix/%2342%3Fdraft%25"
        );
    }

    #[test]
    fn timestamp_keeps_committer_offset() {
        let mut row = sample_row();
        row.last_commit_date = DateTime::parse_from_rfc3339("2024-01-10T23:30:00-05:00").unwrap();
        assert_eq!(row.commit_day(), "2024-01-10");
        assert_eq!(row.commit_timestamp(), "2024-01-10 23:30:00");
    }
}
