//! Typed GitLab API responses.
//!
//! Only the fields the report needs are decoded; everything else in the
//! payload is ignored.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// A project (repository).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    /// Numeric project ID.
    pub id: u64,

    /// Full path, e.g. "acme/backend".
    pub path_with_namespace: String,

    /// Browser URL of the project.
    pub web_url: String,
}

/// A group or subgroup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Group {
    /// Numeric group ID.
    pub id: u64,

    /// Full path, e.g. "acme/platform".
    pub full_path: String,
}

/// A branch together with its head commit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Branch {
    /// Branch name.
    pub name: String,

    /// Whether the branch is protected.
    #[serde(default)]
    pub protected: bool,

    /// Latest commit on the branch.
    pub commit: Commit,
}

/// Commit metadata as embedded in branch listings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Commit {
    /// Commit SHA.
    pub id: String,

    #[serde(default)]
    pub author_name: String,

    #[serde(default)]
    pub committer_name: String,

    /// Commit timestamp in the committer's offset.
    pub committed_date: DateTime<FixedOffset>,
}

impl Commit {
    /// Name shown in the report: the committer, or the author when the
    /// committer is blank.
    #[must_use]
    pub fn display_author(&self) -> &str {
        if self.committer_name.trim().is_empty() {
            &self.author_name
        } else {
            &self.committer_name
        }
    }
}

/// Lifecycle state of a merge request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeRequestState {
    Opened,
    Closed,
    Locked,
    Merged,
    /// Any state this client does not know about.
    #[serde(other)]
    Unknown,
}

/// A merge request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MergeRequest {
    /// Project-scoped MR number (shown as `!iid`).
    pub iid: u64,

    /// Branch the changes come from.
    pub source_branch: String,

    /// Project holding the source branch; differs from the target project
    /// for merge requests opened from a fork.
    #[serde(default)]
    pub source_project_id: Option<u64>,

    /// Branch the changes go into.
    pub target_branch: String,

    /// Current state.
    pub state: MergeRequestState,

    /// Browser URL of the MR.
    pub web_url: String,
}

impl MergeRequest {
    /// Returns true if the MR has been merged.
    #[must_use]
    pub fn is_merged(&self) -> bool {
        self.state == MergeRequestState::Merged
    }

    /// Returns true if the source branch lives in project `project_id`.
    ///
    /// Merge requests without a source project are treated as local.
    #[must_use]
    pub fn is_from_project(&self, project_id: u64) -> bool {
        self.source_project_id.map_or(true, |id| id == project_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_branch_with_commit() {
        let branch: Branch = serde_json::from_value(json!({
            "name": "main",
            "merged": false,
            "protected": true,
            "default": true,
            "web_url": "https://gitlab.com/acme/backend/-/tree/main",
            "commit": {
                "id": "7b5c3cc8be40ee161ae89a06bba6229da1032a0c",
                "short_id": "7b5c3cc",
                "author_name": "Alice Author",
                "committer_name": "alice",
                "committed_date": "2024-01-10T09:30:00.000+01:00"
            }
        }))
        .unwrap();

        assert_eq!(branch.name, "main");
        assert!(branch.protected);
        assert_eq!(branch.commit.display_author(), "alice");
        assert_eq!(
            branch.commit.committed_date.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2024-01-10 09:30:00"
        );
    }

    #[test]
    fn falls_back_to_author_name() {
        let commit: Commit = serde_json::from_value(json!({
            "id": "abc",
            "author_name": "bob",
            "committed_date": "2024-02-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(commit.display_author(), "bob");
    }

    #[test]
    fn decodes_merge_request_states() {
        let mr: MergeRequest = serde_json::from_value(json!({
            "iid": 12,
            "source_branch": "feature/login",
            "source_project_id": 1,
            "target_branch": "main",
            "state": "merged",
            "web_url": "https://gitlab.com/acme/backend/-/merge_requests/12"
        }))
        .unwrap();
        assert!(mr.is_merged());
        assert!(mr.is_from_project(1));
        assert!(!mr.is_from_project(2));

        let state: MergeRequestState = serde_json::from_value(json!("opened")).unwrap();
        assert_eq!(state, MergeRequestState::Opened);

        let state: MergeRequestState = serde_json::from_value(json!("draft_review")).unwrap();
        assert_eq!(state, MergeRequestState::Unknown);
    }
}
