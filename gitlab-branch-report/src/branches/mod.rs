//! Branch listing and annotation.
//!
//! Each branch of a project becomes one [`BranchReportRow`]. Commit details
//! come from the branch listing itself; merge status comes from a single
//! listing of the project's merged merge requests.

use crate::client::{ApiError, Branch, GitLabClient, MergeRequest, Project};
use crate::report::{BranchReportRow, MergeRequestRef};
use tracing::{debug, info, info_span, Instrument};

/// Fetches and annotates every branch of a project.
///
/// # Errors
///
/// Returns [`ApiError`] if listing branches or merge requests fails. Callers
/// decide whether an access error skips the project.
pub async fn collect_project_rows(
    client: &GitLabClient,
    project: &Project,
) -> Result<Vec<BranchReportRow>, ApiError> {
    let span = info_span!("project", project = %project.path_with_namespace);

    async {
        info!("Processing project");

        let branches = client.list_branches(project).await?;
        debug!(count = branches.len(), "Listed branches");

        let merge_requests = client.list_merged_merge_requests(project).await?;
        debug!(count = merge_requests.len(), "Listed merged merge requests");

        Ok(annotate_branches(project, branches, &merge_requests))
    }
    .instrument(span)
    .await
}

/// Builds report rows for a project's branches.
///
/// Rows are ordered by last commit date, oldest first; branches with equal
/// dates keep their listing order.
#[must_use]
pub fn annotate_branches(
    project: &Project,
    branches: Vec<Branch>,
    merge_requests: &[MergeRequest],
) -> Vec<BranchReportRow> {
    let mut rows: Vec<BranchReportRow> = branches
        .into_iter()
        .map(|branch| annotate_branch(project, branch, merge_requests))
        .collect();
    rows.sort_by_key(|row| row.last_commit_date);
    rows
}

/// Builds the report row for a single branch.
#[must_use]
pub fn annotate_branch(
    project: &Project,
    branch: Branch,
    merge_requests: &[MergeRequest],
) -> BranchReportRow {
    debug!(branch = %branch.name, "Processing branch");

    let merged = find_merged_request(project, &branch.name, merge_requests);

    BranchReportRow {
        project: project.path_with_namespace.clone(),
        project_url: project.web_url.clone(),
        last_commit_author: branch.commit.display_author().to_string(),
        last_commit_date: branch.commit.committed_date,
        protected: branch.protected,
        merged_into: merged.map(|mr| mr.target_branch.clone()),
        merge_request: merged.map(|mr| MergeRequestRef {
            iid: mr.iid,
            web_url: mr.web_url.clone(),
        }),
        branch: branch.name,
    }
}

/// Finds the first merged MR whose source branch is `branch_name` in
/// `project`.
///
/// GitLab lists merge requests newest first, so the first match is the most
/// recent merge of the branch. Merges from a fork's branch of the same name
/// do not count.
#[must_use]
pub fn find_merged_request<'a>(
    project: &Project,
    branch_name: &str,
    merge_requests: &'a [MergeRequest],
) -> Option<&'a MergeRequest> {
    merge_requests.iter().find(|mr| {
        mr.is_merged() && mr.source_branch == branch_name && mr.is_from_project(project.id)
    })
}
