//! Resolution of the requested path into the list of projects to report on.

mod target;

pub use target::ReportTarget;

use crate::client::{ApiError, GitLabClient, Project};
use tracing::{debug, info, info_span, Instrument};

/// Resolves a target into its projects, in GitLab's listing order.
///
/// A group expands to all of its projects, subgroups included. A project is
/// returned as a one-element list. Paths that look like projects but are not
/// found as one are retried as (sub)groups, since `acme/platform` may name
/// either.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] if the path is empty or neither a project
/// nor a group exists at it, and any other [`ApiError`] as-is.
pub async fn resolve_projects(
    client: &GitLabClient,
    target: &ReportTarget,
) -> Result<Vec<Project>, ApiError> {
    if target.path().is_empty() {
        return Err(ApiError::NotFound {
            resource: target.to_string(),
        });
    }

    let span = info_span!("resolve", target = %target);

    async {
        match target {
            ReportTarget::Group(path) => list_group(client, path).await,
            ReportTarget::Project(path) => match client.get_project(path).await {
                Ok(project) => {
                    info!(project = %project.path_with_namespace, "Resolved single project");
                    Ok(vec![project])
                }
                Err(ApiError::NotFound { resource }) => {
                    debug!("No project at path, trying as subgroup");
                    match list_group(client, path).await {
                        Err(ApiError::NotFound { .. }) => Err(ApiError::NotFound { resource }),
                        other => other,
                    }
                }
                Err(e) => Err(e),
            },
        }
    }
    .instrument(span)
    .await
}

async fn list_group(client: &GitLabClient, path: &str) -> Result<Vec<Project>, ApiError> {
    let group = client.get_group(path).await?;
    info!(group = %group.full_path, "Getting projects from group");

    let projects = client.list_group_projects(&group.id.to_string()).await?;
    info!(count = projects.len(), "Found projects");
    Ok(projects)
}
