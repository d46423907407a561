//! Orchestrates a branch report run.
//!
//! Resolve the target, walk its projects one at a time, collect rows, then
//! render and write the report.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::branches::collect_project_rows;
use crate::client::{ApiError, GitLabClient, Project};
use crate::config::GitLabConfig;
use crate::discovery::{resolve_projects, ReportTarget};
use crate::report::{open_in_browser, write_report, BranchReportRow, ReportRenderer};
use crate::summary::{ProjectResult, RunSummary};
use chrono::Local;
use tracing::{info, warn};

/// Orchestrates a full report run.
pub struct Runner {
    config: RunnerConfig,
    client: GitLabClient,
    renderer: ReportRenderer,
}

impl Runner {
    /// Builds a runner from the run configuration and GitLab connection
    /// settings.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Api`] if the HTTP client cannot be created.
    pub fn new(config: RunnerConfig, gitlab: &GitLabConfig) -> Result<Self, RunnerError> {
        let client = GitLabClient::new(gitlab)?;
        Ok(Self {
            config,
            client,
            renderer: ReportRenderer::new(),
        })
    }

    /// Executes the full flow: collect, render, write and optionally open.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the target cannot be resolved, a request
    /// fails outside a single project's scope, or the report cannot be
    /// rendered or written.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new();
        let rows = self.collect_rows(&mut summary).await?;

        let content = self.renderer.render(
            self.config.format(),
            self.config.target(),
            &rows,
            Local::now(),
        )?;
        summary.output = write_report(&content, self.config.output())?;

        if self.config.display() {
            match &summary.output {
                Some(path) => open_in_browser(path),
                None => warn!("Report went to stdout, nothing to open"),
            }
        }

        Ok(summary)
    }

    /// Collects report rows for every accessible project of the target.
    ///
    /// Projects the token cannot read are skipped and recorded in `summary`.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Api`] if the target cannot be resolved or a
    /// non-access error occurs.
    pub async fn collect_rows(
        &self,
        summary: &mut RunSummary,
    ) -> Result<Vec<BranchReportRow>, RunnerError> {
        let target = ReportTarget::parse(self.config.target());
        let projects = resolve_projects(&self.client, &target).await?;
        info!(count = projects.len(), "Found projects in total");
        summary.projects_found = projects.len();

        let mut rows = Vec::new();
        for project in &projects {
            let result = process_project(&self.client, project, &mut rows).await?;
            summary.record_result(&result);
        }

        Ok(rows)
    }
}

async fn process_project(
    client: &GitLabClient,
    project: &Project,
    rows: &mut Vec<BranchReportRow>,
) -> Result<ProjectResult, ApiError> {
    match collect_project_rows(client, project).await {
        Ok(project_rows) => {
            let merged = project_rows
                .iter()
                .filter(|row| row.merge_request.is_some())
                .count();
            let branches = project_rows.len();
            info!(
                project = %project.path_with_namespace,
                branches,
                merged,
                "Collected branches"
            );
            rows.extend(project_rows);
            Ok(ProjectResult::Processed {
                project: project.path_with_namespace.clone(),
                branches,
                merged,
            })
        }
        Err(e) if e.is_access_error() => {
            warn!(
                project = %project.path_with_namespace,
                error = %e,
                "Skipping project"
            );
            Ok(ProjectResult::Skipped {
                project: project.path_with_namespace.clone(),
                reason: e.to_string(),
            })
        }
        Err(e) => Err(e),
    }
}
