#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod branches;
pub mod client;
pub mod config;
pub mod discovery;
pub mod report;
pub mod runner;
pub mod summary;

pub use branches::{annotate_branch, annotate_branches, collect_project_rows, find_merged_request};
pub use client::{
    ApiError, Branch, Commit, GitLabClient, Group, MergeRequest, MergeRequestState, Project,
};
pub use config::{ConfigError, GitLabConfig, DEFAULT_GITLAB_URL, TOKEN_ENV, URL_ENV};
pub use discovery::{resolve_projects, ReportTarget};
pub use report::{
    open_in_browser, render_text_table, write_report, BranchReportRow, MergeRequestRef,
    OutputDestination, ParseFormatError, ReportError, ReportFormat, ReportRenderer, COLUMNS,
};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::{ProjectResult, RunSummary};
