//! CLI for the GitLab Branch Report.
//!
//! Lists every branch of a GitLab group or project with its last commit,
//! protection status and merge request, and writes the result as a table.

use clap::Parser;
use gitlab_branch_report::{
    GitLabConfig, OutputDestination, ReportFormat, RunSummary, Runner, RunnerConfig, RunnerError,
    DEFAULT_GITLAB_URL,
};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// GitLab Branch Report - List branches of a group or project with commit and merge details.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Group or project path (e.g., mygroup or mygroup/myproject).
    path: String,

    /// Open the report in browser after generation.
    #[arg(short, long)]
    display: bool,

    /// Output file, or "-" for stdout. Defaults to gitlab_branch_report.<html|txt>.
    #[arg(short, long)]
    output: Option<String>,

    /// Report format: html or text.
    #[arg(short, long, default_value_t = ReportFormat::Html)]
    format: ReportFormat,

    /// GitLab personal access token.
    #[arg(long, env = "GITLAB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// GitLab instance URL.
    #[arg(long, env = "GITLAB_URL", default_value = DEFAULT_GITLAB_URL)]
    gitlab_url: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Report failed");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output) on stderr, so a report
///   written to stdout stays clean
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    // Validated before any request is made
    let gitlab = GitLabConfig::new(&args.gitlab_url, args.token)?;

    let mut config = RunnerConfig::new(args.path, args.format).with_display(args.display);
    if let Some(output) = args.output {
        config = config.with_output(OutputDestination::parse(&output));
    }

    let runner = Runner::new(config, &gitlab)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    eprintln!("\nSummary:");
    eprintln!("  Projects found: {}", summary.projects_found);
    eprintln!("  Projects reported: {}", summary.projects_processed);
    if summary.has_skipped() {
        eprintln!("  Projects skipped: {}", summary.projects_skipped);
    }
    eprintln!("  Branches reported: {}", summary.branches_reported);
    eprintln!("  Merged branches: {}", summary.merged_branches);
    if let Some(path) = &summary.output {
        eprintln!("  Report: {}", path.display());
    }
}
