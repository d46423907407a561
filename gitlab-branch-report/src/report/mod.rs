//! Rendering and writing of the branch report.
//!
//! Rows are rendered either as a standalone HTML page (Handlebars) or as a
//! plain-text table, then written to a file or stdout. A written file can be
//! opened in the default browser.

mod error;
mod format;
mod renderer;
mod row;
mod text;

pub use error::{ParseFormatError, ReportError};
pub use format::{OutputDestination, ReportFormat};
pub use renderer::{create_handlebars_registry, ReportRenderer, DEFAULT_MIN_AGE_DAYS};
pub use row::{BranchReportRow, MergeRequestRef, COLUMNS};
pub use text::render_text_table;

use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Writes rendered report content to its destination.
///
/// # Returns
///
/// The absolute path of the written file, or `None` for stdout.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if writing fails.
pub fn write_report(
    content: &str,
    destination: &OutputDestination,
) -> Result<Option<PathBuf>, ReportError> {
    match destination {
        OutputDestination::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| ReportError::Io {
                    path: "<stdout>".to_string(),
                    source,
                })?;
            Ok(None)
        }
        OutputDestination::File(path) => {
            std::fs::write(path, content).map_err(|source| io_error(path, source))?;
            let absolute = std::fs::canonicalize(path).map_err(|source| io_error(path, source))?;
            info!(path = %absolute.display(), "Report written");
            Ok(Some(absolute))
        }
    }
}

/// Opens a written report in the default browser.
///
/// Failure to launch a browser is logged, not returned; the report itself
/// is already on disk.
pub fn open_in_browser(path: &Path) {
    match open::that(path) {
        Ok(()) => info!(path = %path.display(), "Opened report in browser"),
        Err(e) => warn!(path = %path.display(), error = %e, "Failed to open report in browser"),
    }
}

fn io_error(path: &Path, source: std::io::Error) -> ReportError {
    ReportError::Io {
        path: path.display().to_string(),
        source,
    }
}
