//! Plain-text table rendering.

use super::row::{BranchReportRow, COLUMNS};

/// Gap between columns.
const COLUMN_GAP: &str = "  ";

/// Renders rows as a left-aligned table with a header and separator line.
#[must_use]
pub fn render_text_table(rows: &[BranchReportRow]) -> String {
    let header = COLUMNS.map(str::to_string);
    let body: Vec<[String; 7]> = rows.iter().map(BranchReportRow::cells).collect();

    let mut widths = header.clone().map(|cell| cell.chars().count());
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &header, &widths);
    let separator = widths.map(|width| "-".repeat(width));
    push_line(&mut out, &separator, &widths);
    for cells in &body {
        push_line(&mut out, cells, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    out.push_str(line.trim_end());
    out.push('\n');
}
