//! Heat-map formatting and printing.
//!
//! Kept apart from the scan so `hunter` can be used as a library without any
//! console output.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use crate::scan::Results;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Width of the `*` divider framing the heat-map.
pub const DIVIDER_WIDTH: usize = 80;

/// One printable heat-map line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapRow {
    pub line: String,
    pub count: usize,
    pub percent: u64,
}

/// Share of `count` in `total` as a whole percentage, 0 when `total` is 0.
///
/// Halves round to the nearest even number, so 2.5% prints as 2%.
pub fn percentage(count: usize, total: usize) -> u64 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round_ties_even() as u64
}

/// Heat-map of `results` with newlines stripped and percentages attached.
pub fn heatmap_rows(results: &Results) -> Vec<HeatmapRow> {
    let total = results.len();
    results
        .heatmap()
        .into_iter()
        .map(|(line, count)| HeatmapRow {
            line: line.replace('\n', ""),
            count,
            percent: percentage(count, total),
        })
        .collect()
}

/// Print the framed heat-map to stdout.
pub fn print_heatmap(rows: &[HeatmapRow]) {
    print_heatmap_to(rows, &mut io::stdout().lock());
}

/// Print the framed heat-map to a custom writer.
pub fn print_heatmap_to<W: Write>(rows: &[HeatmapRow], writer: &mut W) {
    print_divider(writer);
    for row in rows {
        let _ = writeln!(writer, "{}: {} [{}%]", row.line, row.count, row.percent);
    }
    print_divider(writer);
}

/// Print a one-line summary of the scan to stderr.
pub fn print_summary(results: &Results) {
    print_summary_to(results, &mut io::stderr().lock());
}

/// Print the scan summary to a custom writer.
pub fn print_summary_to<W: Write>(results: &Results, writer: &mut W) {
    if results.is_empty() {
        let _ = writeln!(
            writer,
            "{} no lines captured",
            "warning:".bold().yellow()
        );
        return;
    }

    let files = results.paths_unique().len();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Captured {} {} from {} {}",
            results.len(),
            if results.len() == 1 { "line" } else { "lines" },
            files,
            if files == 1 { "file" } else { "files" }
        )
        .green()
    );
}

fn print_divider<W: Write>(writer: &mut W) {
    let _ = writeln!(writer, "{}", "*".repeat(DIVIDER_WIDTH));
}
