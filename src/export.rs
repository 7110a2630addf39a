//! CSV export of the heat-map.

use std::path::Path;

use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::cli::report::HeatmapRow;

/// File written by a bare `--csv`.
pub const DEFAULT_OUTPUT: &str = "output.csv";

/// Write `rows` to `output_path`, replacing any existing file.
///
/// Fields are comma separated and every non-numeric field, header included,
/// is wrapped in double quotes.
pub fn write_csv(rows: &[HeatmapRow], output_path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(b',')
        .quote(b'"')
        .quote_style(QuoteStyle::NonNumeric)
        .terminator(Terminator::CRLF)
        .from_path(output_path)
        .with_context(|| format!("Failed to create CSV file: {}", output_path.display()))?;

    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("Failed to write CSV row for {:?}", row.line))?;
    }

    // serialize() only emits the header along with the first row.
    if rows.is_empty() {
        writer
            .write_record(["line", "count", "percent"])
            .context("Failed to write CSV header")?;
    }

    writer.flush().context("Failed to flush CSV writer")?;
    Ok(())
}
