//! Report emission: per-query lines, the `[AVERAGE]` line, and the
//! optional verbatim diagnostic line, either to a file or to stdout.

use crate::error::{RangebenchError, Result};
use crate::scoring::ScoreReport;
use std::io::Write;
use std::path::Path;

/// Write the report to `dest`, or print it to the console when no
/// destination is given. An existing file is overwritten.
pub fn write_report(report: &ScoreReport, dest: Option<&Path>) -> Result<()> {
    match dest {
        Some(path) => {
            let mut out = std::io::BufWriter::new(std::fs::File::create(path)?);
            write_to(report, &mut out).map_err(RangebenchError::Io)?;
            out.flush().map_err(RangebenchError::Io)?;
            log::info!("Report written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            write_to(report, &mut stdout.lock()).map_err(RangebenchError::Io)?;
        }
    }
    Ok(())
}

fn write_to<W: Write>(report: &ScoreReport, out: &mut W) -> std::io::Result<()> {
    for score in &report.per_query {
        writeln!(out, "{}", score.format_line())?;
    }
    writeln!(out, "{}", report.format_average_line())?;
    if let Some(log_line) = &report.log {
        writeln!(out, "{log_line}")?;
    }
    Ok(())
}
