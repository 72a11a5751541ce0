//! Output formatting utilities for CLI sessions.

use std::io::{self, Write};

use almanac::{AlmanacError, Row};

use super::session::SessionReport;

/// Writes a summary of the session to stdout.
pub fn write_session_summary(report: &SessionReport) -> Result<(), AlmanacError> {
    let mut stdout = io::stdout().lock();
    write_session_summary_to(&mut stdout, report)
}

/// Writes a summary of the session to the given writer.
pub fn write_session_summary_to<W: Write>(
    writer: &mut W,
    report: &SessionReport,
) -> Result<(), AlmanacError> {
    let list = &report.list;
    let visible = list
        .visible_months()
        .iter()
        .map(|month| month.date_string.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let scroll = report.position.map_or_else(
        || "none".to_owned(),
        |request| {
            format!(
                "offset {} ({})",
                request.offset,
                if request.animated { "animated" } else { "jump" }
            )
        },
    );

    writeln!(
        writer,
        "Month window: {} rows around {} (current {})",
        list.rows().len(),
        list.anchor().date(),
        list.current().date()
    )
    .map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Visible: {}",
        if visible.is_empty() { "none" } else { &visible }
    )
    .map_err(|e| io_error(&e))?;
    writeln!(writer, "Scroll: {scroll}").map_err(|e| io_error(&e))?;
    writeln!(writer, "Materialized rows:").map_err(|e| io_error(&e))?;

    for (index, row) in list.rows().iter().enumerate() {
        if let Row::Materialized { date, revision } = row {
            writeln!(
                writer,
                "  {index:>4}  {}  revision {revision}",
                date.label()
            )
            .map_err(|e| io_error(&e))?;
        }
    }

    let placeholders = list.rows().len() - list.window().materialized_count();
    writeln!(writer, "Placeholders: {placeholders}").map_err(|e| io_error(&e))
}

fn io_error(error: &io::Error) -> AlmanacError {
    AlmanacError::Io {
        message: error.to_string(),
    }
}
