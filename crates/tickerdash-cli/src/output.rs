use std::io::{self, Write};

use tickerdash_core::DashboardView;

use crate::cli::OutputFormat;
use crate::commands::CommandOutcome;
use crate::error::CliError;

pub fn render(
    outcome: &CommandOutcome,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if format == OutputFormat::Table {
        if let Some(headline) = &outcome.headline {
            writeln!(out, "{headline}")?;
        }
    }
    write_view(&mut out, &outcome.view, format, pretty)
}

pub fn write_view<W: Write>(
    out: &mut W,
    view: &DashboardView,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(view)?
            } else {
                serde_json::to_string(view)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Html => writeln!(out, "{}", view.to_markup())?,
        OutputFormat::Table => write!(out, "{}", view.to_text())?,
    }
    out.flush()?;
    Ok(())
}
