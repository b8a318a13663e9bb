use std::io::Write;
use anyhow::{Context, Result};

use crate::config::OutputFormat;

/// Write `links` to `writer` in the requested format.
///
/// JSON is a single array of strings, CSV a single record with one field per link.
pub fn write_links<W: Write>(links: &[String], format: OutputFormat, writer: &mut W) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, links).context("Failed to serialize links")?;
            writeln!(writer)?;
        }
        OutputFormat::Csv => {
            let mut csv_writer = csv::WriterBuilder::new()
                .terminator(csv::Terminator::Any(b'\n'))
                .from_writer(&mut *writer);
            csv_writer.write_record(links).context("Failed to write CSV record")?;
            csv_writer.flush()?;
        }
    }
    writer.flush().context("Failed to write links")?;
    Ok(())
}
