use std::io::Write;

use crate::{domain::lookup::QueryAnswer, error::Result};

/// Number of raw file rows shown before the answer
pub const DIAGNOSTIC_ROWS: usize = 5;

/// Writes a tab separated `(index)`/`Values` table to the writer (W). Values are written as they
/// are, never quoted.
///
/// # Errors
///
/// Failed to write the table
pub fn write_diagnostic_table<Input, W, S>(values: Input, w: W) -> Result<()>
where
    S: AsRef<str>,
    Input: Iterator<Item = S>,
    W: Write,
{
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(w);

    wtr.write_record(["(index)", "Values"])?;
    for (idx, value) in values.enumerate() {
        wtr.write_record([idx.to_string().as_str(), value.as_ref()])?;
    }
    wtr.flush()?;

    Ok(())
}

/// Writes the answer line
///
/// # Errors
///
/// Failed to write to w
pub fn write_answer<W: Write>(answer: &QueryAnswer, mut w: W) -> Result<()> {
    writeln!(w, "{answer}")?;
    Ok(())
}
