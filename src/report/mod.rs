use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::PivotError;
use crate::input::ROW_METRIC_NAME;
use crate::pivot::PivotTable;

pub mod json;

pub use json::{RunSummary, write_summary_json};

/// Writes the matrix as TSV: a `Metric Name` header row, then one row per sample.
pub fn write_tsv(table: &PivotTable, path: &Path) -> Result<(), PivotError> {
    let file = File::create(path).map_err(|e| PivotError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    render_tsv(table, &mut writer).map_err(|e| PivotError::io(path, e))?;
    writer.flush().map_err(|e| PivotError::io(path, e))
}

/// Fields go out verbatim; a value holding a tab makes its row ambiguous.
pub fn render_tsv<W: Write>(table: &PivotTable, out: W) -> std::io::Result<()> {
    let mut w = WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    let mut header = Vec::with_capacity(table.header.len() + 1);
    header.push(ROW_METRIC_NAME);
    header.extend(table.header.iter().map(String::as_str));
    w.write_record(&header)?;

    for row in &table.rows {
        let mut record = Vec::with_capacity(row.values.len() + 1);
        record.push(row.sample.as_str());
        record.extend(row.values.iter().map(String::as_str));
        w.write_record(&record)?;
    }
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/tests.rs"]
mod tests;
