use std::fs;
use std::io::Read;
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::PivotError;

const GZIP_MAGIC: &[u8] = &[0x1f, 0x8b];
const UTF8_BOM: &[u8] = &[0xef, 0xbb, 0xbf];

/// Rows of text cells in file order, as read from one delimited file.
pub type RawTable = Vec<Vec<String>>;

pub fn read_table(path: &Path) -> Result<RawTable, PivotError> {
    let bytes = read_source(path)?;
    parse_table(&bytes, path)
}

/// Reads the whole file, inflating it first when the content is gzip.
pub fn read_source(path: &Path) -> Result<Vec<u8>, PivotError> {
    let raw = fs::read(path).map_err(|e| PivotError::io(path, e))?;
    if !raw.starts_with(GZIP_MAGIC) {
        return Ok(raw);
    }
    let mut out = Vec::with_capacity(raw.len() * 4);
    MultiGzDecoder::new(raw.as_slice())
        .read_to_end(&mut out)
        .map_err(|e| PivotError::io(path, e))?;
    Ok(out)
}

pub fn parse_table(bytes: &[u8], path: &Path) -> Result<RawTable, PivotError> {
    let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if content.is_empty() {
        return Err(PivotError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    // Same line ends the csv reader honours: \n, \r\n or a lone \r.
    let first_line = content
        .split(|&b| b == b'\n' || b == b'\r')
        .next()
        .unwrap_or(content);
    let delimiter = sniff_delimiter(first_line);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(content);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| PivotError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Tab wins whenever the first line carries one; comma otherwise.
pub fn sniff_delimiter(first_line: &[u8]) -> u8 {
    if first_line.contains(&b'\t') {
        b'\t'
    } else {
        b','
    }
}
