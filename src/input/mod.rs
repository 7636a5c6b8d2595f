use std::path::{Path, PathBuf};

use glob::MatchOptions;

use crate::error::PivotError;

pub mod row_index;
pub mod table;

pub use row_index::RowIndex;
pub use table::{RawTable, read_table, sniff_delimiter};

pub const ROW_SAMPLE: &str = "Sample";
pub const ROW_METRIC_NAME: &str = "Metric Name";
pub const ROW_METRIC_VALUE: &str = "Metric Value";

const METRIC_FILE_EXTENSIONS: &[&str] = &["tsv", "csv"];

/// Loads a metrics sheet straight into its row index.
pub fn load_row_index(path: &Path) -> Result<RowIndex, PivotError> {
    let rows = read_table(path)?;
    let index = RowIndex::from_rows(rows);
    tracing::debug!(path = %path.display(), labels = index.label_count(), "loaded row index");
    Ok(index)
}

/// Non-recursive `*.tsv` + `*.csv` listing of `dir`, sorted by path.
pub fn find_metric_files(dir: &Path) -> Result<Vec<PathBuf>, PivotError> {
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());

    let mut files = Vec::new();
    for ext in METRIC_FILE_EXTENSIONS {
        let pattern = format!("{escaped}/*.{ext}");
        for entry in glob::glob_with(&pattern, options)? {
            let path = entry.map_err(|e| {
                let path = e.path().to_path_buf();
                PivotError::io(path, e.into())
            })?;
            if path.is_file() {
                files.push(path);
            }
        }
    }
    files.sort();
    Ok(files)
}

/// File name without directory and without the last extension.
pub fn sample_id_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
