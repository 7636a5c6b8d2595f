use std::path::{Path, PathBuf};

use crate::error::PivotError;
use crate::input::{
    ROW_METRIC_NAME, ROW_METRIC_VALUE, RowIndex, find_metric_files, load_row_index,
    sample_id_from_path,
};
use crate::pivot::{PivotTable, trimmed};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct DirectoryPivot {
    pub table: PivotTable,
    pub skipped: Vec<SkippedFile>,
}

/// One sample's metric names (trimmed) and values, truncated to equal length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricBlock {
    pub sample: String,
    pub names: Vec<String>,
    pub values: Vec<String>,
}

pub fn pivot_directory(dir: &Path) -> Result<DirectoryPivot, PivotError> {
    let files = find_metric_files(dir)?;
    if files.is_empty() {
        return Err(PivotError::NoInputFiles {
            dir: dir.to_path_buf(),
        });
    }
    tracing::info!(dir = %dir.display(), files = files.len(), "discovered metrics files");
    pivot_files(dir, &files)
}

/// Pivots `files` in the given order, one sample per file.
///
/// Files lacking the required rows or holding malformed text are skipped with a
/// warning. Empty files and I/O failures abort the run.
pub fn pivot_files(dir: &Path, files: &[PathBuf]) -> Result<DirectoryPivot, PivotError> {
    let mut table: Option<PivotTable> = None;
    let mut skipped = Vec::new();

    for path in files {
        let block = match load_row_index(path).and_then(|index| file_block(path, &index)) {
            Ok(block) => block,
            Err(err) if err.is_skippable() => {
                tracing::warn!("skipping ({err}) -> {}", path.display());
                skipped.push(SkippedFile {
                    path: path.clone(),
                    reason: err.to_string(),
                });
                continue;
            }
            Err(err) => return Err(err),
        };

        let table = table.get_or_insert_with(|| PivotTable::new(block.names.clone()));
        table.push_sample(block.sample, &block.names, &block.values);
    }

    match table {
        Some(table) => Ok(DirectoryPivot { table, skipped }),
        None => Err(PivotError::NoValidMetrics {
            dir: dir.to_path_buf(),
        }),
    }
}

pub fn file_block(path: &Path, index: &RowIndex) -> Result<MetricBlock, PivotError> {
    let names = index.require(ROW_METRIC_NAME, path)?;
    let values = index.require(ROW_METRIC_VALUE, path)?;

    if names.len() != values.len() {
        tracing::warn!(
            "metric name/value length mismatch in {} ({} vs {}). Proceeding with min length.",
            path.display(),
            names.len(),
            values.len()
        );
    }
    let n = names.len().min(values.len());

    Ok(MetricBlock {
        sample: sample_id_from_path(path),
        names: trimmed(&names[..n]),
        values: values[..n].to_vec(),
    })
}
