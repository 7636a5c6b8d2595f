use std::path::Path;

use crate::error::PivotError;
use crate::input::{ROW_METRIC_NAME, ROW_METRIC_VALUE, ROW_SAMPLE, RowIndex, load_row_index};
use crate::pivot::{PivotTable, trimmed};

/// Half-open column range `[start, end)` sharing one `Sample` label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub sample: String,
    pub start: usize,
    pub end: usize,
}

/// Splits labels into maximal runs of adjacent equal values.
///
/// A label that reappears after a different one opens a new segment; runs are
/// never merged by name.
pub fn segment_samples(labels: &[String]) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    for (col, label) in labels.iter().enumerate() {
        match segments.last_mut() {
            Some(current) if current.sample == *label => current.end = col + 1,
            _ => segments.push(Segment {
                sample: label.clone(),
                start: col,
                end: col + 1,
            }),
        }
    }
    segments
}

pub fn pivot_blocks_file(path: &Path) -> Result<PivotTable, PivotError> {
    let index = load_row_index(path)?;
    pivot_blocks(path, &index)
}

/// Pivots a single sheet holding several samples as contiguous column blocks.
pub fn pivot_blocks(path: &Path, index: &RowIndex) -> Result<PivotTable, PivotError> {
    let samples = index.require(ROW_SAMPLE, path)?;
    let names = trimmed(index.require(ROW_METRIC_NAME, path)?);
    let values = index.require(ROW_METRIC_VALUE, path)?;

    if samples.is_empty() {
        return Err(PivotError::NoSampleColumns {
            path: path.to_path_buf(),
        });
    }
    if samples.len() != names.len() || names.len() != values.len() {
        return Err(PivotError::LengthMismatch {
            path: path.to_path_buf(),
            samples: samples.len(),
            metric_names: names.len(),
            metric_values: values.len(),
        });
    }

    let segments = segment_samples(samples);
    tracing::info!(path = %path.display(), segments = segments.len(), "segmented sample columns");

    let mut table: Option<PivotTable> = None;
    for seg in segments {
        let seg_names = &names[seg.start..seg.end];
        let seg_values = &values[seg.start..seg.end];
        let table = table.get_or_insert_with(|| PivotTable::new(seg_names.to_vec()));
        table.push_sample(seg.sample, seg_names, seg_values);
    }

    table.ok_or_else(|| PivotError::NoSampleColumns {
        path: path.to_path_buf(),
    })
}
