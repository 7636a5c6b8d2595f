use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::PivotError;
use crate::pivot::{PivotMode, PivotTable, SkippedFile};

#[derive(Debug, Clone, Serialize)]
pub struct SkippedEntry {
    pub path: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tool: &'static str,
    pub version: &'static str,
    pub mode: &'static str,
    pub input: String,
    pub output: String,
    pub n_samples: usize,
    pub n_metrics: usize,
    pub metrics: Vec<String>,
    pub samples: Vec<String>,
    pub reordered_samples: Vec<String>,
    pub skipped: Vec<SkippedEntry>,
}

impl RunSummary {
    pub fn new(
        mode: PivotMode,
        input: &Path,
        output: &Path,
        table: &PivotTable,
        skipped: &[SkippedFile],
    ) -> Self {
        Self {
            tool: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            mode: mode.as_str(),
            input: input.display().to_string(),
            output: output.display().to_string(),
            n_samples: table.n_samples(),
            n_metrics: table.header.len(),
            metrics: table.header.clone(),
            samples: table.rows.iter().map(|r| r.sample.clone()).collect(),
            reordered_samples: table
                .rows
                .iter()
                .filter(|r| r.reordered)
                .map(|r| r.sample.clone())
                .collect(),
            skipped: skipped
                .iter()
                .map(|s| SkippedEntry {
                    path: s.path.display().to_string(),
                    reason: s.reason.clone(),
                })
                .collect(),
        }
    }
}

pub fn write_summary_json(summary: &RunSummary, path: &Path) -> Result<(), PivotError> {
    let file = File::create(path).map_err(|e| PivotError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, summary)?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| PivotError::io(path, e))
}
