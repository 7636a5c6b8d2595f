use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PivotError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed delimited text in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("empty file: {}", .path.display())]
    EmptyInput { path: PathBuf },
    #[error("missing required row '{label}' in {}", .path.display())]
    MissingRequiredRow { path: PathBuf, label: &'static str },
    #[error(
        "row length mismatch in {}: Sample={samples}, Metric Name={metric_names}, Metric Value={metric_values}",
        .path.display()
    )]
    LengthMismatch {
        path: PathBuf,
        samples: usize,
        metric_names: usize,
        metric_values: usize,
    },
    #[error("no sample columns in {}", .path.display())]
    NoSampleColumns { path: PathBuf },
    #[error("no valid metrics found in input directory: {}", .dir.display())]
    NoValidMetrics { dir: PathBuf },
    #[error("no *.csv or *.tsv files found in: {}", .dir.display())]
    NoInputFiles { dir: PathBuf },
    #[error("invalid discovery pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),
    #[error("failed to serialize run summary: {0}")]
    Summary(#[from] serde_json::Error),
}

impl PivotError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PivotError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether directory mode may skip the offending file and keep going.
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            PivotError::MissingRequiredRow { .. } | PivotError::Csv { .. }
        )
    }
}
