use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::PivotError;
use crate::pivot::{PivotMode, PivotTable, SkippedFile, pivot_blocks_file, pivot_directory};
use crate::report::{RunSummary, write_summary_json, write_tsv};

/// Pivot a directory of single-sample transposed metrics sheets into one TSV.
#[derive(Debug, Clone, Parser)]
#[command(name = "kira-metricpivot-dir", version, about)]
pub struct DirArgs {
    /// Directory holding *.csv / *.tsv files, one sample per file.
    pub input_dir: PathBuf,
    /// Output TSV path.
    pub output: PathBuf,
    /// Also write a JSON run summary to this path.
    #[arg(long, value_name = "PATH")]
    pub summary_json: Option<PathBuf>,
}

/// Pivot one transposed metrics sheet holding several samples as column blocks.
#[derive(Debug, Clone, Parser)]
#[command(name = "kira-metricpivot-blocks", version, about)]
pub struct BlocksArgs {
    /// Input sheet with Sample, Metric Name and Metric Value rows.
    pub input: PathBuf,
    /// Output TSV path.
    pub output: PathBuf,
    /// Also write a JSON run summary to this path.
    #[arg(long, value_name = "PATH")]
    pub summary_json: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub output: PathBuf,
    pub n_samples: usize,
    pub skipped: Vec<SkippedFile>,
}

pub fn run_directory(args: &DirArgs) -> Result<RunReport, PivotError> {
    let pivot = pivot_directory(&args.input_dir)?;
    finish(
        PivotMode::Directory,
        &args.input_dir,
        &args.output,
        args.summary_json.as_deref(),
        &pivot.table,
        pivot.skipped,
    )
}

pub fn run_blocks(args: &BlocksArgs) -> Result<RunReport, PivotError> {
    let table = pivot_blocks_file(&args.input)?;
    finish(
        PivotMode::Blocks,
        &args.input,
        &args.output,
        args.summary_json.as_deref(),
        &table,
        Vec::new(),
    )
}

fn finish(
    mode: PivotMode,
    input: &Path,
    output: &Path,
    summary_json: Option<&Path>,
    table: &PivotTable,
    skipped: Vec<SkippedFile>,
) -> Result<RunReport, PivotError> {
    write_tsv(table, output)?;
    if let Some(path) = summary_json {
        let summary = RunSummary::new(mode, input, output, table, &skipped);
        write_summary_json(&summary, path)?;
    }
    if !skipped.is_empty() {
        tracing::warn!("{} file(s) skipped", skipped.len());
    }
    Ok(RunReport {
        output: output.to_path_buf(),
        n_samples: table.n_samples(),
        skipped,
    })
}

/// Exit status for a failed directory run.
pub fn directory_exit_code(err: &PivotError) -> i32 {
    match err {
        PivotError::NoValidMetrics { .. } => 2,
        _ => 1,
    }
}

/// Every block-mode failure is a hard validation failure.
pub fn blocks_exit_code(_err: &PivotError) -> i32 {
    2
}

#[cfg(test)]
#[path = "../tests/src_inline/cli_inline.rs"]
mod tests;
