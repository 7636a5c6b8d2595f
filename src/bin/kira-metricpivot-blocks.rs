use clap::Parser;

use kira_metricpivot::cli::{BlocksArgs, blocks_exit_code, run_blocks};
use kira_metricpivot::logging::init_logging;

fn main() {
    init_logging();
    let args = BlocksArgs::parse();
    match run_blocks(&args) {
        Ok(report) => {
            tracing::info!(
                output = %report.output.display(),
                samples = report.n_samples,
                "pivot complete"
            );
        }
        Err(err) => {
            eprintln!("ERROR: {err}");
            std::process::exit(blocks_exit_code(&err));
        }
    }
}
