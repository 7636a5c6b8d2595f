use clap::Parser;

use kira_metricpivot::cli::{DirArgs, directory_exit_code, run_directory};
use kira_metricpivot::logging::init_logging;

fn main() {
    init_logging();
    let args = DirArgs::parse();
    match run_directory(&args) {
        Ok(report) => {
            println!(
                "Done -> {} (samples: {})",
                report.output.display(),
                report.n_samples
            );
        }
        Err(err) => {
            eprintln!("ERROR: {err}");
            std::process::exit(directory_exit_code(&err));
        }
    }
}
