use tracing_subscriber::EnvFilter;

/// Overrides `RUST_LOG` for this tool only.
pub const LOG_ENV: &str = "KIRA_LOG";

/// Installs a stderr `tracing` subscriber; stdout stays reserved for results.
///
/// Calling it twice is harmless: the second install attempt is ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
