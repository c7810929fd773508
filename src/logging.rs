use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "CSX_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Installs the stderr subscriber. Filter directives come from `CSX_LOG`.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
