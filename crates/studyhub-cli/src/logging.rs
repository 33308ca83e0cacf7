//! tracing subscriber setup.

use tracing_subscriber::EnvFilter;

const ENV_VAR: &str = "STUDYHUB_LOG";
const FALLBACK: &str = "warn";

/// Pick the filter directive: `STUDYHUB_LOG`, then the configured level,
/// then `warn`. Invalid directives fall through to the next source.
pub fn filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_env(ENV_VAR)
        .or_else(|_| EnvFilter::try_new(configured.unwrap_or(FALLBACK)))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK))
}

/// Log to stderr so command output on stdout stays machine-readable.
pub fn init(configured: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(configured))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
