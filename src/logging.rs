use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter, e.g. `debug` or `release_relay=trace`
pub const LOG_ENV_VAR: &str = "RELEASE_RELAY_LOG";

/// Initialize logging for a binary.
///
/// Logs go to stderr so stdout stays reserved for program output. Defaults
/// to `warn` unless [LOG_ENV_VAR] is set.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
