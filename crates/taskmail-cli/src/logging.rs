use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `taskmail_runtime=trace`)
pub const LOG_ENV_VAR: &str = "TASKMAIL_LOG";

const DEFAULT_FILTER: &str = "info";

/// Install the stderr subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .try_init();
}
