use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter when `RUST_LOG` is unset. Kept quiet so the report on
/// stdout is the only thing a user sees on a normal run.
const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

/// JSON when stderr is piped, human-readable when it is a terminal.
pub fn default_log_format() -> LogFormat {
    if io::stderr().is_terminal() {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}

/// Initialize the logging system with environment-based filtering.
///
/// Events always go to stderr; stdout is reserved for report output.
pub fn init_logging(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match format {
        LogFormat::Json => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .flatten_event(true)
            .init(),
        LogFormat::Pretty => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .init(),
    }
}
