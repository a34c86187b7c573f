use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the logging system with JSON formatting and environment-based filtering
///
/// This function sets up the logging infrastructure using tracing-subscriber:
/// - Uses environment variables for log level filtering (defaults to "info" if not set)
/// - Configures JSON output format for structured logging
/// - Flattens event fields for cleaner log output
///
/// Chooser diagnostics (drawn index, discovered pods) are emitted at debug
/// level, so `RUST_LOG=podchooser_core=debug` shows them.
pub fn init_normal_logging() {
    fmt()
        .with_env_filter(env_filter())
        .json()
        .flatten_event(true)
        .init();
}

pub fn init_logging() {
    // If tokio-console is enabled, DO NOT install the normal subscriber
    if std::env::var("TOKIO_CONSOLE").is_ok() {
        init_console_logging();
    } else {
        init_normal_logging();
    }
}

/// Like [`init_normal_logging`], but reports an already-installed global
/// subscriber instead of panicking. Useful for embedders and tests.
pub fn try_init_logging() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().json().flatten_event(true))
        .try_init()
}

fn init_console_logging() {
    console_subscriber::init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_try_init_reports_existing_subscriber() {
        let _ = try_init_logging();
        assert!(try_init_logging().is_err());
    }
}
