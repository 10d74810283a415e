use tracing_subscriber::EnvFilter;

use crate::error::{PostinumeroError, Result};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs the global tracing subscriber. Logs go to stderr, stdout is reserved for the program
/// output.
///
/// # Errors
///
/// A global subscriber was already installed
pub fn init_logging() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| PostinumeroError::config(format!("Failed to initialize logging: {e}")))
}
