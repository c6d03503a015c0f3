//! Tracing subscriber initialisation for the binary.
//!
//! The filter comes from `STOREFRONT_LOG`, then `RUST_LOG`, then the
//! supplied default. Output always goes to stderr so stdout stays clean for
//! command output.

use tracing_subscriber::EnvFilter;

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "STOREFRONT_LOG";

/// Filter used by the line-oriented modes when nothing is configured.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Filter used while the TUI owns the terminal.
pub const TUI_DIRECTIVE: &str = "off";

/// Errors raised while installing the subscriber.
#[derive(Debug, thiserror::Error)]
#[error("failed to initialise logging: {message}")]
pub struct LoggingInitError {
    message: String,
}

/// Builds the filter for the given environment values and default.
#[must_use]
pub fn build_filter(
    storefront_log: Option<&str>,
    rust_log: Option<&str>,
    default_directive: &str,
) -> EnvFilter {
    [storefront_log, rust_log]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .find_map(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive))
}

/// Installs the global fmt subscriber writing to stderr.
///
/// # Errors
///
/// Returns [`LoggingInitError`] when a global subscriber is already set.
pub fn init(default_directive: &str) -> Result<(), LoggingInitError> {
    let storefront_log = std::env::var(LOG_ENV_VAR).ok();
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(
        storefront_log.as_deref(),
        rust_log.as_deref(),
        default_directive,
    );

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|error| LoggingInitError {
            message: error.to_string(),
        })
}
