//! # Logging
//!
//! Tracing subscriber setup for the binaries.

use crate::infrastructure::config::{LogFormat, LoggingSettings};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `settings.level`. Returns an error if a
/// global subscriber is already installed.
///
/// # Errors
///
/// Returns `TryInitError` if a subscriber was already set.
pub fn init(
    settings: &LoggingSettings,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hauze_quote={0},tower_http={0}", settings.level)));

    let registry = tracing_subscriber::registry().with(filter);
    match settings.format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .compact(),
            )
            .try_init(),
    }
}

/// Installs a compact subscriber writing to stderr, for command-line tools
/// whose stdout carries their output.
///
/// # Errors
///
/// Returns `TryInitError` if a subscriber was already set.
pub fn init_cli(verbose: bool) -> Result<(), tracing_subscriber::util::TryInitError> {
    let default = if verbose { "hauze_quote=debug" } else { "hauze_quote=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
}
