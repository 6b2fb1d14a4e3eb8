//! Tracing initialization and subscriber setup.
//!
//! This module wires the `tracing` spans and events emitted across the crate
//! to a formatted stderr writer. The reducer and dispatcher only ever emit,
//! so embedding hosts that install their own subscriber can skip this module
//! entirely and still capture everything.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with formatted stderr output.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters spans and events based on the configured trace level
/// 2. Formats them compactly without target paths
/// 3. Writes to stderr, keeping stdout free for the host's own output
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `config.trace_level` if set (any `EnvFilter` directive string works)
/// 2. Default: `"info"`
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times, only the first call takes effect.
/// Does nothing when another subscriber is already installed.
///
/// # Example
///
/// ```
/// use typeahead::observability::init_tracing;
/// use typeahead::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Config::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        );

    let _ = subscriber.try_init();
}
