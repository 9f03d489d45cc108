//! Subscriber initialization: env filter + optional fmt layer + optional
//! TUI log sink, composed once on a `Registry`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;
use crate::tui_log_layer;

/// Initialize tracing with the given configuration.
///
/// Returns an error if a global subscriber is already installed.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_filter = config
        .log_level
        .as_ref()
        .map(|level| tracing_subscriber::EnvFilter::new(level.as_str()))
        .unwrap_or_else(|| {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        });

    // The fmt layer writes to stderr so TUI drawing on stdout stays clean.
    let fmt_layer = config
        .enable_console
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    // Optional TUI log sink (runtime logs for debug traces screen)
    let tui_layer = tui_log_layer::tui_log_layer(config.log_sink.clone());

    // Compose subscriber once (no mutation, avoids type mismatch)
    let subscriber = Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .with(tui_layer);

    subscriber
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    tracing::info!(service.name = %config.service_name, "tracing initialized");
    Ok(())
}

/// Initialize from environment variables (`SERVICE_NAME`, `RUST_LOG`).
pub fn init_from_env() -> Result<(), ObservabilityError> {
    init(ObservabilityConfig::from_env())
}
