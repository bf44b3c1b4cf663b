use crate::LoggingConfig;
use tracing::info;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize console logging with the default filter.
///
/// `RUST_LOG` takes precedence over the default `info,belvedere=debug`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing_with_config(&LoggingConfig::default())
}

/// Initialize console logging from a [`LoggingConfig`].
///
/// # Errors
///
/// Returns an error if the configured filter does not parse or a global
/// subscriber is already installed.
pub fn init_tracing_with_config(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?;

    let fmt_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    info!(json = config.json, "Tracing initialized");
    Ok(())
}
