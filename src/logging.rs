//! Logging subscriber initialisation.

use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

use crate::config::{LogFormat, ServerConfig};

/// Installs the global `tracing` subscriber. `RUST_LOG` wins over the
/// configured level.
pub fn init_subscriber(config: &ServerConfig) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(build_env_filter(config));

    match config.log_format {
        LogFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().compact().with_target(true))
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true),
            )
            .try_init(),
    }
}

fn build_env_filter(config: &ServerConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},hyper=warn,tower=warn,tower_http=warn",
            config.log_level
        ))
    })
}
