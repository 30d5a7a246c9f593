/*---------- Imports ----------*/
use crate::config::{Config, LogFormat};
use std::sync::Once;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Installs the global subscriber. Only the first call has any effect.
pub fn init_logging(config: &Config) {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_new(&config.log_filter)
            .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

        let registry = tracing_subscriber::registry().with(env_filter);

        let result = match config.log_format {
            LogFormat::Json => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(true)
                        .flatten_event(true)
                        .with_current_span(true),
                )
                .try_init(),
            // CloudWatch stamps ingestion time, so no timestamps here
            LogFormat::Text => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .compact()
                        .with_target(false)
                        .without_time(),
                )
                .try_init(),
        };

        if result.is_ok() {
            tracing::info!(format = ?config.log_format, "tracing_subscriber initialized");
        }
    });
}

#[cfg(test)]
pub fn init_test_logging() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(EnvFilter::new("debug"))
            .with(fmt_layer)
            .try_init();
    });
}
