//! Logging initialization for hosts embedding the engine.
//!
//! Production gets structured JSON for log aggregation; everywhere else gets
//! colorful human-readable output. The filter honours `RUST_LOG` and falls
//! back to `info`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global subscriber based on `APP_ENV`.
pub fn init_logging() {
    let environment =
        std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if matches!(environment.as_str(), "production" | "prod") {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stdout),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .init();
    }
}
