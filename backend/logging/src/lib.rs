//! Structured logger setup.
//!
//! Wraps `tracing` with environment-based level control. `RUST_LOG` wins
//! over the level passed in; `json` switches the console layer to NDJSON for
//! log shippers.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global structured logger.
pub fn init_logger(level: &str, json: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json {
        let layer = fmt::layer()
            .json()
            .with_writer(std::io::stdout)
            .with_ansi(false);
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(layer)
            .try_init();
    } else {
        let layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_target(false);
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(layer)
            .try_init();
    }
}
