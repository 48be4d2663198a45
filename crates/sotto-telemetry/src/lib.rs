//! Telemetry for sotto
//!
//! Structured logging via the `tracing` ecosystem

use sotto_config::{LogFormat, TelemetryConfig};

/// Initialize logging from configuration
///
/// Sets up the `tracing-subscriber` registry with a fmt layer in the
/// configured format. The filter comes from `RUST_LOG` when set, then the
/// config file, then `default_filter`.
pub fn init(config: Option<&TelemetryConfig>, default_filter: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let configured = config.and_then(|c| c.filter.as_deref()).unwrap_or(default_filter);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let format = config.map_or(LogFormat::Pretty, |c| c.format);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match format {
        LogFormat::Pretty => tracing_subscriber::registry().with(filter).with(fmt_layer).init(),
        LogFormat::Json => tracing_subscriber::registry().with(filter).with(fmt_layer.json()).init(),
    }
}
