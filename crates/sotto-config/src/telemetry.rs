use serde::Deserialize;

/// Telemetry configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfig {
    /// Log output format
    #[serde(default)]
    pub format: LogFormat,
    /// Default log filter, overridden by `RUST_LOG`
    #[serde(default)]
    pub filter: Option<String>,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable single-line output
    #[default]
    Pretty,
    /// Newline-delimited JSON
    Json,
}
