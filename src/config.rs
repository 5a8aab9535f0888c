//! Configuration parsing for Beacon.
//!
//! Supports:
//! - CLI arguments via clap
//! - Environment variable overrides
//! - Sensible defaults for running next to a stock Datadog agent

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Beacon: a periodic telemetry beacon emitting DogStatsD counters and trace spans.
#[derive(Parser, Debug, Clone)]
#[command(name = "beacon")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Path of the DogStatsD Unix domain socket metrics are sent to
    #[arg(
        long,
        env = "BEACON_STATSD_SOCKET",
        default_value = "/var/run/datadog/dsd.socket"
    )]
    pub statsd_socket: PathBuf,

    /// Seconds slept between emission cycles
    #[arg(long, env = "BEACON_INTERVAL_SECS", default_value_t = 10)]
    pub interval_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// OpenTelemetry collector endpoint for span export (optional)
    #[arg(long, env = "OTEL_EXPORTER_OTLP_ENDPOINT")]
    pub otel_endpoint: Option<String>,
}

impl Config {
    /// Parse configuration from CLI arguments and environment.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The sleep between emission cycles as a [`Duration`].
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    /// Create a default configuration for testing.
    #[cfg(test)]
    pub fn test_config(statsd_socket: PathBuf) -> Self {
        Self {
            statsd_socket,
            interval_secs: 1,
            log_level: "debug".into(),
            otel_endpoint: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            statsd_socket: PathBuf::from("/var/run/datadog/dsd.socket"),
            interval_secs: 10,
            log_level: "info".into(),
            otel_endpoint: None,
        }
    }
}
