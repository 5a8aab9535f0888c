//! Beacon: a periodic telemetry beacon emitting DogStatsD counters and trace spans.
//!
//! # Usage
//!
//! ```bash
//! beacon --statsd-socket /var/run/datadog/dsd.socket --interval-secs 10
//! ```
//!
//! Environment variables can also be used:
//! - `BEACON_STATSD_SOCKET`: DogStatsD Unix domain socket path
//! - `BEACON_INTERVAL_SECS`: Seconds slept between emission cycles
//! - `OTEL_EXPORTER_OTLP_ENDPOINT`: OTLP collector endpoint for span export
//! - `RUST_LOG`: Log level (trace, debug, info, warn, error)

use anyhow::Result;
use beacon::config::Config;
use beacon::emitter::run_emitter;
use beacon::observability::metrics::Metrics;
use beacon::observability::tracing::{init_tracing, shutdown_tracing};
use beacon::SERVICE_NAME;
use tokio::sync::watch;

/// Print startup banner with version and configuration.
fn print_banner(config: &Config) {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!(
        r#"
    ____
   / __ )___  ____ __________  ____
  / __  / _ \/ __ `/ ___/ __ \/ __ \
 / /_/ /  __/ /_/ / /__/ /_/ / / / /
/_____/\___/\__,_/\___/\____/_/ /_/

  Beacon v{} - DogStatsD and Trace Emitter

  Configuration:
    StatsD Socket:  {}
    Interval:       {}s
    Service:        {}
    Log Level:      {}

  Press Ctrl+C to shutdown gracefully.
"#,
        version,
        config.statsd_socket.display(),
        config.interval_secs,
        SERVICE_NAME,
        config.log_level
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse configuration from CLI arguments and environment
    let config = Config::parse_args();

    // Initialize tracing/logging (with optional OTLP span export)
    init_tracing(&config.log_level, SERVICE_NAME, config.otel_endpoint.as_deref());

    // Create the DogStatsD client
    let metrics = Metrics::new(&config.statsd_socket)?;

    // Print startup banner
    print_banner(&config);

    // Create shutdown signal channel
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Spawn signal handler task
    tokio::spawn(async move {
        // Wait for SIGTERM or SIGINT (Ctrl+C)
        let ctrl_c = tokio::signal::ctrl_c();

        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            let mut sigterm =
                signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");

            tokio::select! {
                _ = ctrl_c => {
                    tracing::info!("Received SIGINT (Ctrl+C), initiating shutdown...");
                }
                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM, initiating shutdown...");
                }
            }
        }

        #[cfg(not(unix))]
        {
            ctrl_c.await.expect("failed to listen for ctrl+c");
            tracing::info!("Received Ctrl+C, initiating shutdown...");
        }

        // Signal shutdown
        let _ = shutdown_tx.send(true);
    });

    // Run the emission loop
    run_emitter(metrics, config.interval(), shutdown_rx).await?;

    // Flush exported spans before exiting
    shutdown_tracing().await;

    tracing::info!("Beacon shutdown complete");
    Ok(())
}
