//! The telemetry emission loop.
//!
//! Each cycle:
//! - Opens a `simple.operation` span and tags it `environment=fargate`
//! - Increments `containerspod.isthebest` and decrements
//!   `failedatdoing.ecsfargatelogging` over DogStatsD
//! - Logs a confirmation line, closes the span, and sleeps
//!
//! There is deliberately no retry or reconnect here: a failed emission
//! propagates out of the loop and takes the process down with it. A
//! supervisor owns restarts.

use std::time::Duration;

use tokio::sync::watch;

use crate::observability::metrics::{Metrics, MetricsError};

/// Run the emission loop until a shutdown signal arrives.
///
/// The signal is only observed between cycles, while sleeping; a cycle that
/// has started always finishes (or fails) as a unit.
///
/// # Arguments
///
/// * `metrics` - DogStatsD client used for counter emission
/// * `interval` - Sleep between cycles
/// * `shutdown_rx` - Receiver for shutdown signal
///
/// # Returns
///
/// Returns when shut down, or the first emission error.
pub async fn run_emitter(
    metrics: Metrics,
    interval: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) -> Result<(), MetricsError> {
    let mut cycle: u64 = 0;
    loop {
        cycle += 1;
        emit_cycle(&metrics, cycle)?;

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = shutdown_rx.changed() => {
                tracing::info!(cycles = cycle, "Shutdown signal received, stopping emitter");
                return Ok(());
            }
        }
    }
}

/// Emit one telemetry cycle: span, tag, increment, decrement, log line.
///
/// The span wraps the whole cycle and closes on every exit path, including
/// the early return when a counter fails to send.
#[tracing::instrument(name = "simple.operation", skip_all, fields(environment))]
pub fn emit_cycle(metrics: &Metrics, cycle: u64) -> Result<(), MetricsError> {
    tracing::Span::current().record("environment", "fargate");

    metrics.increment("containerspod.isthebest", &[("environment", "lowkey")])?;
    metrics.decrement("failedatdoing.ecsfargatelogging", &[("environment", "sad")])?;

    tracing::info!(cycle, "Sent metrics and generated trace");
    Ok(())
}
