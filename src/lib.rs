//! Beacon: a periodic telemetry emission daemon.
//!
//! Beacon exercises a local Datadog agent on a fixed cadence: every cycle it
//! opens a trace span, sends one counter increment and one counter decrement
//! over the agent's DogStatsD socket, and logs a confirmation line.
//!
//! # Architecture
//!
//! - **DogStatsD**: counters leave as plain-text datagrams over a Unix domain
//!   socket, encoded and sent by the `cadence` client
//! - **Traced**: every cycle runs inside a `tracing` span, exported via OTLP
//!   when a collector endpoint is configured
//! - **Fail-Fast**: an emission failure aborts the cycle and the process; a
//!   supervisor owns restarts
//!
//! # Modules
//!
//! - [`config`]: CLI and environment configuration
//! - [`emitter`]: the emission loop
//! - [`observability`]: metrics client and tracing setup

// Lint configuration
#![warn(clippy::all)]
#![allow(
    clippy::module_name_repetitions, // observability::metrics::MetricsError is fine
    clippy::must_use_candidate,      // Not all functions need #[must_use]
    clippy::missing_errors_doc       // Error docs can be verbose
)]

pub mod config;
pub mod emitter;
pub mod observability;

/// Service identifier attached to every exported span.
///
/// Kept stable so dashboards and monitors keyed on this service name keep
/// matching across deployments.
pub const SERVICE_NAME: &str = "dogstatsd-python-app";
