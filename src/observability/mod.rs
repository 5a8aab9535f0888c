//! Observability infrastructure.
//!
//! Provides:
//! - DogStatsD counter emission over a Unix domain socket
//! - Structured tracing with optional OTLP span export

pub mod metrics;
pub mod tracing;
