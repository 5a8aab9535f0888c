//! DogStatsD metrics client.
//!
//! Wraps a `cadence` client over the agent's Unix domain socket:
//! - Counters are encoded as plain-text DogStatsD datagrams
//! - Each emission is one synchronous, unbuffered datagram write
//! - Local socket errors surface to the caller and are fatal upstream

use std::os::unix::net::UnixDatagram;
use std::path::Path;

use cadence::prelude::*;
use cadence::{MetricError, StatsdClient, UnixMetricSink};
use thiserror::Error;

/// Error type for metric emission.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Failed to open statsd socket: {0}")]
    Socket(#[from] std::io::Error),

    #[error("Failed to send metric: {0}")]
    Send(#[from] MetricError),
}

/// Handle for sending counters to the agent.
///
/// Metric names and tags pass through unprefixed, exactly as given.
pub struct Metrics {
    client: StatsdClient,
}

impl Metrics {
    /// Create a client sending datagrams to the given socket path.
    ///
    /// The datagram socket stays unconnected, so a missing or dead agent
    /// socket shows up as a send error rather than here.
    ///
    /// # Arguments
    ///
    /// * `socket_path` - Path of the agent's DogStatsD Unix domain socket
    pub fn new<P: AsRef<Path>>(socket_path: P) -> Result<Self, MetricsError> {
        let socket = UnixDatagram::unbound()?;
        let sink = UnixMetricSink::from(socket_path, socket);
        Ok(Self {
            client: StatsdClient::from_sink("", sink),
        })
    }

    /// Wrap a prebuilt `cadence` client.
    ///
    /// Lets tests substitute capturing or failing sinks for the socket.
    pub fn from_client(client: StatsdClient) -> Self {
        Self { client }
    }

    /// Increment `name` by 1 with the given `key:value` tags.
    pub fn increment(&self, name: &str, tags: &[(&str, &str)]) -> Result<(), MetricsError> {
        let mut builder = self.client.incr_with_tags(name);
        for &(key, value) in tags {
            builder = builder.with_tag(key, value);
        }
        builder.try_send()?;
        Ok(())
    }

    /// Decrement `name` by 1 with the given `key:value` tags.
    pub fn decrement(&self, name: &str, tags: &[(&str, &str)]) -> Result<(), MetricsError> {
        let mut builder = self.client.decr_with_tags(name);
        for &(key, value) in tags {
            builder = builder.with_tag(key, value);
        }
        builder.try_send()?;
        Ok(())
    }
}
