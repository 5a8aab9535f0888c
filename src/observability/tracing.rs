//! Tracing setup with optional OpenTelemetry span export.
//!
//! Configures structured logging with:
//! - Console output via `tracing-subscriber`
//! - Environment-based console filter (via RUST_LOG)
//! - OTLP span export carrying the service resource, when an endpoint is set

use opentelemetry::trace::TraceError;
use opentelemetry::{global, KeyValue};
use opentelemetry_sdk::trace as sdktrace;
use opentelemetry_sdk::Resource;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing for the given service.
///
/// Span export runs only when `otel_endpoint` is set; without it spans are
/// still recorded locally, just not exported. `RUST_LOG` governs console
/// verbosity only and does not gate span recording or export. A failed
/// exporter setup is logged and degrades to local-only spans rather than
/// aborting startup.
///
/// # Arguments
///
/// * `log_level` - Default log level when `RUST_LOG` is unset
/// * `service_name` - Value of the `service.name` resource on exported spans
/// * `otel_endpoint` - Optional OTLP collector endpoint
///
/// # Panics
///
/// Panics if tracing has already been initialized.
pub fn init_tracing(log_level: &str, service_name: &str, otel_endpoint: Option<&str>) {
    // The filter sits on the fmt layer rather than the registry, so it only
    // gates what reaches the console; spans are recorded and exported at any
    // log level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{log_level},beacon=debug")));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(filter);

    // The exporter outcome is reported after init, once a subscriber exists
    // to receive the log line.
    let (otel_layer, otel_error) = match otel_endpoint {
        Some(endpoint) => match install_span_exporter(service_name, endpoint) {
            Ok(tracer) => (Some(tracing_opentelemetry::layer().with_tracer(tracer)), None),
            Err(e) => (None, Some(e)),
        },
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(otel_layer)
        .init();

    tracing::info!(service = service_name, "Tracing initialized");
    match (otel_endpoint, otel_error) {
        (Some(endpoint), None) => {
            tracing::info!(endpoint, "OTLP span exporter configured");
        }
        (_, Some(e)) => {
            tracing::warn!(error = %e, "Failed to create OTLP span exporter, spans will not be exported");
        }
        _ => {}
    }
}

/// Build the OTLP pipeline and register its provider globally.
fn install_span_exporter(
    service_name: &str,
    endpoint: &str,
) -> Result<sdktrace::Tracer, TraceError> {
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry_otlp::{Protocol, WithExportConfig};

    let exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(endpoint)
        .with_protocol(Protocol::Grpc);

    let provider = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(exporter)
        .with_trace_config(sdktrace::Config::default().with_resource(Resource::new(vec![
            KeyValue::new("service.name", service_name.to_string()),
        ])))
        .install_batch(opentelemetry_sdk::runtime::Tokio)?;

    let tracer = provider.tracer("beacon");
    global::set_tracer_provider(provider);
    Ok(tracer)
}

/// Flush buffered spans and shut down the exporter.
///
/// The flush blocks on exporter I/O, so it runs off the async runtime.
pub async fn shutdown_tracing() {
    let _ = tokio::task::spawn_blocking(global::shutdown_tracer_provider).await;
}

/// Initialize tracing for tests (only logs errors).
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("error")
        .with_test_writer()
        .try_init();
}
