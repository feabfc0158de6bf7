//! Tracing setup for the guestbook service.
//!
//! Console output is always on. With the `otel` feature, spans are also
//! exported over OTLP when `OTEL_ENABLED` or `OTEL_EXPORTER_OTLP_ENDPOINT`
//! is set.

use tracing_subscriber::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "guestbook_service=info,tower_http=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into())
}

#[cfg(not(feature = "otel"))]
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(not(feature = "otel"))]
pub fn shutdown_tracing() {}

#[cfg(feature = "otel")]
pub use self::otel::{init_tracing, shutdown_tracing};

#[cfg(feature = "otel")]
mod otel {
    use std::env;

    use once_cell::sync::OnceCell;
    use opentelemetry::global;
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::propagation::TraceContextPropagator;
    use opentelemetry_sdk::trace::SdkTracerProvider;
    use opentelemetry_sdk::Resource;
    use opentelemetry_semantic_conventions::resource::{SERVICE_NAME, SERVICE_VERSION};
    use tracing_opentelemetry::OpenTelemetryLayer;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    use super::env_filter;

    static TRACER_PROVIDER: OnceCell<SdkTracerProvider> = OnceCell::new();

    fn is_enabled() -> bool {
        if let Ok(enabled) = env::var("OTEL_ENABLED") {
            if matches!(enabled.as_str(), "true" | "1" | "yes") {
                return true;
            }
        }
        env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .map(|value| !value.trim().is_empty())
            .unwrap_or(false)
    }

    fn service_name() -> String {
        env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "guestbook-service".to_string())
    }

    fn service_version() -> String {
        env::var("APP_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string())
    }

    fn init_console_only() {
        tracing_subscriber::registry()
            .with(env_filter())
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    pub fn init_tracing() {
        if !is_enabled() {
            init_console_only();
            return;
        }

        global::set_text_map_propagator(TraceContextPropagator::new());

        let mut exporter_builder = opentelemetry_otlp::SpanExporter::builder().with_http();
        if let Ok(endpoint) = env::var("OTEL_EXPORTER_OTLP_ENDPOINT") {
            let endpoint = endpoint.trim();
            if !endpoint.is_empty() {
                exporter_builder = exporter_builder.with_endpoint(endpoint.to_string());
            }
        }

        let exporter = match exporter_builder.build() {
            Ok(exporter) => exporter,
            Err(err) => {
                init_console_only();
                tracing::warn!("Failed to initialize OTLP exporter, console only: {err}");
                return;
            }
        };

        let resource = Resource::builder()
            .with_attribute(KeyValue::new(SERVICE_NAME, service_name()))
            .with_attribute(KeyValue::new(SERVICE_VERSION, service_version()))
            .build();

        let tracer_provider = SdkTracerProvider::builder()
            .with_batch_exporter(exporter)
            .with_resource(resource)
            .build();

        let _ = TRACER_PROVIDER.set(tracer_provider.clone());
        global::set_tracer_provider(tracer_provider.clone());
        let tracer = tracer_provider.tracer("guestbook_service");

        tracing_subscriber::registry()
            .with(env_filter())
            .with(tracing_subscriber::fmt::layer())
            .with(OpenTelemetryLayer::new(tracer))
            .init();
    }

    pub fn shutdown_tracing() {
        if let Some(provider) = TRACER_PROVIDER.get() {
            if let Err(err) = provider.shutdown() {
                tracing::warn!("Failed to shutdown tracer provider: {err}");
            }
        }
    }
}
