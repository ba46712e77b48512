/// Address the HTTP server binds to, such as `0.0.0.0:8000`
pub const SERVER_ADDRESS: &str = "SERVER_ADDRESS";
/// Log level configuration for the application. For formatting info, see [tracing_subscriber's EnvFilter documentation](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html#directives)
pub const LOG_LEVEL: &str = "LOG_LEVEL";

/// OpenTelemetry span export URL. Usually http://localhost:4317 when an OpenTelemetry collector
/// sidecar runs next to the service. Spans are only exported when this and
/// [OTEL_METRIC_EXPORT_URL] are both set.
pub const OTEL_SPAN_EXPORT_URL: &str = "OTEL_SPAN_EXPORT_URL";
/// OpenTelemetry metrics export URL. Usually http://localhost:4317 when an OpenTelemetry collector
/// sidecar runs next to the service.
pub const OTEL_METRIC_EXPORT_URL: &str = "OTEL_METRIC_EXPORT_URL";

/// Listen address used when [SERVER_ADDRESS] is not set
pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8000";
