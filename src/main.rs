use anyhow::Context;
use dotenv::dotenv;
use std::env;
use todo_rest::{SharedData, app_env, logging};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if dotenv().is_err() {
        println!("No .env file found, reading configuration from the environment only.");
    }

    let otel_exporters = match (
        env::var(app_env::OTEL_SPAN_EXPORT_URL),
        env::var(app_env::OTEL_METRIC_EXPORT_URL),
    ) {
        (Ok(span_url), Ok(metric_url)) => Some(logging::init_exporters(&span_url, &metric_url)?),
        _ => None,
    };
    let exporting_telemetry = otel_exporters.is_some();
    logging::setup_logging_and_tracing(logging::init_env_filter()?, otel_exporters);
    if !exporting_telemetry {
        warn!(
            "{} and {} are not both set, telemetry will only be logged to stdout",
            app_env::OTEL_SPAN_EXPORT_URL,
            app_env::OTEL_METRIC_EXPORT_URL
        );
    }

    let server_address = env::var(app_env::SERVER_ADDRESS)
        .unwrap_or_else(|_| app_env::DEFAULT_SERVER_ADDRESS.to_owned());
    let listener = TcpListener::bind(&server_address)
        .await
        .with_context(|| format!("binding to {server_address}"))?;

    info!("Starting server on {server_address}");
    axum::serve(listener, todo_rest::build_app(SharedData::default()))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP requests")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => warn!("Could not listen for the shutdown signal, stopping now: {err}"),
    }
}
