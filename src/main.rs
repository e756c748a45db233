//! # Cambio API
//!
//! Main entry point for the exchange-rate façade service.

use cambio_api::api::rest::handlers::AppState;
use cambio_api::api::rest::routes::create_router;
use cambio_api::application::services::{DifferencesService, OrderService, QuotationService};
use cambio_api::infrastructure::bluelytics::BluelyticsClient;
use std::sync::Arc;
use tracing::{error, info};

mod config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.log);

    info!(
        "Starting {} v{}",
        config.service_name,
        env!("CARGO_PKG_VERSION")
    );

    let source = BluelyticsClient::new(reqwest::Client::new(), &config.upstream.quotation_url);
    let state = Arc::new(AppState {
        quotation: QuotationService::new(Arc::new(source)),
        differences: DifferencesService::new(),
        orders: OrderService::new(),
    });

    let router = create_router(state);
    let addr = config.rest.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("REST server listening on {addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down {}", config.service_name);

    Ok(())
}

fn init_tracing(log: &config::LogConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match log.format {
        config::LogFormat::Json => builder.json().init(),
        config::LogFormat::Pretty => builder.pretty().init(),
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
    }
}
