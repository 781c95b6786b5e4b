use std::sync::Arc;
use anyhow::Context;
use axum::Router;
use dotenv::dotenv;
use tower::ServiceBuilder;
use crate::config::ServerConfig;
use crate::models::app_state::AppState;
use crate::observability::metrics::init_metrics;
use crate::routes::asset_routes::asset_routes;
use crate::routes::feedback_routes::feedback_routes;
use crate::services::http_tracing::http_trace_layer;
use crate::services::tracing::init_tracing;

mod config;
mod controllers;
mod models;
mod observability;
mod routes;
mod services;


#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let _guard = init_tracing();
    let config = ServerConfig::from_env().context("invalid server configuration")?;

    if let Some(metrics_addr) = config.metrics_addr() {
        init_metrics(metrics_addr).context("failed to start prometheus exporter")?;
    }

    let state = AppState::new(config.wrapper_preset).context("failed to compile page templates")?;
    tracing::info!("using wrapper preset {}", state.renderer.preset());

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);
    let tcp_listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    axum::serve(tcp_listener, routes(Arc::new(state)))
        .await
        .context("server terminated")?;
    Ok(())
}


fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/feedback", feedback_routes())
        .nest("/styles", asset_routes())
        .layer(ServiceBuilder::new().layer(http_trace_layer()))
        .with_state(state)
}
