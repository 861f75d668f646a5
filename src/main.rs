// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_context::DashboardContext;
use crate::application::dataset_repository::DatasetRepository;
use crate::application::render_dispatcher::RenderDispatcher;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::csv_repository::CsvDatasetRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, index, list_tabs, render_tab};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_dashboard_config().context("failed to load dashboard configuration")?;

    // The dataset is read once; nothing below mutates it
    let repository = CsvDatasetRepository::new(config.dataset.path.clone());
    let dataset = repository
        .load_dataset()
        .await
        .context("failed to load viewership dataset")?;

    let context = Arc::new(DashboardContext::new(dataset));
    let dispatcher = RenderDispatcher::new(context, &config.defaults);
    let state = Arc::new(AppState { dispatcher });

    let router = Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .route("/api/tabs", get(list_tabs))
        .route("/api/tabs/:tab", get(render_tab))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Serving FunOlympics dashboard on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
