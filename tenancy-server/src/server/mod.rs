pub mod app;
pub mod handlers;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use tenancy::{DatasetStore, TenancyService};

use crate::config::ServerConfig;

pub async fn start_server(config: &ServerConfig) -> Result<()> {
    let store = DatasetStore::load(&config.dataset)
        .with_context(|| format!("Failed to load dataset {}", config.dataset))?;
    let service = TenancyService::new(Arc::new(store));

    let app = app::create_app(Arc::new(service), config.cors_origin.as_deref())?;

    log_routes();

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr.as_str())
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Running a GraphQL API server at http://{}/graphql", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn log_routes() {
    info!("API Endpoints:");
    info!("  /health                     - Health check");
    info!("  /graphql                    - GraphQL API (POST) & Playground (GET)");
}
