//! Server crate for the Umrah hotel recommendation service.
//!
//! This crate contains the HTTP boundary around the engine: routing,
//! request decoding, error-to-status mapping and configuration.

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod routes;

pub use config::ServerConfig;
pub use error::ApiError;
pub use orchestrator::RecommendationOrchestrator;
pub use routes::{build_router, AppState, RECOMMENDATIONS_PATH};

use std::sync::Arc;

use anyhow::{Context, Result};
use catalog::{Catalog, CatalogSource};
use tokio::net::TcpListener;
use tracing::info;

/// Load the configured catalog, or the built-in seed catalog
pub fn load_catalog(config: &ServerConfig) -> Result<Catalog> {
    match &config.catalog_path {
        Some(path) => Catalog::load_from_path(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => Catalog::seed().context("Failed to build seed catalog"),
    }
}

/// Bind and serve until the process is stopped
pub async fn serve(config: ServerConfig, catalog: Arc<dyn CatalogSource>) -> Result<()> {
    let orchestrator = RecommendationOrchestrator::new(catalog, config.preview_size);
    let app = build_router(AppState::new(orchestrator, config.request_timeout));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
