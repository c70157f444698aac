//! HTTP server binary for the recommendation service.
//!
//! Configuration comes from the environment, see `ServerConfig::from_env`.

use std::sync::Arc;

use anyhow::Result;
use catalog::CatalogSource;
use tracing::info;

use server::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,server=debug,engine=debug")
            }),
        )
        .init();

    let config = ServerConfig::from_env()?;
    info!("Starting Umrah recommendation server with {:?}", config);

    let catalog = server::load_catalog(&config)?;
    info!("Catalog ready with {} offers", catalog.len());

    server::serve(config, Arc::new(catalog)).await
}
