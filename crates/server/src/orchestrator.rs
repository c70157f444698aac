//! # Recommendation Orchestrator
//!
//! Glue between the HTTP boundary and the engine:
//! 1. Hold the shared, read-only catalog and the engine
//! 2. Run each selection on the blocking pool so request workers stay free
//! 3. Serve the unfiltered preview read path
//! 4. Log counts and timing per request

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use catalog::{CatalogSource, HotelOffer};
use engine::{EngineError, FilterCriteria, RecommendationEngine};

/// Coordinates catalog access and selection for the HTTP boundary
#[derive(Clone)]
pub struct RecommendationOrchestrator {
    catalog: Arc<dyn CatalogSource>,
    engine: Arc<RecommendationEngine>,
    preview_size: usize,
}

impl RecommendationOrchestrator {
    /// Create an orchestrator over an injected catalog source.
    ///
    /// # Arguments
    /// * `catalog` - Shared, read-only offer source
    /// * `preview_size` - Number of offers returned by the preview read path
    pub fn new(catalog: Arc<dyn CatalogSource>, preview_size: usize) -> Self {
        Self {
            catalog,
            engine: Arc::new(RecommendationEngine::new()),
            preview_size,
        }
    }

    /// Main entry point: select offers for one request.
    ///
    /// A panic inside the selection is reported as `InternalFailure`.
    pub async fn get_recommendations(
        &self,
        criteria: FilterCriteria,
    ) -> Result<Vec<HotelOffer>, EngineError> {
        let start_time = Instant::now();

        let catalog = self.catalog.clone();
        let engine = self.engine.clone();
        let city = criteria.city.clone();
        let selected = tokio::task::spawn_blocking(move || engine.select(catalog.as_ref(), &criteria))
            .await
            .map_err(|e| EngineError::internal(format!("selection task failed: {e}")))??;

        info!(
            "Selected {} offers for {} in {:.2?}",
            selected.len(),
            city,
            start_time.elapsed()
        );
        Ok(selected)
    }

    /// First `preview_size` offers in catalog order, engine bypassed
    pub fn preview(&self) -> Vec<HotelOffer> {
        let preview = self.catalog.preview(self.preview_size).to_vec();
        debug!("Serving preview of {} offers", preview.len());
        preview
    }

    /// Number of offers in the catalog
    pub fn catalog_size(&self) -> usize {
        self.catalog.len()
    }
}
