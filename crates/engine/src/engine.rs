//! # Recommendation Engine
//!
//! Selects the offers to display for one set of filter criteria:
//! 1. Validate the criteria
//! 2. Run the primary pipeline (city → halal → budget tier)
//! 3. If the selection is empty and the tier was Ultra-Luxury, run the
//!    relaxed pipeline (city → halal) from the full catalog instead
//!
//! The result keeps catalog order. The engine holds no per-request state,
//! so one instance can serve any number of concurrent callers.

use crate::criteria::FilterCriteria;
use crate::error::Result;
use crate::fallback;
use crate::stage_pipeline::StagePipeline;
use crate::stages::{BudgetTierStage, CityMatchStage, HalalStage};
use catalog::{CatalogSource, HotelOffer};

pub struct RecommendationEngine {
    primary: StagePipeline,
    relaxed: StagePipeline,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self {
            primary: StagePipeline::new()
                .add_stage(CityMatchStage)
                .add_stage(HalalStage)
                .add_stage(BudgetTierStage),
            relaxed: fallback::relaxed_pipeline(),
        }
    }

    /// Select and order the offers matching `criteria`.
    ///
    /// # Returns
    /// * `Ok(offers)` - Possibly empty, in catalog order
    /// * `Err(InvalidRequest)` - The criteria were rejected before any stage ran
    pub fn select(
        &self,
        source: &dyn CatalogSource,
        criteria: &FilterCriteria,
    ) -> Result<Vec<HotelOffer>> {
        criteria.validate()?;

        let selected = self.primary.apply(source.offers().to_vec(), criteria)?;
        if !fallback::should_fall_back(criteria, &selected) {
            return Ok(selected);
        }

        tracing::debug!(
            "No Ultra-Luxury offers in {}, falling back to all qualifying offers",
            criteria.city
        );
        self.relaxed.apply(source.offers().to_vec(), criteria)
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper around a default engine
pub fn select(source: &dyn CatalogSource, criteria: &FilterCriteria) -> Result<Vec<HotelOffer>> {
    RecommendationEngine::new().select(source, criteria)
}
