//! The Ultra-Luxury fallback.
//!
//! When nothing in the catalog is priced above the Ultra-Luxury floor, an
//! Ultra-Luxury request is re-evaluated without the tier constraint. No
//! other tier falls back.

use crate::criteria::FilterCriteria;
use crate::stage_pipeline::StagePipeline;
use crate::stages::{CityMatchStage, HalalStage};
use catalog::{BudgetCategory, HotelOffer};

/// Whether an empty primary selection should be re-run without the tier
pub fn should_fall_back(criteria: &FilterCriteria, selected: &[HotelOffer]) -> bool {
    selected.is_empty() && criteria.budget_category == Some(BudgetCategory::UltraLuxury)
}

/// The relaxed pipeline: city and halal only, price ignored
pub fn relaxed_pipeline() -> StagePipeline {
    StagePipeline::new()
        .add_stage(CityMatchStage)
        .add_stage(HalalStage)
}
