//! Stage implementations for the selection pipeline.
//!
//! Each stage is independently testable; `RecommendationEngine` composes
//! them in the order city → halal → budget tier.

pub mod budget_tier;
pub mod city_match;
pub mod halal;

// Re-export for convenience
pub use budget_tier::BudgetTierStage;
pub use city_match::CityMatchStage;
pub use halal::HalalStage;
