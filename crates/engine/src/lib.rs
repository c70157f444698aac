//! Recommendation engine for curated pilgrimage hotel offers.
//!
//! This crate provides:
//! - `FilterCriteria` and decoding of the inbound request body
//! - The `Stage` trait and the `StagePipeline` that composes stages
//! - The city, halal and budget-tier stages
//! - `RecommendationEngine`, which adds the Ultra-Luxury fallback
//!
//! ## Architecture
//! Selection is a fixed sequence of named stages, each operating on the
//! output of the previous one:
//! 1. `CityMatchStage` keeps offers in the requested city (case-insensitive)
//! 2. `HalalStage` drops uncertified offers when certification is required
//! 3. `BudgetTierStage` keeps offers whose price lies in the requested tier
//!
//! An empty Ultra-Luxury selection is re-run without stage 3.
//!
//! ## Example Usage
//! ```ignore
//! use catalog::{BudgetCategory, Catalog};
//! use engine::{FilterCriteria, RecommendationEngine};
//!
//! let catalog = Catalog::seed()?;
//! let engine = RecommendationEngine::new();
//!
//! let criteria = FilterCriteria::new("Makkah")
//!     .with_budget(BudgetCategory::Premium)
//!     .with_halal(true);
//! let offers = engine.select(&catalog, &criteria)?;
//! ```

pub mod criteria;
pub mod engine;
pub mod error;
pub mod fallback;
pub mod stage_pipeline;
pub mod stages;
pub mod traits;

// Re-export main types
pub use criteria::{FilterCriteria, RecommendationRequest};
pub use engine::{select, RecommendationEngine};
pub use error::{EngineError, Result};
pub use stage_pipeline::StagePipeline;
pub use traits::Stage;
