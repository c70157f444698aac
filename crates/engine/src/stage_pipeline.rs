//! The StagePipeline chains stages in a fixed order.

use crate::criteria::FilterCriteria;
use crate::error::Result;
use crate::traits::Stage;
use catalog::HotelOffer;

/// Chains multiple stages together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = StagePipeline::new()
///     .add_stage(CityMatchStage)
///     .add_stage(HalalStage)
///     .add_stage(BudgetTierStage);
///
/// let selected = pipeline.apply(offers, &criteria)?;
/// ```
pub struct StagePipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl StagePipeline {
    /// Create a new empty StagePipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Add a stage to the end of the pipeline (builder pattern).
    pub fn add_stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Stage names in execution order
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Apply all stages in sequence, each on the previous stage's output.
    ///
    /// Stops at the first stage that fails.
    pub fn apply(
        &self,
        offers: Vec<HotelOffer>,
        criteria: &FilterCriteria,
    ) -> Result<Vec<HotelOffer>> {
        let mut current = offers;
        for stage in &self.stages {
            let input_count = current.len();
            current = stage.apply(current, criteria)?;
            tracing::debug!(
                "Stage {} kept {} of {} offers",
                stage.name(),
                current.len(),
                input_count
            );
        }
        Ok(current)
    }
}

impl Default for StagePipeline {
    fn default() -> Self {
        Self::new()
    }
}
