//! Core trait for the selection pipeline.
//!
//! Each stage is one named predicate over the offers produced by the
//! previous stage.

use crate::criteria::FilterCriteria;
use crate::error::Result;
use catalog::HotelOffer;

/// A single named step of the selection pipeline.
///
/// ## Contract
/// - Stages only remove offers; they never reorder or modify them
/// - `Send + Sync` so a pipeline can be shared across request workers
/// - Stages take ownership of the Vec and return the kept subset
pub trait Stage: Send + Sync {
    /// Returns the name of this stage (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this stage to the offers that survived the previous stage.
    ///
    /// # Returns
    /// * `Ok(Vec<HotelOffer>)` - The kept offers, in input order
    /// * `Err` - If the criteria cannot be evaluated
    fn apply(&self, offers: Vec<HotelOffer>, criteria: &FilterCriteria) -> Result<Vec<HotelOffer>>;
}
