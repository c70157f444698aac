//! Stage that keeps offers in the requested city.
//!
//! Always the first stage: it is the only one that can reject the request.

use crate::criteria::FilterCriteria;
use crate::error::{EngineError, Result};
use crate::traits::Stage;
use catalog::HotelOffer;

/// Keeps offers whose city equals the requested one, ignoring case.
///
/// ## Algorithm
/// 1. Reject a blank requested city with `InvalidRequest`
/// 2. Lowercase the requested city once
/// 3. Keep offers whose lowercased city is equal
pub struct CityMatchStage;

impl Stage for CityMatchStage {
    fn name(&self) -> &str {
        "CityMatchStage"
    }

    fn apply(&self, offers: Vec<HotelOffer>, criteria: &FilterCriteria) -> Result<Vec<HotelOffer>> {
        if criteria.city.trim().is_empty() {
            return Err(EngineError::invalid("city must not be empty"));
        }
        let wanted = criteria.city.to_lowercase();
        Ok(offers
            .into_iter()
            .filter(|offer| offer.city.to_lowercase() == wanted)
            .collect())
    }
}
