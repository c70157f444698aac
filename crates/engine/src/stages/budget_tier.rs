//! Stage that keeps offers inside the requested budget tier.
//!
//! The tier ranges themselves live on `BudgetCategory`; this stage only
//! applies them to each offer's effective price (price, or 0 if absent).

use crate::criteria::FilterCriteria;
use crate::error::Result;
use crate::traits::Stage;
use catalog::HotelOffer;

/// Keeps offers whose effective nightly price falls in the requested tier.
/// A no-op when no tier was requested.
pub struct BudgetTierStage;

impl Stage for BudgetTierStage {
    fn name(&self) -> &str {
        "BudgetTierStage"
    }

    fn apply(&self, offers: Vec<HotelOffer>, criteria: &FilterCriteria) -> Result<Vec<HotelOffer>> {
        let Some(tier) = criteria.budget_category else {
            return Ok(offers);
        };
        Ok(offers
            .into_iter()
            .filter(|offer| tier.contains(offer.effective_price()))
            .collect())
    }
}
