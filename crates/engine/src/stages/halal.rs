//! Stage that enforces the halal-certification requirement.

use crate::criteria::FilterCriteria;
use crate::error::Result;
use crate::traits::Stage;
use catalog::HotelOffer;

/// When `halal_required` is set, keeps only offers explicitly marked as
/// certified. A missing flag counts as not certified. Otherwise a no-op.
pub struct HalalStage;

impl Stage for HalalStage {
    fn name(&self) -> &str {
        "HalalStage"
    }

    fn apply(&self, offers: Vec<HotelOffer>, criteria: &FilterCriteria) -> Result<Vec<HotelOffer>> {
        if !criteria.halal_required {
            return Ok(offers);
        }
        Ok(offers
            .into_iter()
            .filter(HotelOffer::is_halal_certified)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offers() -> Vec<HotelOffer> {
        vec![
            HotelOffer::new("Certified", "Makkah").with_halal(true),
            HotelOffer::new("Not Certified", "Makkah").with_halal(false),
            HotelOffer::new("Unknown", "Makkah"),
        ]
    }

    #[test]
    fn test_halal_required_keeps_only_certified() {
        let criteria = FilterCriteria::new("Makkah").with_halal(true);
        let selected = HalalStage.apply(offers(), &criteria).unwrap();

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "Certified");
    }

    #[test]
    fn test_halal_not_required_is_noop() {
        let selected = HalalStage.apply(offers(), &FilterCriteria::new("Makkah")).unwrap();
        assert_eq!(selected, offers());
    }
}
