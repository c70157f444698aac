//! Core domain types for the hotel catalog.
//!
//! Field names follow Rust conventions; the serde attributes map them to
//! the external JSON casing the booking front end already speaks
//! (`hotel_name`, `simulated_price.per_night`, `umrah_features`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Nightly amount in the quote's currency
pub type Amount = f64;

// =============================================================================
// Offer Types
// =============================================================================

/// A single curated hotel offer.
///
/// Offers are immutable once they are part of a `Catalog`; every optional
/// field is omitted from serialized output when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelOffer {
    #[serde(rename = "hotel_name")]
    pub name: String,

    /// Name in the local script, e.g. Arabic
    #[serde(rename = "arabic_name", default, skip_serializing_if = "Option::is_none")]
    pub localized_name: Option<String>,

    /// Matched case-insensitively against the requested city
    pub city: String,

    /// Free-form label such as "200m"; display only
    #[serde(rename = "distance_to_haram", default, skip_serializing_if = "Option::is_none")]
    pub distance_to_landmark: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star_rating: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,

    /// `None` counts as "not certified" when filtering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub halal_certified: Option<bool>,

    /// The headline price shown on the offer card
    #[serde(rename = "simulated_price", default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceQuote>,

    /// Alternative quotes from other booking sites, display only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub price_sources: Vec<PriceQuote>,

    /// Outbound call-to-action URL
    #[serde(rename = "commission_link", default, skip_serializing_if = "Option::is_none")]
    pub booking_link: Option<String>,

    #[serde(rename = "umrah_features", default, skip_serializing_if = "Option::is_none")]
    pub features: Option<OfferFeatures>,
}

impl HotelOffer {
    /// Create an offer with only the required fields set
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            localized_name: None,
            city: city.into(),
            distance_to_landmark: None,
            rating: None,
            star_rating: None,
            images: Vec::new(),
            halal_certified: None,
            price: None,
            price_sources: Vec::new(),
            booking_link: None,
            features: None,
        }
    }

    /// Builder-style setter for the headline price
    pub fn with_price(mut self, per_night: Amount, currency: &str, source: &str) -> Self {
        self.price = Some(PriceQuote {
            source: source.to_string(),
            per_night,
            currency: currency.to_string(),
        });
        self
    }

    /// Builder-style setter for the certification flag
    pub fn with_halal(mut self, certified: bool) -> Self {
        self.halal_certified = Some(certified);
        self
    }

    /// Price used for tier comparison: the headline price, or 0 when absent
    pub fn effective_price(&self) -> Amount {
        self.price.as_ref().map(|p| p.per_night).unwrap_or(0.0)
    }

    /// True only when the offer explicitly says it is certified
    pub fn is_halal_certified(&self) -> bool {
        self.halal_certified == Some(true)
    }

    /// Case-insensitive city comparison
    pub fn in_city(&self, city: &str) -> bool {
        self.city.to_lowercase() == city.to_lowercase()
    }

    /// Difference between the most expensive alternative quote and the
    /// headline price, never negative. Zero when either side is missing.
    pub fn savings(&self) -> Amount {
        let Some(price) = &self.price else {
            return 0.0;
        };
        self.price_sources
            .iter()
            .map(|quote| quote.per_night)
            .reduce(Amount::max)
            .map(|highest| (highest - price.per_night).max(0.0))
            .unwrap_or(0.0)
    }
}

/// A nightly price together with its currency and origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Where the figure came from, e.g. "booking.com"
    pub source: String,
    pub per_night: Amount,
    /// ISO currency code
    pub currency: String,
}

/// Pilgrimage-specific amenities
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferFeatures {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub halal_certified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_to_haram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prayer_facilities: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shuttle_service: Option<bool>,
}

// =============================================================================
// Budget Tiers
// =============================================================================

/// The five ordered budget tiers.
///
/// Ranges are half-open on the left and contiguous, so each boundary value
/// belongs to the lower tier:
///
/// | tier         | nightly price    |
/// |--------------|------------------|
/// | Budget       | `p <= 150`       |
/// | Mid-Range    | `150 < p <= 300` |
/// | Premium      | `300 < p <= 500` |
/// | Luxury       | `500 < p <= 700` |
/// | Ultra-Luxury | `p > 700`        |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BudgetCategory {
    Budget,
    #[serde(rename = "Mid-Range")]
    MidRange,
    Premium,
    Luxury,
    #[serde(rename = "Ultra-Luxury")]
    UltraLuxury,
}

impl BudgetCategory {
    /// All tiers from cheapest to most expensive
    pub const ALL: [BudgetCategory; 5] = [
        BudgetCategory::Budget,
        BudgetCategory::MidRange,
        BudgetCategory::Premium,
        BudgetCategory::Luxury,
        BudgetCategory::UltraLuxury,
    ];

    /// Exclusive lower bound and inclusive upper bound of the tier
    pub fn bounds(self) -> (Option<Amount>, Option<Amount>) {
        match self {
            BudgetCategory::Budget => (None, Some(150.0)),
            BudgetCategory::MidRange => (Some(150.0), Some(300.0)),
            BudgetCategory::Premium => (Some(300.0), Some(500.0)),
            BudgetCategory::Luxury => (Some(500.0), Some(700.0)),
            BudgetCategory::UltraLuxury => (Some(700.0), None),
        }
    }

    /// Whether `price` falls inside this tier
    pub fn contains(self, price: Amount) -> bool {
        let (lower, upper) = self.bounds();
        lower.is_none_or(|lo| price > lo) && upper.is_none_or(|hi| price <= hi)
    }

    /// The single tier a price belongs to
    pub fn for_price(price: Amount) -> BudgetCategory {
        Self::ALL
            .into_iter()
            .find(|tier| tier.contains(price))
            .unwrap_or(BudgetCategory::Budget)
    }

    /// External string form, identical to the JSON representation
    pub fn as_str(self) -> &'static str {
        match self {
            BudgetCategory::Budget => "Budget",
            BudgetCategory::MidRange => "Mid-Range",
            BudgetCategory::Premium => "Premium",
            BudgetCategory::Luxury => "Luxury",
            BudgetCategory::UltraLuxury => "Ultra-Luxury",
        }
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown budget category '{s}'"))
    }
}
