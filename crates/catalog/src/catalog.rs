//! The in-memory catalog and the `CatalogSource` seam.
//!
//! A `Catalog` is built once at process start, validated, and then only
//! ever read. Offers keep their insertion order; that order is the display
//! order of every selection made from the catalog.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::HotelOffer;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::Path;

/// Read-only access to a sequence of offers.
///
/// The recommendation engine only depends on this trait, so a live
/// inventory feed can replace the static catalog without touching the
/// selection logic.
pub trait CatalogSource: Send + Sync {
    /// All offers in stored order
    fn offers(&self) -> &[HotelOffer];

    /// Number of offers
    fn len(&self) -> usize {
        self.offers().len()
    }

    fn is_empty(&self) -> bool {
        self.offers().is_empty()
    }

    /// First `n` offers in stored order, no filtering
    fn preview(&self, n: usize) -> &[HotelOffer] {
        let offers = self.offers();
        &offers[..n.min(offers.len())]
    }
}

/// Immutable, validated collection of hotel offers
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    offers: Vec<HotelOffer>,
}

impl Catalog {
    /// Build a catalog from offers, validating every entry.
    ///
    /// ## Checks
    /// 1. `name` and `city` are non-empty
    /// 2. `name` is unique within its city (city compared case-insensitively)
    /// 3. every price has a currency and a finite, non-negative amount
    pub fn from_offers(offers: Vec<HotelOffer>) -> Result<Self> {
        let mut seen: HashSet<(String, String)> = HashSet::with_capacity(offers.len());

        for (position, offer) in offers.iter().enumerate() {
            if offer.name.trim().is_empty() {
                return Err(CatalogError::EmptyField { position, field: "hotel_name" });
            }
            if offer.city.trim().is_empty() {
                return Err(CatalogError::EmptyField { position, field: "city" });
            }

            let key = (offer.city.to_lowercase(), offer.name.clone());
            if !seen.insert(key) {
                return Err(CatalogError::DuplicateOffer {
                    name: offer.name.clone(),
                    city: offer.city.clone(),
                });
            }

            for quote in offer.price.iter().chain(offer.price_sources.iter()) {
                if !quote.per_night.is_finite() || quote.per_night < 0.0 {
                    return Err(CatalogError::InvalidPrice {
                        name: offer.name.clone(),
                        value: quote.per_night,
                    });
                }
                if quote.currency.trim().is_empty() {
                    return Err(CatalogError::MissingCurrency { name: offer.name.clone() });
                }
            }
        }

        Ok(Self { offers })
    }

    /// Load a catalog from a JSON file or a directory of JSON files.
    ///
    /// Directory files are parsed in parallel with Rayon and concatenated
    /// in file-name order, so the resulting order is deterministic.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CatalogError::NotFound {
                path: path.display().to_string(),
            });
        }

        let offers = if path.is_dir() {
            let files = parser::catalog_files(path)?;
            let parsed: Vec<Vec<HotelOffer>> = files
                .par_iter()
                .map(|file| parser::parse_file(file))
                .collect::<Result<_>>()?;
            parsed.into_iter().flatten().collect()
        } else {
            parser::parse_file(path)?
        };

        let catalog = Self::from_offers(offers)?;
        tracing::info!(
            "Loaded {} offers in {} cities from {}",
            catalog.offers.len(),
            catalog.cities().len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Distinct cities in first-seen order
    pub fn cities(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.offers
            .iter()
            .filter(|offer| seen.insert(offer.city.to_lowercase()))
            .map(|offer| offer.city.as_str())
            .collect()
    }
}

impl CatalogSource for Catalog {
    fn offers(&self) -> &[HotelOffer] {
        &self.offers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_duplicate_name_in_same_city() {
        let offers = vec![
            HotelOffer::new("Hilton", "Makkah"),
            HotelOffer::new("Hilton", "MAKKAH"),
        ];
        let err = Catalog::from_offers(offers).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateOffer { .. }));
    }

    #[test]
    fn test_same_name_in_different_cities_is_allowed() {
        let offers = vec![
            HotelOffer::new("Hilton", "Makkah"),
            HotelOffer::new("Hilton", "Medina"),
        ];
        let catalog = Catalog::from_offers(offers).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.cities(), vec!["Makkah", "Medina"]);
    }

    #[test]
    fn test_rejects_empty_name_and_city() {
        let err = Catalog::from_offers(vec![HotelOffer::new("  ", "Makkah")]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyField { field: "hotel_name", .. }));

        let err = Catalog::from_offers(vec![HotelOffer::new("Hilton", "")]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyField { field: "city", .. }));
    }

    #[test]
    fn test_rejects_price_without_currency() {
        let offer = HotelOffer::new("Hilton", "Makkah").with_price(380.0, "", "booking.com");
        let err = Catalog::from_offers(vec![offer]).unwrap_err();
        assert!(matches!(err, CatalogError::MissingCurrency { .. }));
    }

    #[test]
    fn test_rejects_negative_price() {
        let offer = HotelOffer::new("Hilton", "Makkah").with_price(-1.0, "EUR", "booking.com");
        let err = Catalog::from_offers(vec![offer]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPrice { .. }));
    }

    #[test]
    fn test_preview_is_a_prefix() {
        let offers = (0..5)
            .map(|i| HotelOffer::new(format!("Hotel {i}"), "Makkah"))
            .collect();
        let catalog = Catalog::from_offers(offers).unwrap();

        let preview = catalog.preview(3);
        assert_eq!(preview.len(), 3);
        assert_eq!(preview[0].name, "Hotel 0");
        assert_eq!(preview[2].name, "Hotel 2");

        assert_eq!(catalog.preview(10).len(), 5);
        assert!(Catalog::default().preview(3).is_empty());
    }

    #[test]
    fn test_preview_through_source_trait_object() {
        let source: Box<dyn CatalogSource> = Box::new(Catalog::seed().unwrap());
        let names: Vec<&str> = source.preview(2).iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Swissôtel Makkah", "Hilton Suites Makkah"]);
        assert_eq!(source.preview(0).len(), 0);
    }
}
