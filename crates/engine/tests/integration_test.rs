//! Integration tests for the recommendation engine.
//!
//! These run the full selection (stages + fallback) against the curated
//! five-hotel Makkah catalog and a few hand-built catalogs.

use catalog::{BudgetCategory, Catalog, CatalogSource, HotelOffer};
use engine::{EngineError, FilterCriteria, RecommendationEngine};

fn prices(offers: &[HotelOffer]) -> Vec<f64> {
    offers.iter().map(|o| o.effective_price()).collect()
}

fn mixed_catalog() -> Catalog {
    Catalog::from_offers(vec![
        HotelOffer::new("Budget Inn", "Makkah").with_price(95.0, "EUR", "booking.com").with_halal(true),
        HotelOffer::new("Zamzam Tower", "Makkah").with_price(820.0, "EUR", "booking.com"),
        HotelOffer::new("Anwar Al Madinah", "Medina").with_price(260.0, "EUR", "booking.com").with_halal(true),
        HotelOffer::new("Clock Royal", "Makkah").with_price(1100.0, "EUR", "halalbooking.com").with_halal(true),
        HotelOffer::new("Unpriced Hostel", "makkah"),
        HotelOffer::new("Mid Hotel", "Makkah").with_price(240.0, "EUR", "booking.com").with_halal(false),
    ])
    .unwrap()
}

#[test]
fn test_premium_halal_scenario() {
    let catalog = Catalog::seed().unwrap();
    let criteria = FilterCriteria::from_json(
        br#"{"city":"Makkah","budget_category":"Premium","halal_required":true}"#,
    )
    .unwrap();

    let selected = RecommendationEngine::new().select(&catalog, &criteria).unwrap();
    // 650 is Luxury; every other seed price sits in (300, 500]
    assert_eq!(prices(&selected), vec![450.0, 380.0, 320.0, 420.0]);
    let names: Vec<&str> = selected.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Swissôtel Makkah",
            "Hilton Suites Makkah",
            "Dar Al Eiman Royal Hotel",
            "Mövenpick Hotel Hajar Tower",
        ]
    );
}

#[test]
fn test_ultra_luxury_fallback_scenario() {
    let catalog = Catalog::seed().unwrap();
    let criteria = FilterCriteria::from_json(
        br#"{"city":"Makkah","budget_category":"Ultra-Luxury","halal_required":false}"#,
    )
    .unwrap();

    let selected = RecommendationEngine::new().select(&catalog, &criteria).unwrap();
    assert_eq!(selected.as_slice(), catalog.offers());
}

#[test]
fn test_other_city_scenario_is_empty() {
    let catalog = Catalog::seed().unwrap();
    let selected = RecommendationEngine::new()
        .select(&catalog, &FilterCriteria::new("Medina"))
        .unwrap();
    assert!(selected.is_empty());
}

#[test]
fn test_non_ultra_tiers_never_fall_back() {
    let catalog = Catalog::seed().unwrap();
    let engine = RecommendationEngine::new();

    for tier in [BudgetCategory::Budget, BudgetCategory::MidRange] {
        let criteria = FilterCriteria::new("Makkah").with_budget(tier);
        assert!(engine.select(&catalog, &criteria).unwrap().is_empty(), "{tier}");
    }
}

#[test]
fn test_every_result_satisfies_filters() {
    let catalog = mixed_catalog();
    let engine = RecommendationEngine::new();

    for city in ["Makkah", "MAKKAH", "medina", "Jeddah"] {
        for halal in [false, true] {
            for tier in BudgetCategory::ALL {
                let criteria = FilterCriteria::new(city).with_budget(tier).with_halal(halal);
                let selected = engine.select(&catalog, &criteria).unwrap();

                for offer in &selected {
                    assert!(offer.in_city(city));
                    if halal {
                        assert!(offer.is_halal_certified(), "{} is not certified", offer.name);
                    }
                    if tier != BudgetCategory::UltraLuxury {
                        assert!(tier.contains(offer.effective_price()));
                    }
                }
            }
        }
    }
}

#[test]
fn test_city_matching_is_case_insensitive() {
    let catalog = mixed_catalog();
    let engine = RecommendationEngine::new();

    let lower = engine.select(&catalog, &FilterCriteria::new("makkah")).unwrap();
    let title = engine.select(&catalog, &FilterCriteria::new("Makkah")).unwrap();
    assert_eq!(lower, title);
    assert_eq!(lower.len(), 5);
}

#[test]
fn test_order_follows_catalog() {
    let catalog = mixed_catalog();
    let selected = RecommendationEngine::new()
        .select(&catalog, &FilterCriteria::new("Makkah").with_halal(true))
        .unwrap();

    let names: Vec<&str> = selected.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["Budget Inn", "Clock Royal"]);
}

#[test]
fn test_missing_price_counts_as_budget() {
    let catalog = mixed_catalog();
    let selected = RecommendationEngine::new()
        .select(
            &catalog,
            &FilterCriteria::new("Makkah").with_budget(BudgetCategory::Budget),
        )
        .unwrap();

    let names: Vec<&str> = selected.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["Budget Inn", "Unpriced Hostel"]);
}

#[test]
fn test_ultra_luxury_with_matches_does_not_widen() {
    let catalog = mixed_catalog();
    let selected = RecommendationEngine::new()
        .select(
            &catalog,
            &FilterCriteria::new("Makkah").with_budget(BudgetCategory::UltraLuxury),
        )
        .unwrap();
    assert_eq!(prices(&selected), vec![820.0, 1100.0]);
}

#[test]
fn test_fallback_returns_cheap_offers_with_halal_flag() {
    let catalog = Catalog::from_offers(vec![
        HotelOffer::new("A", "Medina").with_price(200.0, "EUR", "x").with_halal(true),
        HotelOffer::new("B", "Medina").with_price(650.0, "EUR", "x").with_halal(false),
        HotelOffer::new("C", "Medina").with_price(700.0, "EUR", "x").with_halal(true),
    ])
    .unwrap();

    let criteria = FilterCriteria::new("Medina")
        .with_budget(BudgetCategory::UltraLuxury)
        .with_halal(true);
    let selected = RecommendationEngine::new().select(&catalog, &criteria).unwrap();
    assert_eq!(prices(&selected), vec![200.0, 700.0]);
}

#[test]
fn test_missing_city_is_invalid_request() {
    let err = FilterCriteria::from_json(br#"{"budget_category":"Luxury"}"#).unwrap_err();
    assert!(matches!(err, EngineError::InvalidRequest(_)));
}
