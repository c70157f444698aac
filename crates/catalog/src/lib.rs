//! # Catalog Crate
//!
//! The data contract of the recommendation service: hotel offers, budget
//! tiers and the immutable catalog the engine selects from.
//!
//! ## Main Components
//!
//! - **types**: `HotelOffer`, `PriceQuote`, `OfferFeatures`, `BudgetCategory`
//! - **parser**: parse JSON catalog files
//! - **catalog**: validated `Catalog` and the `CatalogSource` trait
//! - **seed**: the built-in curated catalog
//! - **error**: error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, CatalogSource};
//! use std::path::Path;
//!
//! let catalog = match path {
//!     Some(path) => Catalog::load_from_path(Path::new(path))?,
//!     None => Catalog::seed()?,
//! };
//!
//! for offer in catalog.preview(3) {
//!     println!("{} in {}", offer.name, offer.city);
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod catalog;
pub mod seed;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Amount, BudgetCategory, HotelOffer, OfferFeatures, PriceQuote};
pub use catalog::{Catalog, CatalogSource};
