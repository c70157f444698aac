//! Error types for the catalog crate.
//!
//! Load-time failures only: once a `Catalog` exists it is read-only and
//! none of its accessors can fail.

use thiserror::Error;

/// Errors that can occur while loading or validating a hotel catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file or directory could not be found
    #[error("Catalog path not found: {path}")]
    NotFound { path: String },

    /// I/O error occurred while reading a catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The catalog file is not a JSON array of offers
    #[error("Parse error in {file}: {reason}")]
    ParseError { file: String, reason: String },

    /// An offer is missing a required field or carries an empty one
    #[error("Offer #{position} has an empty {field}")]
    EmptyField { position: usize, field: &'static str },

    /// Two offers share a name within the same city
    #[error("Duplicate offer '{name}' in {city}")]
    DuplicateOffer { name: String, city: String },

    /// A nightly price is negative, NaN or infinite
    #[error("Invalid price {value} for offer '{name}'")]
    InvalidPrice { name: String, value: f64 },

    /// A price was given without a currency code
    #[error("Offer '{name}' has a price without a currency")]
    MissingCurrency { name: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
