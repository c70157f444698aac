//! Parser for JSON catalog files.
//!
//! A catalog file is a JSON array of offers in the external casing:
//!
//! ```json
//! [
//!   { "hotel_name": "Swissôtel Makkah", "city": "Makkah",
//!     "simulated_price": { "source": "halalbooking.com", "per_night": 450, "currency": "EUR" } }
//! ]
//! ```
//!
//! A catalog directory holds one such file per feed (e.g. `makkah.json`,
//! `medina.json`); files are read in file-name order.

use crate::error::{CatalogError, Result};
use crate::types::HotelOffer;
use std::fs;
use std::path::{Path, PathBuf};

/// Parse a JSON array of offers. `label` names the source in errors.
pub fn parse_offers(bytes: &[u8], label: &str) -> Result<Vec<HotelOffer>> {
    serde_json::from_slice::<Vec<HotelOffer>>(bytes).map_err(|e| CatalogError::ParseError {
        file: label.to_string(),
        reason: e.to_string(),
    })
}

/// Read and parse a single catalog file
pub fn parse_file(path: &Path) -> Result<Vec<HotelOffer>> {
    let bytes = fs::read(path)?;
    parse_offers(&bytes, &path.display().to_string())
}

/// List the `*.json` files of a catalog directory, sorted by file name
pub fn catalog_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if path.is_file() && is_json {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
