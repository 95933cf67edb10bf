//! Thin ingestion helpers for raw listing tables
//!
//! The engine itself is a pure in-memory transformation library; these
//! helpers only cover reading the raw listing columns from CSV (the King
//! County export format) or JSON fixtures. Geographic boundary data is a
//! concern of the rendering collaborator and is not handled here.

use crate::error::Result;
use crate::listing::RawListing;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read raw listings from a CSV file with a header row.
pub fn load_listings_csv<P: AsRef<Path>>(path: P) -> Result<Vec<RawListing>> {
    let file = File::open(path.as_ref())?;
    let rows = read_listings_csv(file)?;
    log::info!(
        "loaded {} raw listings from {}",
        rows.len(),
        path.as_ref().display()
    );
    Ok(rows)
}

/// Read raw listings from any CSV reader. Columns not present on
/// [`RawListing`] are ignored.
pub fn read_listings_csv<R: Read>(reader: R) -> Result<Vec<RawListing>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for record in csv_reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Parse raw listings from a JSON array.
pub fn listings_from_json(json: &str) -> Result<Vec<RawListing>> {
    Ok(serde_json::from_str(json)?)
}
