//! Record Normalizer - cleaning of raw listing rows
//!
//! Parses dates, resolves duplicate ids (last occurrence in row order wins),
//! applies exclusion predicates and canonicalizes the waterfront flag. The
//! transform is pure: it consumes the raw table and produces a fresh one.

use crate::error::{HouseRocketError, Result};
use crate::listing::{Listing, RawListing};
use crate::types::ListingId;
use chrono::{NaiveDate, NaiveDateTime};
use hashbrown::HashMap;

/// Date formats accepted for the raw `date` column. The King County
/// export uses `20141013T000000`; ISO dates are accepted for re-ingestion
/// of already-normalized data.
const DATE_TIME_FORMATS: &[&str] = &["%Y%m%dT%H%M%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d"];

/// Predicate marking a listing for removal during normalization.
pub type ExclusionPredicate = Box<dyn Fn(&Listing) -> bool + Send + Sync>;

/// Cleans raw listing rows into normalized [`Listing`] records.
///
/// By default one exclusion predicate is installed: the known data-entry
/// error row with `bedrooms == 33` is dropped. Further predicates can be
/// stacked with [`with_exclusion`](Normalizer::with_exclusion); a row is
/// dropped if any predicate matches.
pub struct Normalizer {
    exclusions: Vec<ExclusionPredicate>,
}

impl Normalizer {
    /// Normalizer with the default exclusion set.
    pub fn new() -> Self {
        Self::empty().with_exclusion(|listing| listing.bedrooms == 33)
    }

    /// Normalizer with no exclusion predicates at all.
    pub fn empty() -> Self {
        Self {
            exclusions: Vec::new(),
        }
    }

    /// Add an exclusion predicate.
    pub fn with_exclusion<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Listing) -> bool + Send + Sync + 'static,
    {
        self.exclusions.push(Box::new(predicate));
        self
    }

    /// Normalize a batch of raw rows.
    ///
    /// An unparseable date fails the whole batch with
    /// [`HouseRocketError::Parse`]: the date feeds the season and year
    /// features, so a partially-dated table would poison every later stage.
    pub fn normalize(&self, rows: Vec<RawListing>) -> Result<Vec<Listing>> {
        let total = rows.len();

        let mut parsed = Vec::with_capacity(total);
        for row in rows {
            parsed.push(parse_row(row)?);
        }

        let deduped = dedup_last_wins(parsed);
        let kept: Vec<Listing> = deduped
            .into_iter()
            .filter(|listing| !self.exclusions.iter().any(|excluded| excluded(listing)))
            .collect();

        log::debug!("normalized {} raw rows into {} listings", total, kept.len());
        Ok(kept)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_row(row: RawListing) -> Result<Listing> {
    let date = parse_date(&row.date)?;
    Ok(Listing {
        id: row.id,
        date,
        price: row.price,
        bedrooms: row.bedrooms,
        bathrooms: row.bathrooms,
        sqft_living: row.sqft_living,
        sqft_lot: row.sqft_lot,
        floors: row.floors,
        waterfront: row.waterfront == 1,
        view: row.view,
        condition: row.condition,
        grade: row.grade,
        sqft_basement: row.sqft_basement,
        yr_built: row.yr_built,
        yr_renovated: row.yr_renovated,
        zipcode: row.zipcode,
        lat: row.lat,
        long: row.long,
    })
}

/// Parse a raw date value into a calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt.date());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date);
        }
    }
    Err(HouseRocketError::Parse(value.to_string()))
}

/// Keep the last occurrence of each id, preserving the surviving rows'
/// original relative order.
fn dedup_last_wins(rows: Vec<Listing>) -> Vec<Listing> {
    let mut last_index: HashMap<ListingId, usize> = HashMap::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        last_index.insert(row.id, index);
    }

    rows.into_iter()
        .enumerate()
        .filter(|(index, row)| last_index[&row.id] == *index)
        .map(|(_, row)| row)
        .collect()
}
