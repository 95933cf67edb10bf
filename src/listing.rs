//! Listing record types: raw input rows and normalized records

use crate::types::{ListingId, Price, RegionCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One raw property transaction row, as delivered by the external loader.
///
/// The `date` field is still a free-form string at this point and
/// `waterfront` is the dataset's 0/1 flag; both are canonicalized by the
/// [`Normalizer`](crate::normalize::Normalizer). Extra columns in the
/// source file (e.g. `sqft_above`, `sqft_living15`) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawListing {
    pub id: ListingId,
    pub date: String,
    pub price: Price,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub sqft_living: f64,
    pub sqft_lot: f64,
    pub floors: f64,
    pub waterfront: u8,
    pub view: u32,
    pub condition: u32,
    pub grade: u32,
    pub sqft_basement: f64,
    pub yr_built: u32,
    pub yr_renovated: u32,
    pub zipcode: RegionCode,
    pub lat: f64,
    pub long: f64,
}

/// A normalized listing: parsed date, canonical waterfront flag, duplicates
/// and excluded rows already removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub date: NaiveDate,
    pub price: Price,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub sqft_living: f64,
    pub sqft_lot: f64,
    pub floors: f64,
    pub waterfront: bool,
    pub view: u32,
    pub condition: u32,
    pub grade: u32,
    pub sqft_basement: f64,
    pub yr_built: u32,
    pub yr_renovated: u32,
    pub zipcode: RegionCode,
    pub lat: f64,
    pub long: f64,
}

impl Listing {
    /// Re-wrap a normalized listing as a raw row (ISO date, 0/1 waterfront).
    /// Useful for checking that normalization is idempotent.
    pub fn to_raw(&self) -> RawListing {
        RawListing {
            id: self.id,
            date: self.date.format("%Y-%m-%d").to_string(),
            price: self.price,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            sqft_living: self.sqft_living,
            sqft_lot: self.sqft_lot,
            floors: self.floors,
            waterfront: u8::from(self.waterfront),
            view: self.view,
            condition: self.condition,
            grade: self.grade,
            sqft_basement: self.sqft_basement,
            yr_built: self.yr_built,
            yr_renovated: self.yr_renovated,
            zipcode: self.zipcode.clone(),
            lat: self.lat,
            long: self.long,
        }
    }
}
