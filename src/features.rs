//! Feature Deriver - categorical and calendar attributes
//!
//! Enriches normalized listings with the derived attributes the baselines,
//! classifier and summarizer work on. Every derivation is a pure function
//! of the record; the same input table always yields the same output.

use crate::error::Result;
use crate::listing::Listing;
use crate::types::{ConditionLabel, ConstructionEra, Flag, Price, RegionCode, Season};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// A normalized listing plus its derived attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedListing {
    pub listing: Listing,
    pub construction_era: ConstructionEra,
    pub renovated: Flag,
    pub has_basement: Flag,
    pub waterfront_label: Flag,
    pub year: String,
    pub year_month: String,
    pub season: Season,
    pub condition_label: ConditionLabel,
}

impl FeaturedListing {
    pub fn price(&self) -> Price {
        self.listing.price
    }

    pub fn zipcode(&self) -> &RegionCode {
        &self.listing.zipcode
    }

    pub fn condition(&self) -> u32 {
        self.listing.condition
    }
}

/// Derive features for one listing.
///
/// Fails with [`Domain`](crate::error::HouseRocketError::Domain) if the
/// condition score falls outside 1..=5.
pub fn derive(listing: Listing) -> Result<FeaturedListing> {
    let condition_label = ConditionLabel::from_condition(listing.condition)?;
    let date = listing.date;
    Ok(FeaturedListing {
        construction_era: ConstructionEra::from_year_built(listing.yr_built),
        renovated: Flag::from(listing.yr_renovated != 0),
        has_basement: Flag::from(listing.sqft_basement != 0.0),
        waterfront_label: Flag::from(listing.waterfront),
        year: date.year().to_string(),
        year_month: format!("{:04}-{:02}", date.year(), date.month()),
        season: Season::from_month(date.month()),
        condition_label,
        listing,
    })
}

/// Derive features for a whole table.
pub fn derive_features(rows: Vec<Listing>) -> Result<Vec<FeaturedListing>> {
    let featured = rows.into_iter().map(derive).collect::<Result<Vec<_>>>()?;
    log::debug!("derived features for {} listings", featured.len());
    Ok(featured)
}
