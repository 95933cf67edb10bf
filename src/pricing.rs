//! Pricing Engine - projected sale price and profit
//!
//! Two-tier markup against the seasonal baseline: candidates priced at or
//! below the (region, season) median resell at +30%, candidates above it
//! at +10%. The seasonal baseline is computed over the buy-candidate
//! subset itself, not the full dataset; that asymmetry with the regional
//! median is inherited from the source system and is intentional.

use crate::classify::ClassifiedListing;
use crate::error::{HouseRocketError, Result};
use crate::types::{Price, RegionCode, Season};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Markup applied when the purchase price is at or below the seasonal median.
pub const BELOW_BASELINE_MARKUP: f64 = 1.30;

/// Markup applied when the purchase price is above the seasonal median.
pub const ABOVE_BASELINE_MARKUP: f64 = 1.10;

/// A buy candidate with its seasonal baseline and projected sale figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedListing {
    pub classified: ClassifiedListing,
    pub price_median_season: Price,
    pub sale_price: Price,
    pub profit: f64,
}

impl PricedListing {
    pub fn price(&self) -> Price {
        self.classified.price()
    }

    pub fn zipcode(&self) -> &RegionCode {
        self.classified.zipcode()
    }

    pub fn season(&self) -> Season {
        self.classified.season()
    }
}

/// Attach sale price and profit to every buy candidate.
///
/// `region_season_median` must have been computed over the same candidate
/// table (see [`baseline::region_season_median`](crate::baseline::region_season_median));
/// a missing (zipcode, season) group is a `Data` error.
pub fn price_candidates(
    candidates: Vec<ClassifiedListing>,
    region_season_median: &HashMap<(RegionCode, Season), Price>,
) -> Result<Vec<PricedListing>> {
    candidates
        .into_iter()
        .map(|classified| {
            let group = (classified.zipcode().clone(), classified.season());
            let price_median_season = *region_season_median.get(&group).ok_or_else(|| {
                HouseRocketError::Data(format!(
                    "no seasonal median for zipcode {} in {}",
                    group.0, group.1
                ))
            })?;

            let price = classified.price();
            let sale_price = if price <= price_median_season {
                price * BELOW_BASELINE_MARKUP
            } else {
                price * ABOVE_BASELINE_MARKUP
            };

            Ok(PricedListing {
                classified,
                price_median_season,
                sale_price,
                profit: sale_price - price,
            })
        })
        .collect()
}

/// Total projected profit over the priced candidate table.
pub fn total_profit(rows: &[PricedListing]) -> f64 {
    rows.iter().map(|row| row.profit).sum()
}
