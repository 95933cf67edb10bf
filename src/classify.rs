//! Recommendation Classifier - buy/no-buy against the regional baseline
//!
//! A listing is a buy candidate iff its price sits below the regional
//! median price and its condition score is at least 3. Candidate tables
//! are sorted by `(condition_label, price)` ascending, where the label
//! sorts by its display string. That is lexicographic order ("bad" <
//! "excellent" < "good" < "median" < "too bad"), not severity order;
//! consumers depend on the resulting row order, so it is kept as-is.

use crate::error::{HouseRocketError, Result};
use crate::features::FeaturedListing;
use crate::types::{ConditionLabel, Price, RegionCode, Season};
use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

/// Buy recommendation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Buy,
    NoBuy,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Buy => "buy",
            Status::NoBuy => "no buy",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A featured listing with its regional baseline and recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedListing {
    pub featured: FeaturedListing,
    pub price_median: Price,
    pub status: Status,
}

impl ClassifiedListing {
    pub fn price(&self) -> Price {
        self.featured.price()
    }

    pub fn zipcode(&self) -> &RegionCode {
        self.featured.zipcode()
    }

    pub fn season(&self) -> Season {
        self.featured.season
    }

    pub fn condition_label(&self) -> ConditionLabel {
        self.featured.condition_label
    }
}

/// Optional post-filter over the buy-candidate table.
///
/// With both sets present a candidate must match both (intersection);
/// with one set present only that set applies; with neither, the filter
/// is the identity.
#[derive(Debug, Clone, Default)]
pub struct CandidateFilter {
    pub condition_labels: Option<HashSet<ConditionLabel>>,
    pub zipcodes: Option<HashSet<RegionCode>>,
}

impl CandidateFilter {
    /// The identity filter.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_condition_labels<I: IntoIterator<Item = ConditionLabel>>(mut self, labels: I) -> Self {
        self.condition_labels = Some(labels.into_iter().collect());
        self
    }

    pub fn with_zipcodes<I, S>(mut self, zipcodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<RegionCode>,
    {
        self.zipcodes = Some(zipcodes.into_iter().map(Into::into).collect());
        self
    }

    pub fn matches(&self, row: &ClassifiedListing) -> bool {
        let label_ok = self
            .condition_labels
            .as_ref()
            .map(|set| set.contains(&row.condition_label()))
            .unwrap_or(true);
        let zipcode_ok = self
            .zipcodes
            .as_ref()
            .map(|set| set.contains(row.zipcode()))
            .unwrap_or(true);
        label_ok && zipcode_ok
    }
}

/// Attach the regional median and buy/no-buy status to every listing.
///
/// Fails with a `Data` error if a listing's zipcode has no entry in the
/// baseline table (cannot happen when the table was computed over the
/// same dataset).
pub fn classify(
    rows: Vec<FeaturedListing>,
    region_median: &HashMap<RegionCode, Price>,
) -> Result<Vec<ClassifiedListing>> {
    rows.into_iter()
        .map(|featured| {
            let price_median = *region_median.get(featured.zipcode()).ok_or_else(|| {
                HouseRocketError::Data(format!(
                    "no regional median for zipcode {}",
                    featured.zipcode()
                ))
            })?;
            let status = if featured.price() < price_median && featured.condition() >= 3 {
                Status::Buy
            } else {
                Status::NoBuy
            };
            Ok(ClassifiedListing {
                featured,
                price_median,
                status,
            })
        })
        .collect()
}

/// Select buy candidates, apply the optional filter and sort by
/// `(condition_label-as-string, price)` ascending.
pub fn buy_candidates(
    rows: Vec<ClassifiedListing>,
    filter: &CandidateFilter,
) -> Vec<ClassifiedListing> {
    let mut candidates: Vec<ClassifiedListing> = rows
        .into_iter()
        .filter(|row| row.status == Status::Buy && filter.matches(row))
        .collect();

    candidates.sort_by(|a, b| {
        a.condition_label()
            .as_str()
            .cmp(b.condition_label().as_str())
            .then(
                a.price()
                    .partial_cmp(&b.price())
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
    });

    log::debug!("selected {} buy candidates", candidates.len());
    candidates
}
