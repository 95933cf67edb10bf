//! Core types, aliases and categorical label domains

use crate::error::{HouseRocketError, Result};
use serde::{Deserialize, Serialize};

/// Price type (currency units)
pub type Price = f64;

/// Unique-ish identifier for listings (the same property can recur over time)
pub type ListingId = u64;

/// Region grouping key (zip code)
pub type RegionCode = String;

/// Calendar season bucket derived from the listing month.
///
/// The month boundaries reproduce the source dataset's exact thresholds:
/// summer is `5 < m < 8`, spring is `2 < m < 5`, fall is `8 < m < 12`,
/// everything else is winter. Months 5, 8 and 12 therefore land in winter,
/// not their adjacent season. Downstream seasonal baselines depend on this
/// table, so it must not be "corrected".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Bucket a calendar month (1-12) into a season.
    pub fn from_month(month: u32) -> Self {
        if month > 5 && month < 8 {
            Season::Summer
        } else if month > 2 && month < 5 {
            Season::Spring
        } else if month > 8 && month < 12 {
            Season::Fall
        } else {
            Season::Winter
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive label for the 1-5 `condition` score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConditionLabel {
    TooBad,
    Bad,
    Median,
    Good,
    Excellent,
}

impl ConditionLabel {
    /// Map a raw condition score to its label.
    ///
    /// Any value outside 1..=5 has no defined mapping and fails fast.
    pub fn from_condition(condition: u32) -> Result<Self> {
        match condition {
            1 => Ok(ConditionLabel::TooBad),
            2 => Ok(ConditionLabel::Bad),
            3 => Ok(ConditionLabel::Median),
            4 => Ok(ConditionLabel::Good),
            5 => Ok(ConditionLabel::Excellent),
            other => Err(HouseRocketError::Domain(other)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionLabel::TooBad => "too bad",
            ConditionLabel::Bad => "bad",
            ConditionLabel::Median => "median",
            ConditionLabel::Good => "good",
            ConditionLabel::Excellent => "excellent",
        }
    }
}

impl std::fmt::Display for ConditionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Construction era relative to 1955 (1955 itself counts as pre-1955).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstructionEra {
    Pre1955,
    Post1955,
}

impl ConstructionEra {
    pub fn from_year_built(yr_built: u32) -> Self {
        if yr_built > 1955 {
            ConstructionEra::Post1955
        } else {
            ConstructionEra::Pre1955
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConstructionEra::Pre1955 => "pre-1955",
            ConstructionEra::Post1955 => "post-1955",
        }
    }
}

impl std::fmt::Display for ConstructionEra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two-valued yes/no label used for the renovation, basement and
/// waterfront features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flag {
    Yes,
    No,
}

impl Flag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::Yes => "yes",
            Flag::No => "no",
        }
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        if value {
            Flag::Yes
        } else {
            Flag::No
        }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
