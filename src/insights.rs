//! Insight Summarizer - per-attribute profitability and market hypotheses
//!
//! For a fixed list of categorical attributes, groups the priced buy
//! candidates by attribute value, finds the most profitable value per
//! attribute and builds a distribution table for the report consumer.
//! Also carries the market hypothesis checks the original analysis ran
//! over the full featured dataset (waterfront premium, construction-era
//! discount, basement lot size, year-over-year growth).

use crate::error::{HouseRocketError, Result};
use crate::features::FeaturedListing;
use crate::pricing::{total_profit, PricedListing};
use crate::types::Flag;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// The attributes summarized per buy-candidate report, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Zipcode,
    Bedrooms,
    Bathrooms,
    Floors,
    Season,
    Renovated,
    ConditionLabel,
    WaterfrontLabel,
    Basement,
    Grade,
    View,
    ConstructionEra,
}

impl Attribute {
    pub const ALL: [Attribute; 12] = [
        Attribute::Zipcode,
        Attribute::Bedrooms,
        Attribute::Bathrooms,
        Attribute::Floors,
        Attribute::Season,
        Attribute::Renovated,
        Attribute::ConditionLabel,
        Attribute::WaterfrontLabel,
        Attribute::Basement,
        Attribute::Grade,
        Attribute::View,
        Attribute::ConstructionEra,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Zipcode => "zipcode",
            Attribute::Bedrooms => "bedrooms",
            Attribute::Bathrooms => "bathrooms",
            Attribute::Floors => "floors",
            Attribute::Season => "season",
            Attribute::Renovated => "renovated",
            Attribute::ConditionLabel => "condition_label",
            Attribute::WaterfrontLabel => "waterfront_label",
            Attribute::Basement => "basement",
            Attribute::Grade => "grade",
            Attribute::View => "view",
            Attribute::ConstructionEra => "construction_era",
        }
    }

    /// The attribute's value for one candidate, as a display string.
    pub fn value_of(&self, row: &PricedListing) -> String {
        let listing = &row.classified.featured.listing;
        let featured = &row.classified.featured;
        match self {
            Attribute::Zipcode => listing.zipcode.clone(),
            Attribute::Bedrooms => listing.bedrooms.to_string(),
            Attribute::Bathrooms => format_numeric(listing.bathrooms),
            Attribute::Floors => format_numeric(listing.floors),
            Attribute::Season => featured.season.to_string(),
            Attribute::Renovated => featured.renovated.to_string(),
            Attribute::ConditionLabel => featured.condition_label.to_string(),
            Attribute::WaterfrontLabel => featured.waterfront_label.to_string(),
            Attribute::Basement => featured.has_basement.to_string(),
            Attribute::Grade => listing.grade.to_string(),
            Attribute::View => listing.view.to_string(),
            Attribute::ConstructionEra => featured.construction_era.to_string(),
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn format_numeric(value: f64) -> String {
    format!("{}", value)
}

/// One row of the distribution table: the most profitable value of an
/// attribute and its share of the candidate set and of total profit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionRow {
    pub attribute: Attribute,
    pub best_value: String,
    pub listing_count: usize,
    pub listing_pct: f64,
    pub profit_sum: f64,
    pub profit_pct: f64,
}

/// Profit summed per distinct attribute value, groups in stable order of
/// first occurrence in the candidate table.
pub fn profit_by_value(attribute: Attribute, rows: &[PricedListing]) -> Vec<(String, f64)> {
    let mut groups: Vec<(String, f64)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let value = attribute.value_of(row);
        match index.get(&value) {
            Some(&i) => groups[i].1 += row.profit,
            None => {
                index.insert(value.clone(), groups.len());
                groups.push((value, row.profit));
            }
        }
    }
    groups
}

/// The attribute value with the maximum summed profit. Ties resolve to
/// the earliest group in first-occurrence order.
pub fn best_value(attribute: Attribute, rows: &[PricedListing]) -> Option<(String, f64)> {
    let mut best: Option<(String, f64)> = None;
    for (value, profit) in profit_by_value(attribute, rows) {
        match &best {
            Some((_, current)) if profit <= *current => {}
            _ => best = Some((value, profit)),
        }
    }
    best
}

/// Build the full distribution table over the priced candidate set.
///
/// An empty candidate set, or a zero total profit, makes every percentage
/// column undefined; both surface as [`EmptySet`](HouseRocketError::EmptySet)
/// rather than silently reporting zeros.
pub fn summarize(rows: &[PricedListing]) -> Result<Vec<DistributionRow>> {
    if rows.is_empty() {
        return Err(HouseRocketError::EmptySet(
            "no buy candidates to summarize".to_string(),
        ));
    }
    let profit_total = total_profit(rows);
    if profit_total == 0.0 {
        return Err(HouseRocketError::EmptySet(
            "total profit over buy candidates is zero".to_string(),
        ));
    }
    let listing_total = rows.len();

    let mut table = Vec::with_capacity(Attribute::ALL.len());
    for attribute in Attribute::ALL {
        // rows is non-empty here, so a best value always exists
        let (value, profit_sum) = best_value(attribute, rows).ok_or_else(|| {
            HouseRocketError::EmptySet(format!("no groups for attribute {}", attribute))
        })?;
        let listing_count = rows
            .iter()
            .filter(|row| attribute.value_of(row) == value)
            .count();

        table.push(DistributionRow {
            attribute,
            best_value: value,
            listing_count,
            listing_pct: listing_count as f64 / listing_total as f64 * 100.0,
            profit_sum,
            profit_pct: profit_sum / profit_total * 100.0,
        });
    }

    log::debug!("summarized {} candidates across {} attributes", listing_total, table.len());
    Ok(table)
}

/// A two-population mean comparison backing one market hypothesis.
/// `delta` is the relative difference as a fraction (0.1 = 10%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HypothesisOutcome {
    pub baseline_mean: f64,
    pub comparison_mean: f64,
    pub delta: f64,
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn mean_where<F>(rows: &[FeaturedListing], value: fn(&FeaturedListing) -> f64, keep: F, what: &str) -> Result<f64>
where
    F: Fn(&FeaturedListing) -> bool,
{
    let values: Vec<f64> = rows.iter().filter(|r| keep(r)).map(value).collect();
    mean(&values).ok_or_else(|| HouseRocketError::EmptySet(format!("no {} listings", what)))
}

/// H1: waterfront listings' mean price relative to non-waterfront ones.
pub fn waterfront_price_premium(rows: &[FeaturedListing]) -> Result<HypothesisOutcome> {
    let baseline = mean_where(rows, |r| r.price(), |r| r.waterfront_label == Flag::No, "non-waterfront")?;
    let comparison = mean_where(rows, |r| r.price(), |r| r.waterfront_label == Flag::Yes, "waterfront")?;
    Ok(HypothesisOutcome {
        baseline_mean: baseline,
        comparison_mean: comparison,
        delta: (comparison - baseline) / baseline,
    })
}

/// H2: how much cheaper pre-1955 construction is, relative to post-1955.
pub fn pre1955_price_discount(rows: &[FeaturedListing]) -> Result<HypothesisOutcome> {
    let baseline = mean_where(
        rows,
        |r| r.price(),
        |r| r.construction_era == crate::types::ConstructionEra::Post1955,
        "post-1955",
    )?;
    let comparison = mean_where(
        rows,
        |r| r.price(),
        |r| r.construction_era == crate::types::ConstructionEra::Pre1955,
        "pre-1955",
    )?;
    Ok(HypothesisOutcome {
        baseline_mean: baseline,
        comparison_mean: comparison,
        delta: (baseline - comparison) / baseline,
    })
}

/// H3: mean lot size of basement-less listings relative to ones with a basement.
pub fn no_basement_lot_premium(rows: &[FeaturedListing]) -> Result<HypothesisOutcome> {
    let baseline = mean_where(rows, |r| r.listing.sqft_lot, |r| r.has_basement == Flag::Yes, "basement")?;
    let comparison = mean_where(rows, |r| r.listing.sqft_lot, |r| r.has_basement == Flag::No, "basement-less")?;
    Ok(HypothesisOutcome {
        baseline_mean: baseline,
        comparison_mean: comparison,
        delta: (comparison - baseline) / baseline,
    })
}

/// H4: mean price growth from the first observed year to the second.
pub fn yoy_price_growth(rows: &[FeaturedListing]) -> Result<HypothesisOutcome> {
    let mut prices_by_year: Vec<(String, Vec<f64>)> = Vec::new();
    for row in rows {
        match prices_by_year.iter_mut().find(|(year, _)| *year == row.year) {
            Some((_, prices)) => prices.push(row.price()),
            None => prices_by_year.push((row.year.clone(), vec![row.price()])),
        }
    }
    prices_by_year.sort_by(|a, b| a.0.cmp(&b.0));

    if prices_by_year.len() < 2 {
        return Err(HouseRocketError::EmptySet(
            "year-over-year growth needs at least two observed years".to_string(),
        ));
    }

    let baseline = mean(&prices_by_year[0].1)
        .ok_or_else(|| HouseRocketError::EmptySet("no prices in first observed year".to_string()))?;
    let comparison = mean(&prices_by_year[1].1)
        .ok_or_else(|| HouseRocketError::EmptySet("no prices in second observed year".to_string()))?;
    Ok(HypothesisOutcome {
        baseline_mean: baseline,
        comparison_mean: comparison,
        delta: (comparison - baseline) / baseline,
    })
}

/// H5: mean price of listings with more bedrooms than the median distinct
/// bedroom count, relative to those with fewer.
///
/// Mirrors the source computation: prices are first averaged per bedroom
/// count, the median is taken over the distinct counts, and each side of
/// the split averages the per-count means (counts equal to the median
/// belong to neither side).
pub fn bedroom_count_price_premium(rows: &[FeaturedListing]) -> Result<HypothesisOutcome> {
    let mut prices_by_count: Vec<(u32, Vec<f64>)> = Vec::new();
    for row in rows {
        let bedrooms = row.listing.bedrooms;
        match prices_by_count.iter_mut().find(|(count, _)| *count == bedrooms) {
            Some((_, prices)) => prices.push(row.price()),
            None => prices_by_count.push((bedrooms, vec![row.price()])),
        }
    }

    let counts: Vec<f64> = prices_by_count.iter().map(|(count, _)| *count as f64).collect();
    let count_median = crate::baseline::median(&counts)
        .ok_or_else(|| HouseRocketError::EmptySet("no listings to split by bedroom count".to_string()))?;

    let side_mean = |keep: fn(f64, f64) -> bool| -> Result<f64> {
        let group_means: Vec<f64> = prices_by_count
            .iter()
            .filter(|(count, _)| keep(*count as f64, count_median))
            .filter_map(|(_, prices)| mean(prices))
            .collect();
        mean(&group_means).ok_or_else(|| {
            HouseRocketError::EmptySet("no bedroom counts on one side of the median".to_string())
        })
    };

    let baseline = side_mean(|count, median| count < median)?;
    let comparison = side_mean(|count, median| count > median)?;
    Ok(HypothesisOutcome {
        baseline_mean: baseline,
        comparison_mean: comparison,
        delta: (comparison - baseline) / baseline,
    })
}
