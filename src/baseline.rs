//! Baseline Aggregator - median price lookup tables
//!
//! Two baselines drive the engine: a per-region median over the full
//! dataset (used by the classifier) and a per-region-per-season median
//! computed over the buy-candidate subset only (used by the pricing
//! engine). The two medians deliberately cover different populations;
//! see the pricing engine docs before changing either.

use crate::classify::ClassifiedListing;
use crate::features::FeaturedListing;
use crate::types::{Price, RegionCode, Season};
use hashbrown::HashMap;

/// Median with two-middle-average semantics on even counts.
/// Returns `None` for an empty slice.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Median listing price per region, over the full featured dataset.
pub fn region_median(rows: &[FeaturedListing]) -> HashMap<RegionCode, Price> {
    let mut prices_by_region: HashMap<RegionCode, Vec<Price>> = HashMap::new();
    for row in rows {
        prices_by_region
            .entry(row.zipcode().clone())
            .or_default()
            .push(row.price());
    }

    prices_by_region
        .into_iter()
        .filter_map(|(region, prices)| median(&prices).map(|m| (region, m)))
        .collect()
}

/// Median listing price per (region, season), over whatever subset is
/// given. The pipeline feeds this the buy-candidate subset, not the full
/// dataset.
pub fn region_season_median(
    rows: &[ClassifiedListing],
) -> HashMap<(RegionCode, Season), Price> {
    let mut prices_by_group: HashMap<(RegionCode, Season), Vec<Price>> = HashMap::new();
    for row in rows {
        prices_by_group
            .entry((row.zipcode().clone(), row.season()))
            .or_default()
            .push(row.price());
    }

    prices_by_group
        .into_iter()
        .filter_map(|(group, prices)| median(&prices).map(|m| (group, m)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::derive_features;
    use crate::listing::Listing;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn featured(id: u64, zipcode: &str, price: f64) -> FeaturedListing {
        let listing = Listing {
            id,
            date: NaiveDate::from_ymd_opt(2014, 10, 13).unwrap(),
            price,
            bedrooms: 3,
            bathrooms: 2.0,
            sqft_living: 1500.0,
            sqft_lot: 5000.0,
            floors: 1.0,
            waterfront: false,
            view: 0,
            condition: 3,
            grade: 7,
            sqft_basement: 0.0,
            yr_built: 1970,
            yr_renovated: 0,
            zipcode: zipcode.to_string(),
            lat: 47.3,
            long: -122.2,
        };
        derive_features(vec![listing]).unwrap().pop().unwrap()
    }

    #[test]
    fn test_median_odd_count() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
    }

    #[test]
    fn test_median_even_count_averages_middles() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn test_median_single_and_empty() {
        assert_eq!(median(&[7.0]), Some(7.0));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_region_median_groups_by_zipcode() {
        let rows = vec![
            featured(1, "98001", 100.0),
            featured(2, "98001", 150.0),
            featured(3, "98001", 200.0),
            featured(4, "98002", 400.0),
            featured(5, "98002", 600.0),
        ];
        let medians = region_median(&rows);
        assert_relative_eq!(medians["98001"], 150.0);
        assert_relative_eq!(medians["98002"], 500.0);
    }

    #[test]
    fn test_region_median_empty_input() {
        assert!(region_median(&[]).is_empty());
    }
}
