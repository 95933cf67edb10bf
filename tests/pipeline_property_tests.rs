//! Property tests for the classification and pricing invariants

use house_rocket::baseline::{median, region_median, region_season_median};
use house_rocket::classify::{buy_candidates, classify, CandidateFilter, Status};
use house_rocket::features::derive_features;
use house_rocket::normalize::Normalizer;
use house_rocket::prelude::*;
use house_rocket::pricing::{price_candidates, ABOVE_BASELINE_MARKUP, BELOW_BASELINE_MARKUP};
use proptest::prelude::*;

const ZIPCODES: [&str; 3] = ["98001", "98002", "98117"];

fn arb_raw_listing() -> impl Strategy<Value = RawListing> {
    (
        1u64..40,
        50.0f64..1_000.0,
        1u32..=5,
        0usize..ZIPCODES.len(),
        1u32..=12,
        0u8..=1,
    )
        .prop_map(|(id, price, condition, zip_index, month, waterfront)| RawListing {
            id,
            date: format!("2014-{:02}-15", month),
            price,
            bedrooms: 3,
            bathrooms: 2.0,
            sqft_living: 1500.0,
            sqft_lot: 5000.0,
            floors: 1.0,
            waterfront,
            view: 0,
            condition,
            grade: 7,
            sqft_basement: 0.0,
            yr_built: 1970,
            yr_renovated: 0,
            zipcode: ZIPCODES[zip_index].to_string(),
            lat: 47.3,
            long: -122.2,
        })
}

fn arb_dataset() -> impl Strategy<Value = Vec<RawListing>> {
    proptest::collection::vec(arb_raw_listing(), 1..80)
}

proptest! {
    /// status == buy iff price < region_median[zipcode] && condition >= 3,
    /// for every row of every dataset.
    #[test]
    fn buy_status_matches_rule(rows in arb_dataset()) {
        let normalized = Normalizer::new().normalize(rows).unwrap();
        let featured = derive_features(normalized).unwrap();
        let medians = region_median(&featured);
        let classified = classify(featured, &medians).unwrap();

        for row in &classified {
            let expected = row.price() < medians[row.zipcode()] && row.featured.condition() >= 3;
            prop_assert_eq!(row.status == Status::Buy, expected);
        }
    }

    /// Every priced candidate takes exactly one of the two markups, the
    /// 30% branch iff its price is at or below the seasonal median, and
    /// profit is exactly the sale/purchase difference.
    #[test]
    fn sale_price_takes_exactly_one_branch(rows in arb_dataset()) {
        let normalized = Normalizer::new().normalize(rows).unwrap();
        let featured = derive_features(normalized).unwrap();
        let medians = region_median(&featured);
        let classified = classify(featured, &medians).unwrap();
        let candidates = buy_candidates(classified, &CandidateFilter::none());
        let seasonal = region_season_median(&candidates);
        let priced = price_candidates(candidates, &seasonal).unwrap();

        for row in &priced {
            let price = row.price();
            if price <= row.price_median_season {
                prop_assert_eq!(row.sale_price, price * BELOW_BASELINE_MARKUP);
            } else {
                prop_assert_eq!(row.sale_price, price * ABOVE_BASELINE_MARKUP);
            }
            prop_assert_eq!(row.profit, row.sale_price - price);
        }
    }

    /// Normalization is idempotent: re-normalizing its own output changes
    /// nothing.
    #[test]
    fn normalization_is_idempotent(rows in arb_dataset()) {
        let normalizer = Normalizer::new();
        let once = normalizer.normalize(rows).unwrap();
        let again = normalizer
            .normalize(once.iter().map(Listing::to_raw).collect())
            .unwrap();
        prop_assert_eq!(once, again);
    }

    /// Ids are unique after normalization (last occurrence wins).
    #[test]
    fn normalized_ids_are_unique(rows in arb_dataset()) {
        let normalized = Normalizer::new().normalize(rows).unwrap();
        let mut ids: Vec<u64> = normalized.iter().map(|l| l.id).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        prop_assert_eq!(before, ids.len());
    }

    /// The seasonal baseline is the median of the candidate prices in its
    /// own (zipcode, season) group.
    #[test]
    fn seasonal_baseline_covers_candidate_population(rows in arb_dataset()) {
        let normalized = Normalizer::new().normalize(rows).unwrap();
        let featured = derive_features(normalized).unwrap();
        let medians = region_median(&featured);
        let classified = classify(featured, &medians).unwrap();
        let candidates = buy_candidates(classified, &CandidateFilter::none());
        let seasonal = region_season_median(&candidates);

        for ((zipcode, season), value) in &seasonal {
            let group: Vec<f64> = candidates
                .iter()
                .filter(|c| c.zipcode() == zipcode && c.season() == *season)
                .map(|c| c.price())
                .collect();
            prop_assert_eq!(median(&group), Some(*value));
        }
    }
}
