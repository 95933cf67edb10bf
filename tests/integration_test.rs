//! End-to-end pipeline tests over small hand-built datasets

use approx::assert_relative_eq;
use house_rocket::prelude::*;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn raw(id: u64, date: &str, price: f64, zipcode: &str, condition: u32) -> RawListing {
    RawListing {
        id,
        date: date.to_string(),
        price,
        bedrooms: 3,
        bathrooms: 2.0,
        sqft_living: 1500.0,
        sqft_lot: 5000.0,
        floors: 1.0,
        waterfront: 0,
        view: 0,
        condition,
        grade: 7,
        sqft_basement: 0.0,
        yr_built: 1970,
        yr_renovated: 0,
        zipcode: zipcode.to_string(),
        lat: 47.3,
        long: -122.2,
    }
}

#[test]
fn two_regions_are_classified_independently() {
    init_logs();
    let rows = vec![
        // 98001: median 150
        raw(1, "2014-10-13", 100.0, "98001", 3),
        raw(2, "2014-10-14", 150.0, "98001", 4),
        raw(3, "2014-10-15", 200.0, "98001", 5),
        // 98002: median 600; 500 is a buy here but would not be in 98001
        raw(4, "2014-10-16", 500.0, "98002", 4),
        raw(5, "2014-10-17", 600.0, "98002", 3),
        raw(6, "2014-10-18", 700.0, "98002", 3),
    ];
    let report = Pipeline::new().run(rows).unwrap();

    let ids: Vec<u64> = report
        .candidates
        .iter()
        .map(|c| c.classified.featured.listing.id)
        .collect();
    assert!(ids.contains(&1));
    assert!(ids.contains(&4));
    assert_eq!(ids.len(), 2);

    // Each candidate is alone in its (zipcode, season) group, so both take
    // the 30% branch.
    assert_relative_eq!(report.total_profit, 100.0 * 0.30 + 500.0 * 0.30);
}

#[test]
fn candidate_table_is_sorted_by_label_string_then_price() {
    let rows = vec![
        raw(1, "2014-10-13", 120.0, "98001", 3), // median
        raw(2, "2014-10-14", 110.0, "98001", 5), // excellent
        raw(3, "2014-10-15", 100.0, "98001", 4), // good
        raw(4, "2014-10-16", 90.0, "98001", 3),  // median
        raw(5, "2014-10-17", 800.0, "98001", 2),
        raw(6, "2014-10-18", 900.0, "98001", 2),
        raw(7, "2014-10-19", 1000.0, "98001", 2),
        raw(8, "2014-10-20", 1100.0, "98001", 2),
    ];
    let report = Pipeline::new().run(rows).unwrap();
    let order: Vec<u64> = report
        .candidates
        .iter()
        .map(|c| c.classified.featured.listing.id)
        .collect();
    // "excellent" < "good" < "median" lexicographically
    assert_eq!(order, vec![2, 3, 4, 1]);
}

#[test]
fn zipcode_filter_restricts_candidates_and_profit() {
    let rows = vec![
        raw(1, "2014-10-13", 100.0, "98001", 3),
        raw(2, "2014-10-14", 150.0, "98001", 4),
        raw(3, "2014-10-15", 200.0, "98001", 5),
        raw(4, "2014-10-16", 500.0, "98002", 4),
        raw(5, "2014-10-17", 600.0, "98002", 3),
        raw(6, "2014-10-18", 700.0, "98002", 3),
    ];
    let report = Pipeline::new()
        .with_filter(CandidateFilter::none().with_zipcodes(["98002"]))
        .run(rows)
        .unwrap();

    assert_eq!(report.candidates.len(), 1);
    assert_eq!(report.candidates[0].zipcode(), "98002");
    assert_relative_eq!(report.total_profit, 150.0);
}

#[test]
fn distribution_rows_follow_fixed_attribute_order() {
    let rows = vec![
        raw(1, "2014-10-13", 100.0, "98001", 3),
        raw(2, "2014-10-14", 150.0, "98001", 4),
        raw(3, "2014-10-15", 200.0, "98001", 5),
    ];
    let report = Pipeline::new().run(rows).unwrap();
    let names: Vec<&str> = report
        .distribution
        .iter()
        .map(|row| row.attribute.name())
        .collect();
    assert_eq!(
        names,
        vec![
            "zipcode",
            "bedrooms",
            "bathrooms",
            "floors",
            "season",
            "renovated",
            "condition_label",
            "waterfront_label",
            "basement",
            "grade",
            "view",
            "construction_era",
        ]
    );
}

#[test]
fn csv_ingestion_feeds_the_pipeline() {
    init_logs();
    let csv = "\
id,date,price,bedrooms,bathrooms,sqft_living,sqft_lot,floors,waterfront,view,condition,grade,sqft_above,sqft_basement,yr_built,yr_renovated,zipcode,lat,long
1,20141013T000000,100,3,1,1180,5650,1,0,0,3,7,1180,0,1955,0,98178,47.5112,-122.257
2,20141014T000000,150,3,1,1180,5650,1,0,0,4,7,1180,0,1956,0,98178,47.5112,-122.257
3,20141015T000000,200,3,1,1180,5650,1,0,0,5,7,1180,0,1957,0,98178,47.5112,-122.257
";
    let rows = house_rocket::loader::read_listings_csv(csv.as_bytes()).unwrap();
    let report = Pipeline::new().run(rows).unwrap();
    assert_eq!(report.candidates.len(), 1);
    assert_relative_eq!(report.total_profit, 30.0);
}
