//! # House Rocket
//!
//! A rule-based purchase recommendation and resale pricing engine for
//! real-estate listing datasets.
//!
//! The engine is a one-shot batch pipeline over an in-memory listing table:
//! raw records are cleaned, enriched with categorical features, compared
//! against region and region/season median-price baselines, classified as
//! buy candidates, priced for resale, and summarized per attribute.
//!
//! ## Example
//!
//! ```rust,no_run
//! use house_rocket::prelude::*;
//!
//! fn main() -> house_rocket::error::Result<()> {
//!     let raw = house_rocket::loader::load_listings_csv("kc_house_data.csv")?;
//!
//!     let report = Pipeline::new().run(raw)?;
//!     println!("{} buy candidates", report.candidates.len());
//!     println!("total projected profit: {:.2}", report.total_profit);
//!     Ok(())
//! }
//! ```

pub mod baseline;
pub mod classify;
pub mod error;
pub mod features;
pub mod insights;
pub mod listing;
pub mod loader;
pub mod normalize;
pub mod pipeline;
pub mod pricing;
pub mod types;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::classify::{CandidateFilter, ClassifiedListing, Status};
    pub use crate::error::{HouseRocketError, Result};
    pub use crate::features::FeaturedListing;
    pub use crate::insights::{Attribute, DistributionRow};
    pub use crate::listing::{Listing, RawListing};
    pub use crate::normalize::Normalizer;
    pub use crate::pipeline::{Pipeline, PipelineReport};
    pub use crate::pricing::PricedListing;
    pub use crate::types::{ConditionLabel, ConstructionEra, Flag, Season};
}
