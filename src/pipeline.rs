//! Whole-pipeline composition
//!
//! Runs the stages in their fixed order - normalize, derive features,
//! aggregate baselines, classify, price, summarize - handing each stage's
//! output table to the next. One-shot and single-threaded; the first
//! stage error aborts the run.

use crate::baseline;
use crate::classify::{self, CandidateFilter};
use crate::error::Result;
use crate::features;
use crate::insights::{self, DistributionRow};
use crate::listing::RawListing;
use crate::normalize::Normalizer;
use crate::pricing::{self, PricedListing};

/// The three artifacts the engine exposes to its consumers.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Buy-candidate table with baselines, sale price and profit, in
    /// `(condition_label, price)` order.
    pub candidates: Vec<PricedListing>,
    /// Total projected profit over the candidate table.
    pub total_profit: f64,
    /// Per-attribute best-value distribution table.
    pub distribution: Vec<DistributionRow>,
}

/// The full recommendation and pricing pipeline.
pub struct Pipeline {
    normalizer: Normalizer,
    filter: CandidateFilter,
}

impl Pipeline {
    /// Pipeline with default normalization and no candidate filter.
    pub fn new() -> Self {
        Self {
            normalizer: Normalizer::new(),
            filter: CandidateFilter::none(),
        }
    }

    /// Replace the record normalizer (e.g. with custom exclusions).
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Restrict the candidate table by condition label and/or zipcode.
    pub fn with_filter(mut self, filter: CandidateFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Run the pipeline over a batch of raw rows.
    ///
    /// Returns `EmptySet` when no listing survives classification and
    /// filtering, per the summarizer's empty-set policy.
    pub fn run(&self, raw: Vec<RawListing>) -> Result<PipelineReport> {
        log::info!("pipeline start: {} raw rows", raw.len());

        let normalized = self.normalizer.normalize(raw)?;
        let featured = features::derive_features(normalized)?;

        let region_median = baseline::region_median(&featured);
        log::info!(
            "{} listings across {} regions",
            featured.len(),
            region_median.len()
        );

        let classified = classify::classify(featured, &region_median)?;
        let candidates = classify::buy_candidates(classified, &self.filter);

        // Seasonal baseline over the candidate subset only, never the full
        // table. The regional median above covers the full table; the two
        // populations differ on purpose.
        let seasonal_median = baseline::region_season_median(&candidates);
        let priced = pricing::price_candidates(candidates, &seasonal_median)?;

        let total_profit = pricing::total_profit(&priced);
        let distribution = insights::summarize(&priced)?;

        log::info!(
            "pipeline done: {} buy candidates, total projected profit {:.2}",
            priced.len(),
            total_profit
        );

        Ok(PipelineReport {
            candidates: priced,
            total_profit,
            distribution,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
