//! Error types for House Rocket

use thiserror::Error;

/// Main error type for House Rocket
#[derive(Error, Debug)]
pub enum HouseRocketError {
    /// A listing date could not be parsed. Dates are load-bearing for the
    /// season and year features, so one bad date fails the whole batch.
    #[error("Unparseable listing date: {0}")]
    Parse(String),

    /// A `condition` value outside the defined 1..=5 domain.
    #[error("Condition value out of domain (expected 1-5, got {0})")]
    Domain(u32),

    /// An aggregation population was empty where a value was required.
    #[error("Empty set: {0}")]
    EmptySet(String),

    /// A lookup key or input record was malformed or missing.
    #[error("Data error: {0}")]
    Data(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for House Rocket operations
pub type Result<T> = std::result::Result<T, HouseRocketError>;
