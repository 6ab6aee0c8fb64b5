use thiserror::Error;

/// Failure to populate the catalog from its source.
///
/// Non-fatal: the store stays empty and a later `load()` retries.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("catalog source did not return a list")]
    NotAList,
    #[error("malformed campsite record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
    #[error("catalog source failed")]
    Source(#[from] anyhow::Error),
}

/// Rejected filter-criteria assignment; the prior criteria stay in effect.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriteriaError {
    #[error("price range minimum {min} exceeds maximum {max}")]
    InvertedPriceRange { min: f64, max: f64 },
    #[error("price range bounds must be finite")]
    NonFinitePriceBound,
    #[error("capacity minimum must be at least 1")]
    ZeroCapacity,
}
