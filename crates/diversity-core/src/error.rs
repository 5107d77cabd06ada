//! Error types for diversity statistics
//!
//! Provides the error taxonomy shared by the diversity-stats crates. Every
//! variant is recoverable: the computation is pure, so nothing is retried and
//! nothing is substituted for a missing result.

use thiserror::Error;

/// Core error type for diversity computations
#[derive(Error, Debug)]
pub enum Error {
    /// A positive stair was requested over values that are not numeric
    #[error("Invalid bucketing: stair {stair} requires numeric values, found non-numeric values at positions {positions:?}")]
    InvalidBucketing { stair: u64, positions: Vec<usize> },

    /// An index was requested over zero observations
    #[error("Empty dataset: a diversity index needs at least one observation")]
    EmptyDataset,

    /// Normalization denominator is undefined for this sample
    #[error("Cannot normalize: {categories} distinct categories over {total} observations")]
    SingleCategoryNormalization { total: usize, categories: usize },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a bucketing error for the given non-numeric positions
    pub fn invalid_bucketing(stair: u64, positions: Vec<usize>) -> Self {
        Self::InvalidBucketing { stair, positions }
    }

    /// Create a normalization error from the sample shape
    pub fn single_category(total: usize, categories: usize) -> Self {
        Self::SingleCategoryNormalization { total, categories }
    }

    /// Whether the error means "there was nothing to measure"
    ///
    /// Callers usually surface this as a "no data" response rather than a bug.
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::EmptyDataset)
    }
}
