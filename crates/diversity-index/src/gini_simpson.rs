//! Gini-Simpson diversity index
//!
//! The Gini-Simpson index is the probability that two observations drawn with
//! replacement belong to different categories:
//!
//! D = 1 - Σ (nᵢ / N)²
//!
//! It is 0 when every observation shares one category and approaches 1 as
//! categories become numerous and evenly spread.

use crate::{DiversityIndex, IndexKind};
use diversity_core::{Error, Result};

/// Gini-Simpson index estimator
///
/// With normalization enabled the raw index is divided by
/// `(k - 1)/k · N/(N - 1)`, the value it would take for `k` perfectly even
/// categories after the finite-sample correction. The normalized value is not
/// guaranteed to stay within `[0, 1]` for small samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GiniSimpson {
    stair: u64,
    normalize: bool,
}

impl GiniSimpson {
    /// Create a raw Gini-Simpson estimator without bucketing
    pub fn new() -> Self {
        Self::default()
    }

    /// Group numeric values into stairs of this width before counting
    pub fn with_stair(mut self, stair: u64) -> Self {
        self.stair = stair;
        self
    }

    /// Enable bias-corrected normalization
    pub fn normalized(mut self) -> Self {
        self.normalize = true;
        self
    }

    /// Set normalization explicitly
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }
}

impl DiversityIndex for GiniSimpson {
    fn kind(&self) -> IndexKind {
        IndexKind::GiniSimpson
    }

    fn stair(&self) -> u64 {
        self.stair
    }

    fn is_normalized(&self) -> bool {
        self.normalize
    }

    fn compute_counts(&self, counts: &[usize]) -> Result<f64> {
        let total: usize = counts.iter().sum();
        if total == 0 {
            return Err(Error::EmptyDataset);
        }

        let n = total as f64;
        let concentration: f64 = counts
            .iter()
            .map(|&c| {
                let p = c as f64 / n;
                p * p
            })
            .sum();
        let index = 1.0 - concentration;

        if !self.normalize {
            return Ok(index);
        }

        let categories = counts.iter().filter(|&&c| c > 0).count();
        if total <= 1 || categories <= 1 {
            return Err(Error::single_category(total, categories));
        }

        let k = categories as f64;
        let max_index = (k - 1.0) / k * n / (n - 1.0);
        Ok(index / max_index)
    }
}
