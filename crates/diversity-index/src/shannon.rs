//! Shannon diversity index
//!
//! The Shannon index is the entropy of the category distribution, in nats:
//!
//! H = -Σ (nᵢ / N) · ln(nᵢ / N)
//!
//! summed over categories with nᵢ > 0. It ranges over `[0, ln(k)]` for `k`
//! observed categories.

use crate::{DiversityIndex, IndexKind};
use diversity_core::{Error, Result};

/// Shannon index estimator
///
/// With normalization enabled the index is divided by `ln(k)` (Pielou's
/// evenness), which maps it into `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shannon {
    stair: u64,
    normalize: bool,
}

impl Shannon {
    /// Create a raw Shannon estimator without bucketing
    pub fn new() -> Self {
        Self::default()
    }

    /// Group numeric values into stairs of this width before counting
    pub fn with_stair(mut self, stair: u64) -> Self {
        self.stair = stair;
        self
    }

    /// Enable normalization by ln(k)
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

impl DiversityIndex for Shannon {
    fn kind(&self) -> IndexKind {
        IndexKind::Shannon
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
        // -p·ln(p) written as p·ln(N/nᵢ) so every term is non-negative
        let entropy: f64 = counts
            .iter()
            .filter(|&&c| c > 0)
            .map(|&c| {
                let c = c as f64;
                (c / n) * (n / c).ln()
            })
            .sum();

        if !self.normalize {
            return Ok(entropy);
        }

        let categories = counts.iter().filter(|&&c| c > 0).count();
        if categories <= 1 {
            return Err(Error::single_category(total, categories));
        }

        Ok(entropy / (categories as f64).ln())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::LN_2;

    #[test]
    fn test_two_even_categories() {
        let sh = Shannon::new();
        assert_abs_diff_eq!(sh.compute(&["a", "b"]).unwrap(), LN_2, epsilon = 1e-12);
        assert_abs_diff_eq!(sh.compute(&["a", "b"]).unwrap(), 0.6931, epsilon = 1e-4);
    }

    #[test]
    fn test_single_category_is_zero() {
        let sh = Shannon::new();
        assert_eq!(sh.compute(&["a", "a", "a"]).unwrap(), 0.0);
    }

    #[test]
    fn test_uniform_reaches_ln_k() {
        let sh = Shannon::new();
        let values = ["a", "b", "c", "d", "a", "b", "c", "d"];
        assert_abs_diff_eq!(sh.compute(&values).unwrap(), 4f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_counts_excluded() {
        let sh = Shannon::new();
        let with_zero = sh.compute_counts(&[3, 0, 1, 0]).unwrap();
        let without = sh.compute_counts(&[3, 1]).unwrap();
        assert!(with_zero.is_finite());
        assert_abs_diff_eq!(with_zero, without, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_dataset() {
        let empty: Vec<String> = Vec::new();
        assert!(matches!(Shannon::new().compute(&empty), Err(Error::EmptyDataset)));
        assert!(matches!(Shannon::new().normalized().compute_counts(&[]), Err(Error::EmptyDataset)));
    }

    #[test]
    fn test_normalized() {
        let sh = Shannon::new().normalized();
        assert_abs_diff_eq!(sh.compute(&["a", "b"]).unwrap(), 1.0, epsilon = 1e-12);

        // p = (0.75, 0.25): H = 0.5623..., ln 2 = 0.6931...
        let value = sh.compute(&["a", "a", "a", "b"]).unwrap();
        assert!(value > 0.0 && value < 1.0);
        assert_abs_diff_eq!(value, 0.811_278_124_459_132_9, epsilon = 1e-12);
    }

    #[test]
    fn test_normalized_single_category() {
        let sh = Shannon::new().normalized();
        assert!(matches!(
            sh.compute(&["only", "only"]),
            Err(Error::SingleCategoryNormalization { total: 2, categories: 1 })
        ));
    }

    #[test]
    fn test_with_stair() {
        // all ages fall in one stair
        let sh = Shannon::new().with_stair(10);
        assert_eq!(sh.compute(&[40, 41, 49]).unwrap(), 0.0);
        assert_abs_diff_eq!(
            Shannon::new().with_stair(10).compute(&[40, 50]).unwrap(),
            LN_2,
            epsilon = 1e-12
        );
    }
}
