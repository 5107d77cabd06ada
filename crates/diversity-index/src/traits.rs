//! Core trait for diversity indices

use crate::types::IndexKind;
use diversity_core::{count, Categorical, FrequencyTable, Result};

/// A diversity index computed from category counts
///
/// Implementors only provide [`DiversityIndex::compute_counts`]; counting and
/// bucketing go through [`diversity_core::count`] so every index sees the same
/// frequency table for the same input.
pub trait DiversityIndex {
    /// Which index this estimator computes
    fn kind(&self) -> IndexKind;

    /// Bucket width applied to numeric values before counting (0 = none)
    fn stair(&self) -> u64 {
        0
    }

    /// Whether the index is rescaled against its sample-dependent maximum
    fn is_normalized(&self) -> bool {
        false
    }

    /// Compute the index from per-category counts
    ///
    /// Zero counts are allowed and ignored.
    fn compute_counts(&self, counts: &[usize]) -> Result<f64>;

    /// Compute the index from a frequency table
    fn compute_table(&self, table: &FrequencyTable) -> Result<f64> {
        self.compute_counts(&table.counts())
    }

    /// Count `values` (bucketing with [`DiversityIndex::stair`]) and compute the index
    fn compute<V: Categorical>(&self, values: &[V]) -> Result<f64>
    where
        Self: Sized,
    {
        let table = count(values, self.stair())?;
        self.compute_table(&table)
    }
}
