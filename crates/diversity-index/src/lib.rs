//! Diversity indices over category counts
//!
//! This crate computes the two closed-form diversity measures used for
//! electoral statistics:
//!
//! - **Gini-Simpson**: `1 - Σ pᵢ²`, the probability that two random draws differ
//! - **Shannon**: `-Σ pᵢ ln pᵢ`, the entropy of the category distribution
//!
//! Both can be normalized against their sample-dependent maximum, and both can
//! bucket numeric values (ages, for instance) into stairs before counting.
//!
//! # Examples
//!
//! ## Convenience functions
//!
//! ```rust
//! use diversity_index::{gini_simpson, shannon};
//!
//! let parties = vec!["A", "B", "A", "C"];
//! let gs = gini_simpson(&parties, 0, false).unwrap();
//! let h = shannon(&parties, 0, true).unwrap();
//! assert!(gs > 0.0 && gs < 1.0);
//! assert!(h > 0.0 && h <= 1.0);
//! ```
//!
//! ## Estimators
//!
//! ```rust
//! use diversity_index::{DiversityIndex, GiniSimpson, Shannon};
//!
//! let ages = vec![31, 38, 44, 45, 52, 67];
//! let gs = GiniSimpson::new().with_stair(10).normalized();
//! let value = gs.compute(&ages).unwrap();
//! println!("age diversity: {value:.3}");
//!
//! // Stored histograms can be scored without re-expanding them
//! let h = Shannon::new().compute_counts(&[3, 5, 2]).unwrap();
//! assert!(h > 0.0);
//! ```

mod gini_simpson;
mod shannon;
mod traits;
mod types;

// Re-exports
pub use diversity_core::{count, Categorical, CategoryValue, Error, FrequencyTable, Result};
pub use gini_simpson::GiniSimpson;
pub use shannon::Shannon;
pub use traits::DiversityIndex;
pub use types::IndexKind;

/// Gini-Simpson index of `values`
///
/// `stair > 0` buckets numeric values first; `normalize` applies the
/// finite-sample correction described on [`GiniSimpson`].
pub fn gini_simpson<V: Categorical>(values: &[V], stair: u64, normalize: bool) -> Result<f64> {
    GiniSimpson::new()
        .with_stair(stair)
        .with_normalization(normalize)
        .compute(values)
}

/// Shannon index of `values`
///
/// `stair > 0` buckets numeric values first; `normalize` divides by `ln(k)`.
pub fn shannon<V: Categorical>(values: &[V], stair: u64, normalize: bool) -> Result<f64> {
    Shannon::new()
        .with_stair(stair)
        .with_normalization(normalize)
        .compute(values)
}

/// Compute the index of the given kind
pub fn diversity_index<V: Categorical>(
    kind: IndexKind,
    values: &[V],
    stair: u64,
    normalize: bool,
) -> Result<f64> {
    match kind {
        IndexKind::GiniSimpson => gini_simpson(values, stair, normalize),
        IndexKind::Shannon => shannon(values, stair, normalize),
    }
}
