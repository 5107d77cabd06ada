//! Types describing diversity indices

use serde::{Deserialize, Serialize};
use std::fmt;

/// The diversity indices this crate computes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexKind {
    /// Probability that two random draws fall in different categories
    GiniSimpson,
    /// Entropy of the category distribution, in nats
    Shannon,
}

impl IndexKind {
    /// Get the name of the index
    pub fn name(&self) -> &'static str {
        match self {
            Self::GiniSimpson => "Gini-Simpson",
            Self::Shannon => "Shannon",
        }
    }

    /// Range of the raw (unnormalized) index for `categories` observed categories
    ///
    /// Gini-Simpson is bounded by `1 - 1/k`, Shannon by `ln(k)`.
    pub fn raw_range(&self, categories: usize) -> (f64, f64) {
        if categories == 0 {
            return (0.0, 0.0);
        }
        let k = categories as f64;
        match self {
            Self::GiniSimpson => (0.0, 1.0 - 1.0 / k),
            Self::Shannon => (0.0, k.ln()),
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
