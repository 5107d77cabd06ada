//! Electoral diversity statistics
//!
//! Facade over the diversity-stats workspace:
//!
//! - [`diversity_core`]: category values, frequency tables and staircase bucketing
//! - [`diversity_index`]: Gini-Simpson and Shannon diversity indices
//! - [`diversity_report`]: chart, template and ranking shapes per jurisdiction
//!
//! # Example
//!
//! ```rust
//! use diversity_stats::prelude::*;
//!
//! let ages = vec![5, 12, 19, 25];
//! let table = count(&ages, 10).unwrap();
//! assert_eq!(table.get(&CategoryValue::Integer(10)), 2);
//!
//! let h = shannon(&["a", "b"], 0, true).unwrap();
//! assert!((h - 1.0).abs() < 1e-12);
//! ```

pub use diversity_core;
pub use diversity_index;
pub use diversity_report;

pub use diversity_core::{count, Categorical, CategoryValue, Error, FrequencyTable, Result};
pub use diversity_index::{gini_simpson, shannon, DiversityIndex, GiniSimpson, IndexKind, Shannon};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use diversity_core::prelude::*;
    pub use diversity_index::{
        diversity_index, gini_simpson, shannon, DiversityIndex, GiniSimpson, IndexKind, Shannon,
    };
    pub use diversity_report::{
        ChartData, Councilor, ErrorResponse, Factor, Jurisdiction, ReportConfig, ReportError,
        TemplateData,
    };
}
