//! Category counting and staircase bucketing for diversity statistics
//!
//! This crate holds the data model shared by the diversity-stats workspace:
//! category values, frequency tables, the `count` operation with optional
//! numeric bucketing, and the error taxonomy.
//!
//! Everything here is pure. Inputs are borrowed and never mutated, so every
//! function can be called concurrently without coordination.
//!
//! # Example
//!
//! ```rust
//! use diversity_core::{count, CategoryValue};
//!
//! // Ages grouped into ten-year stairs
//! let ages = vec![34, 38, 41, 57, 59, 62];
//! let table = count(&ages, 10).unwrap();
//!
//! for (bucket, n) in table.sorted_by_key() {
//!     println!("[{bucket}, +10): {n}");
//! }
//! assert_eq!(table.get(&CategoryValue::Integer(50)), 2);
//! ```

pub mod category;
pub mod count;
pub mod error;
pub mod frequency;

pub use category::{Categorical, CategoryValue};
pub use count::count;
pub use error::{Error, Result};
pub use frequency::FrequencyTable;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{count, Categorical, CategoryValue, Error, FrequencyTable, Result};
}
