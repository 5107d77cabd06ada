//! Response shaping for electoral diversity statistics
//!
//! The data layer hands over rosters of councilors (or candidates) per
//! jurisdiction; this crate turns them into chart points, template paragraphs,
//! rankings and error responses. It performs no I/O: everything is computed
//! from the slices it is given, so any number of request handlers can call it
//! concurrently.
//!
//! # Example
//!
//! ```rust
//! use diversity_report::{ChartData, Councilor, Factor, ReportConfig};
//!
//! let roster = vec![
//!     Councilor::new("김", "남", 48, "국민의힘"),
//!     Councilor::new("이", "여", 39, "더불어민주당"),
//!     Councilor::new("박", "남", 57, "국민의힘"),
//! ];
//!
//! let config = ReportConfig::default();
//! let chart = ChartData::build(Factor::Age, &roster, &config).unwrap();
//! assert_eq!(chart.total(), 3);
//!
//! let json = serde_json::to_string(&chart).unwrap();
//! assert!(json.starts_with(r#"{"factor":"age""#));
//! ```

pub mod chart;
pub mod config;
pub mod error;
pub mod factor;
pub mod jurisdiction;
pub mod ranking;
pub mod template;

pub use chart::{AgeChartPoint, ChartData, GenderChartPoint, PartyChartPoint};
pub use config::ReportConfig;
pub use error::{ErrorResponse, ReportError, Result};
pub use factor::{Councilor, Factor, Gender};
pub use jurisdiction::Jurisdiction;
pub use ranking::{extremes, rank_by_index, RankedIndex};
pub use template::{
    age_histogram, diversity_of, AgeHistogramParagraph, AgeHistogramPoint, AgeIndexHistoryEntry,
    AgeIndexHistoryParagraph, AgeRankingParagraph, AgeTemplate, Diversity, GenderPopulation,
    GenderTemplate, PartyTemplate, TemplateData, TermAgeIndex,
};
