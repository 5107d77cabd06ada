//! Configuration for report shaping

use crate::{ReportError, Result};
use diversity_core::Categorical;
use diversity_index::{diversity_index, IndexKind};
use serde::{Deserialize, Serialize};

/// Settings shared by every report builder
///
/// All fields have defaults, so a partial JSON document (or `{}`) is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Width of the age stairs used by charts and histograms, in years
    pub age_stair: u64,
    /// Which diversity index the reports compute
    pub index: IndexKind,
    /// Whether the index is normalized against its sample maximum
    pub normalize: bool,
    /// Year reported as the current term
    pub current_year: u16,
    /// Year of the election numbered as the 2nd local election
    pub first_local_election_year: u16,
    /// Years between local elections
    pub election_cycle_years: u16,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            age_stair: 10,
            index: IndexKind::GiniSimpson,
            normalize: false,
            current_year: 2022,
            first_local_election_year: 1998,
            election_cycle_years: 4,
        }
    }
}

impl ReportConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the age stair width
    pub fn with_age_stair(mut self, age_stair: u64) -> Self {
        self.age_stair = age_stair;
        self
    }

    /// Set the diversity index
    pub fn with_index(mut self, index: IndexKind) -> Self {
        self.index = index;
        self
    }

    /// Enable normalization
    pub fn normalized(mut self) -> Self {
        self.normalize = true;
        self
    }

    /// Check the invariants the builders rely on
    pub fn validate(&self) -> Result<()> {
        if self.age_stair == 0 {
            return Err(ReportError::InvalidParameter(
                "age_stair must be positive".to_string(),
            ));
        }
        if self.election_cycle_years == 0 {
            return Err(ReportError::InvalidParameter(
                "election_cycle_years must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Compute the configured index over `values`
    pub fn index_of<V: Categorical>(&self, values: &[V], stair: u64) -> Result<f64> {
        Ok(diversity_index(self.index, values, stair, self.normalize)?)
    }

    /// Ordinal of the local election held in `year`
    ///
    /// The election in `first_local_election_year` is the 2nd; each cycle adds one.
    pub fn election_unit(&self, year: u16) -> Result<u16> {
        self.validate()?;
        let offset = year
            .checked_sub(self.first_local_election_year)
            .ok_or_else(|| {
                ReportError::InvalidParameter(format!(
                    "year {year} precedes the first local election in {}",
                    self.first_local_election_year
                ))
            })?;
        if offset % self.election_cycle_years != 0 {
            return Err(ReportError::InvalidParameter(format!(
                "no local election was held in {year}"
            )));
        }
        Ok(offset / self.election_cycle_years + 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.age_stair, 10);
        assert_eq!(config.index, IndexKind::GiniSimpson);
        assert!(!config.normalize);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_partial_json() {
        let config = ReportConfig::from_json_str(r#"{"index": "shannon", "normalize": true}"#).unwrap();
        assert_eq!(config.index, IndexKind::Shannon);
        assert!(config.normalize);
        assert_eq!(config.age_stair, 10);

        assert_eq!(ReportConfig::from_json_str("{}").unwrap(), ReportConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            ReportConfig::from_json_str(r#"{"age_stair": "ten"}"#),
            Err(ReportError::Config(_))
        ));
        assert!(matches!(
            ReportConfig::from_json_str(r#"{"age_stair": 0}"#),
            Err(ReportError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_election_unit() {
        let config = ReportConfig::default();
        assert_eq!(config.election_unit(1998).unwrap(), 2);
        assert_eq!(config.election_unit(2018).unwrap(), 7);
        assert_eq!(config.election_unit(2022).unwrap(), 8);
        assert!(config.election_unit(1994).is_err());
        assert!(config.election_unit(2021).is_err());
    }

    #[test]
    fn test_index_of() {
        let config = ReportConfig::default().with_index(IndexKind::Shannon).normalized();
        let value = config.index_of(&["a", "b"], 0).unwrap();
        assert!((value - 1.0).abs() < 1e-12);
        assert!(config.index_of(&["a"], 0).is_err());
    }
}
