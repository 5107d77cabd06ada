//! Diversity factors and the councilor records they are measured on

use crate::ReportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The attribute a diversity statistic is measured over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Factor {
    Gender,
    Age,
    Party,
}

impl Factor {
    /// All factors in display order
    pub const ALL: [Factor; 3] = [Factor::Gender, Factor::Age, Factor::Party];

    /// Get the name of the factor
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::Age => "age",
            Self::Party => "party",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Factor {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gender" | "sex" => Ok(Self::Gender),
            "age" => Ok(Self::Age),
            "party" => Ok(Self::Party),
            other => Err(ReportError::unrecognized("factor", other)),
        }
    }
}

/// Gender of a councilor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Code used in the stored councilor records
    pub fn code(&self) -> &'static str {
        match self {
            Self::Male => "남",
            Self::Female => "여",
        }
    }
}

impl FromStr for Gender {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "남" | "male" => Ok(Self::Male),
            "여" | "female" => Ok(Self::Female),
            other => Err(ReportError::unrecognized("gender code", other)),
        }
    }
}

/// One councilor (or candidate) as read from the data layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Councilor {
    pub name: String,
    /// Raw gender code, `남` or `여`
    pub gender: String,
    /// Age in years
    pub age: u32,
    #[serde(alias = "jdName")]
    pub party: String,
}

impl Councilor {
    pub fn new(
        name: impl Into<String>,
        gender: impl Into<String>,
        age: u32,
        party: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            gender: gender.into(),
            age,
            party: party.into(),
        }
    }
}

/// Gender codes of a roster
pub fn genders(roster: &[Councilor]) -> Vec<&str> {
    roster.iter().map(|c| c.gender.as_str()).collect()
}

/// Ages of a roster
pub fn ages(roster: &[Councilor]) -> Vec<u32> {
    roster.iter().map(|c| c.age).collect()
}

/// Party names of a roster
pub fn parties(roster: &[Councilor]) -> Vec<&str> {
    roster.iter().map(|c| c.party.as_str()).collect()
}
