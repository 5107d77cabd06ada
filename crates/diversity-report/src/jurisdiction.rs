//! Jurisdictions statistics are reported for

use crate::ReportError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A council jurisdiction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "snake_case")]
pub enum Jurisdiction {
    /// The National Assembly
    National,
    /// A metropolitan council
    Metro {
        #[serde(rename = "metroId")]
        metro_id: u32,
    },
    /// A local council inside a metropolitan area
    Local {
        #[serde(rename = "metroId")]
        metro_id: u32,
        #[serde(rename = "localId")]
        local_id: u32,
    },
}

impl Jurisdiction {
    /// Administrative level: 0 national, 1 metro, 2 local
    pub fn level(&self) -> u8 {
        match self {
            Self::National => 0,
            Self::Metro { .. } => 1,
            Self::Local { .. } => 2,
        }
    }

    /// Councilor type label used by the stored statistics
    pub fn councilor_type(&self) -> &'static str {
        match self {
            Self::National => "national_councilor",
            Self::Metro { .. } => "metro_councilor",
            Self::Local { .. } => "local_councilor",
        }
    }

    /// Metro id, if the jurisdiction sits below the national level
    pub fn metro_id(&self) -> Option<u32> {
        match self {
            Self::National => None,
            Self::Metro { metro_id } | Self::Local { metro_id, .. } => Some(*metro_id),
        }
    }

    /// Local id, for local councils
    pub fn local_id(&self) -> Option<u32> {
        match self {
            Self::Local { local_id, .. } => Some(*local_id),
            _ => None,
        }
    }

    /// Error reported when the district is not known
    ///
    /// The national jurisdiction always exists and has no such error.
    pub fn region_code_error(&self) -> Option<ReportError> {
        match self {
            Self::National => None,
            Self::Metro { metro_id } => Some(ReportError::RegionCode(format!(
                "No metro district with metroId {metro_id}."
            ))),
            Self::Local { metro_id, local_id } => Some(ReportError::RegionCode(format!(
                "No local district with metroId {metro_id} and localId {local_id}."
            ))),
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::National => f.write_str("national"),
            Self::Metro { metro_id } => write!(f, "metro {metro_id}"),
            Self::Local { metro_id, local_id } => write!(f, "local {metro_id}/{local_id}"),
        }
    }
}
