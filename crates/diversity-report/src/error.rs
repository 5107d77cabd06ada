//! Error types for report shaping
//!
//! [`ReportError`] folds the core diversity errors into the taxonomy the
//! response layer exposes, and [`ErrorResponse`] is its wire shape.

use diversity_core::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

/// Status code for an unknown metro or local district
pub const REGION_CODE_ERR: u16 = 400;
/// Status code when no observations back the requested statistic
pub const NO_DATA_ERR: u16 = 404;
/// Status code for inputs the computation cannot accept
pub const UNPROCESSABLE_ERR: u16 = 422;
/// Status code for configuration problems
pub const INTERNAL_ERR: u16 = 500;

/// Errors raised while shaping diversity reports
#[derive(Error, Debug)]
pub enum ReportError {
    /// Error from the diversity computation
    #[error(transparent)]
    Diversity(#[from] CoreError),

    /// The requested district does not exist
    #[error("{0}")]
    RegionCode(String),

    /// No observations back the requested statistic
    #[error("No data retrieved with the provided input.")]
    NoData,

    /// A stored code or request parameter could not be interpreted
    #[error("Unrecognized {kind}: {value:?}")]
    Unrecognized { kind: &'static str, value: String },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias using ReportError
pub type Result<T> = std::result::Result<T, ReportError>;

impl ReportError {
    /// Create an error for a value that does not map to a known variant
    pub fn unrecognized(kind: &'static str, value: impl Into<String>) -> Self {
        Self::Unrecognized {
            kind,
            value: value.into(),
        }
    }

    /// Whether the error should be reported as "no data"
    pub fn is_no_data(&self) -> bool {
        match self {
            Self::NoData => true,
            Self::Diversity(e) => e.is_no_data(),
            _ => false,
        }
    }

    /// Short machine-readable error name
    pub fn name(&self) -> &'static str {
        match self {
            Self::RegionCode(_) => "RegionCodeError",
            e if e.is_no_data() => "NoDataError",
            Self::Diversity(CoreError::InvalidBucketing { .. }) => "InvalidBucketingError",
            Self::Diversity(CoreError::SingleCategoryNormalization { .. }) => {
                "SingleCategoryNormalizationError"
            }
            Self::Diversity(_) | Self::InvalidParameter(_) => "InvalidParameterError",
            Self::Unrecognized { .. } => "UnrecognizedValueError",
            Self::Config(_) => "ConfigError",
            Self::NoData => "NoDataError",
        }
    }

    /// Status code carried in the error response
    pub fn code(&self) -> u16 {
        match self {
            Self::RegionCode(_) => REGION_CODE_ERR,
            e if e.is_no_data() => NO_DATA_ERR,
            Self::Config(_) => INTERNAL_ERR,
            _ => UNPROCESSABLE_ERR,
        }
    }
}

/// Serialized error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub message: String,
}

impl From<&ReportError> for ErrorResponse {
    fn from(err: &ReportError) -> Self {
        let message = if err.is_no_data() {
            ReportError::NoData.to_string()
        } else {
            err.to_string()
        };
        Self {
            error: err.name().to_string(),
            code: err.code(),
            message,
        }
    }
}

impl From<ReportError> for ErrorResponse {
    fn from(err: ReportError) -> Self {
        Self::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_mapping() {
        let response = ErrorResponse::from(ReportError::Diversity(CoreError::EmptyDataset));
        assert_eq!(response.error, "NoDataError");
        assert_eq!(response.code, NO_DATA_ERR);
        assert_eq!(response.message, "No data retrieved with the provided input.");

        assert_eq!(ErrorResponse::from(ReportError::NoData), response);
    }

    #[test]
    fn test_region_code_mapping() {
        let err = ReportError::RegionCode("No metro district with metroId 99.".to_string());
        let response = ErrorResponse::from(&err);
        assert_eq!(response.error, "RegionCodeError");
        assert_eq!(response.code, REGION_CODE_ERR);
        assert_eq!(response.message, "No metro district with metroId 99.");
    }

    #[test]
    fn test_core_error_names() {
        let err: ReportError = CoreError::invalid_bucketing(10, vec![0]).into();
        assert_eq!(err.name(), "InvalidBucketingError");
        assert_eq!(err.code(), UNPROCESSABLE_ERR);

        let err: ReportError = CoreError::single_category(1, 1).into();
        assert_eq!(err.name(), "SingleCategoryNormalizationError");

        let err = ReportError::unrecognized("gender code", "X");
        assert_eq!(err.name(), "UnrecognizedValueError");
        assert_eq!(err.to_string(), r#"Unrecognized gender code: "X""#);
    }

    #[test]
    fn test_serialize_response() {
        let json = serde_json::to_string(&ErrorResponse::from(ReportError::NoData)).unwrap();
        assert_eq!(
            json,
            r#"{"error":"NoDataError","code":404,"message":"No data retrieved with the provided input."}"#
        );
    }
}
