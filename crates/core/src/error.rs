//! Error types for sGVI

use thiserror::Error;

use crate::result::FailureKind;

/// Main error type for sGVI operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Degenerate boundary '{region}': {reason}")]
    DegenerateBoundary { region: String, reason: String },

    #[error("Voronoi tessellation failed: {0}")]
    TessellationFailed(String),

    #[error("Clip failed: {0}")]
    ClipFailed(String),

    #[error("Total road length is zero, weighted score is undefined")]
    UndefinedWeightTotal,

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Algorithm error: {0}")]
    Algorithm(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Failure category recorded on a region row when this error abandons it.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Error::DegenerateBoundary { .. } => FailureKind::DegenerateBoundary,
            Error::TessellationFailed(_) => FailureKind::TessellationFailed,
            Error::UndefinedWeightTotal => FailureKind::UndefinedWeightTotal,
            _ => FailureKind::Other,
        }
    }
}

/// Result type alias for sGVI operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_kind_mapping() {
        let degenerate = Error::DegenerateBoundary {
            region: "r1".into(),
            reason: "zero width".into(),
        };
        assert_eq!(degenerate.failure_kind(), FailureKind::DegenerateBoundary);
        assert_eq!(
            Error::TessellationFailed("duplicate".into()).failure_kind(),
            FailureKind::TessellationFailed
        );
        assert_eq!(
            Error::UndefinedWeightTotal.failure_kind(),
            FailureKind::UndefinedWeightTotal
        );
        assert_eq!(Error::ClipFailed("x".into()).failure_kind(), FailureKind::Other);
    }

    #[test]
    fn test_display_names_region() {
        let err = Error::DegenerateBoundary {
            region: "ward-7".into(),
            reason: "zero-area bounding box".into(),
        };
        assert!(err.to_string().contains("ward-7"));
    }
}
