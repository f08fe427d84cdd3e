//! Per-region output records

use serde::{Deserialize, Serialize};

use crate::vector::{AttributeValue, Feature, FeatureCollection};

/// Attribute names written back onto boundary features.
pub const FIELD_POINT_COUNT: &str = "n_pt";
pub const FIELD_MEAN: &str = "avgGVI";
pub const FIELD_MEDIAN: &str = "medGVI";
pub const FIELD_SGVI: &str = "sGVI";
pub const FIELD_STATUS: &str = "status";

/// Why a region was abandoned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    DegenerateBoundary,
    TessellationFailed,
    UndefinedWeightTotal,
    Other,
}

/// How a region's values were obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionStatus {
    /// Road-length weighted score
    Weighted,
    /// No road length fell in any cell; `sgvi` comes from the zero-weight policy
    ZeroWeight,
    /// No sample point inside the region
    NoPoints,
    /// Region abandoned; all values are zero
    Failed(FailureKind),
}

impl RegionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionStatus::Weighted => "weighted",
            RegionStatus::ZeroWeight => "zero_weight",
            RegionStatus::NoPoints => "no_points",
            RegionStatus::Failed(FailureKind::DegenerateBoundary) => "failed:degenerate_boundary",
            RegionStatus::Failed(FailureKind::TessellationFailed) => "failed:tessellation",
            RegionStatus::Failed(FailureKind::UndefinedWeightTotal) => "failed:undefined_weight_total",
            RegionStatus::Failed(FailureKind::Other) => "failed:other",
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RegionStatus::Failed(_))
    }
}

/// Aggregated scores for one boundary region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionResult {
    pub region_id: String,
    /// Real sample points clipped into the region
    pub point_count: usize,
    pub mean_score: f64,
    pub median_score: f64,
    /// Road-length weighted mean of the scores
    pub sgvi: f64,
    pub status: RegionStatus,
}

impl RegionResult {
    fn zeroed(region_id: impl Into<String>, status: RegionStatus) -> Self {
        Self {
            region_id: region_id.into(),
            point_count: 0,
            mean_score: 0.0,
            median_score: 0.0,
            sgvi: 0.0,
            status,
        }
    }

    /// Default row for a region without sample points
    pub fn empty(region_id: impl Into<String>) -> Self {
        Self::zeroed(region_id, RegionStatus::NoPoints)
    }

    /// Default row for an abandoned region
    pub fn failed(region_id: impl Into<String>, kind: FailureKind) -> Self {
        Self::zeroed(region_id, RegionStatus::Failed(kind))
    }

    /// True when every numeric field holds the zero sentinel
    pub fn is_zero(&self) -> bool {
        self.point_count == 0 && self.mean_score == 0.0 && self.median_score == 0.0 && self.sgvi == 0.0
    }

    /// Store the result as attributes of a boundary feature.
    pub fn write_properties(&self, feature: &mut Feature) {
        feature.set_property(FIELD_POINT_COUNT, AttributeValue::Int(self.point_count as i64));
        feature.set_property(FIELD_MEAN, AttributeValue::Float(self.mean_score));
        feature.set_property(FIELD_MEDIAN, AttributeValue::Float(self.median_score));
        feature.set_property(FIELD_SGVI, AttributeValue::Float(self.sgvi));
        feature.set_property(FIELD_STATUS, AttributeValue::String(self.status.as_str().to_string()));
    }
}

/// Attach results to the boundary features they were computed from.
///
/// Rows are matched by position; extra features or results are left alone.
/// Returns the number of features updated.
pub fn attach_results(boundaries: &mut FeatureCollection, results: &[RegionResult]) -> usize {
    let mut updated = 0;
    for (feature, result) in boundaries.iter_mut().zip(results) {
        result.write_properties(feature);
        updated += 1;
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_is_zero() {
        let r = RegionResult::empty("B2");
        assert!(r.is_zero());
        assert_eq!(r.status, RegionStatus::NoPoints);
        assert_eq!(r.region_id, "B2");
    }

    #[test]
    fn test_failed_status() {
        let r = RegionResult::failed("x", FailureKind::TessellationFailed);
        assert!(r.is_zero());
        assert!(r.status.is_failed());
        assert_eq!(r.status.as_str(), "failed:tessellation");
    }

    #[test]
    fn test_write_properties() {
        let r = RegionResult {
            region_id: "B1".into(),
            point_count: 3,
            mean_score: 0.5,
            median_score: 0.5,
            sgvi: 0.65,
            status: RegionStatus::Weighted,
        };
        let mut f = Feature::empty();
        r.write_properties(&mut f);

        assert_eq!(f.get_property(FIELD_POINT_COUNT), Some(&AttributeValue::Int(3)));
        assert_relative_eq!(f.get_f64(FIELD_SGVI).unwrap(), 0.65);
        assert_eq!(
            f.get_property(FIELD_STATUS),
            Some(&AttributeValue::String("weighted".into()))
        );
    }

    #[test]
    fn test_attach_results_by_position() {
        let mut fc: FeatureCollection = (0..3).map(|_| Feature::empty()).collect();
        let results = vec![RegionResult::empty("a"), RegionResult::empty("b")];
        assert_eq!(attach_results(&mut fc, &results), 2);
        assert!(fc.features[0].get_property(FIELD_SGVI).is_some());
        assert!(fc.features[2].get_property(FIELD_SGVI).is_none());
    }

    #[test]
    fn test_serde_roundtrip_status() {
        let r = RegionResult::failed("r", FailureKind::DegenerateBoundary);
        let json = serde_json::to_string(&r).unwrap();
        let back: RegionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
