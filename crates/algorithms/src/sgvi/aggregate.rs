//! Folding per-point weights and scores into a region result

use serde::{Deserialize, Serialize};
use sgvi_core::{Error, RegionResult, RegionStatus, Result};

/// What to report as sGVI when no road length falls inside any cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroWeightPolicy {
    /// Unweighted mean of the region's scores
    #[default]
    MeanScore,
    /// Report 0
    Zero,
    /// Abandon the region with `UndefinedWeightTotal`
    Fail,
}

/// Normalize weights so they sum to 1.
///
/// Returns `None` when the total is zero or not finite.
pub fn ratios(weights: &[f64]) -> Option<Vec<f64>> {
    let total: f64 = weights.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return None;
    }
    Some(weights.iter().map(|w| w / total).collect())
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median; the mean of the two middle values for even counts.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let count = sorted.len();
    if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    }
}

/// Build the result row of one region.
///
/// `scores[i]` and `weights[i]` belong to the same real point. With no
/// points the default empty row is returned.
pub fn aggregate(
    region_id: &str,
    scores: &[f64],
    weights: &[f64],
    policy: ZeroWeightPolicy,
) -> Result<RegionResult> {
    if scores.len() != weights.len() {
        return Err(Error::Algorithm(format!(
            "{} scores but {} weights",
            scores.len(),
            weights.len()
        )));
    }
    if scores.is_empty() {
        return Ok(RegionResult::empty(region_id));
    }

    let mean_score = mean(scores);
    let (sgvi, status) = match ratios(weights) {
        Some(ratios) => {
            let weighted = scores.iter().zip(&ratios).map(|(s, r)| s * r).sum::<f64>();
            (weighted, RegionStatus::Weighted)
        }
        None => match policy {
            ZeroWeightPolicy::MeanScore => (mean_score, RegionStatus::ZeroWeight),
            ZeroWeightPolicy::Zero => (0.0, RegionStatus::ZeroWeight),
            ZeroWeightPolicy::Fail => return Err(Error::UndefinedWeightTotal),
        },
    };

    Ok(RegionResult {
        region_id: region_id.to_string(),
        point_count: scores.len(),
        mean_score,
        median_score: median(scores),
        sgvi,
        status,
    })
}
