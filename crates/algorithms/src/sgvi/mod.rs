//! Road-length weighted aggregation of point scores (sGVI)
//!
//! For every boundary region:
//! 1. Select the sample points inside the boundary
//! 2. Add four far points so the tessellation is always defined
//! 3. Build the Voronoi diagram of the points, clipped to the boundary
//! 4. Weight each point by the road length inside its cell
//! 5. sGVI = sum of score × (weight / total weight)
//!
//! The mean and median of the raw scores and the point count are reported
//! alongside.
//!
//! Reference:
//! Kumakoshi, Y. et al. (2020). "Standardized Green View Index and
//! Quantification of Different Metrics of Urban Green Vegetation."
//! Sustainability.

mod aggregate;
mod augment;
mod batch;
mod voronoi;
mod weight;

pub use aggregate::{aggregate, mean, median, ratios, ZeroWeightPolicy};
pub use augment::{augment, far_points, AugmentedPointSet, ClippedPoint, SYNTHETIC_POINT_COUNT};
pub use batch::{process_region, run};
pub use voronoi::{tessellate, VoronoiCell};
pub use weight::{weight, RoadNetwork};

use sgvi_core::{Algorithm, BoundaryRegion, Error, LinearFeature, ParallelAlgorithm, RegionResult, Result, SamplePoint};
use sgvi_parallel::ProcessingMode;

/// Parameters for sGVI computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SgviParams {
    /// Far point distance in multiples of the boundary's height/width (default: 4.0)
    pub far_point_factor: f64,
    /// Frame extension for outer Voronoi cells, in multiples of the
    /// boundary's extent (default: 20.0)
    pub max_extend_factor: f64,
    /// sGVI reported when no road falls in any cell (default: mean score)
    pub zero_weight_policy: ZeroWeightPolicy,
    /// How regions are spread over threads (default: all cores)
    pub mode: ProcessingMode,
}

impl Default for SgviParams {
    fn default() -> Self {
        Self {
            far_point_factor: 4.0,
            max_extend_factor: 20.0,
            zero_weight_policy: ZeroWeightPolicy::default(),
            mode: ProcessingMode::default(),
        }
    }
}

impl SgviParams {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("far_point_factor", self.far_point_factor),
            ("max_extend_factor", self.max_extend_factor),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidParameter {
                    name,
                    value: value.to_string(),
                    reason: "must be a positive finite number".into(),
                });
            }
        }
        if let ProcessingMode::ParallelWith(0) = self.mode {
            return Err(Error::InvalidParameter {
                name: "mode",
                value: "ParallelWith(0)".into(),
                reason: "thread count must be at least 1".into(),
            });
        }
        Ok(())
    }
}

/// Inputs of one sGVI run
#[derive(Debug, Clone, Default)]
pub struct SgviInput {
    pub boundaries: Vec<BoundaryRegion>,
    pub points: Vec<SamplePoint>,
    pub features: Vec<LinearFeature>,
}

/// Compute sGVI for every boundary region.
///
/// Convenience wrapper around [`run`].
pub fn sgvi(
    boundaries: &[BoundaryRegion],
    points: &[SamplePoint],
    features: &[LinearFeature],
    params: SgviParams,
) -> Result<Vec<RegionResult>> {
    run(boundaries, points, features, &params)
}

/// sGVI as a library [`Algorithm`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Sgvi;

impl Algorithm for Sgvi {
    type Input = SgviInput;
    type Output = Vec<RegionResult>;
    type Params = SgviParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "sGVI"
    }

    fn description(&self) -> &'static str {
        "Road-length weighted mean of point scores per boundary region"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        run(&input.boundaries, &input.points, &input.features, &params)
    }
}

impl ParallelAlgorithm for Sgvi {
    fn execute_parallel(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let params = match params.mode {
            ProcessingMode::Sequential => SgviParams {
                mode: ProcessingMode::Parallel,
                ..params
            },
            _ => params,
        };
        self.execute(input, params)
    }
}
