//! Region batch driver
//!
//! Runs the pipeline once per boundary. Regions share nothing but the
//! read-only inputs, so they are mapped across the configured worker pool
//! and collected in input order. A region that fails is logged and reported
//! as a zero row; it never stops the batch.

use sgvi_core::{BoundaryRegion, Error, LinearFeature, RegionResult, Result, SamplePoint};
use sgvi_parallel::ParallelStrategy;
use tracing::{debug, debug_span, info, warn};

use super::aggregate::aggregate;
use super::augment::augment;
use super::voronoi::tessellate;
use super::weight::{weight, RoadNetwork};
use super::SgviParams;
use crate::vector::{clip_points, union};

/// Run the pipeline for a single region.
///
/// Returns the region's row, or the error that abandoned it.
pub fn process_region(
    region: &BoundaryRegion,
    points: &[SamplePoint],
    roads: &RoadNetwork<'_>,
    params: &SgviParams,
) -> Result<RegionResult> {
    let clipped = clip_points(points, &region.polygon);
    if clipped.is_empty() {
        debug!("no sample points in region");
        return Ok(RegionResult::empty(region.id.as_str()));
    }

    let augmented = augment(region, &clipped, params.far_point_factor)?;
    let shape = union(&region.polygon.0).map_err(|e| Error::DegenerateBoundary {
        region: region.id.clone(),
        reason: e.to_string(),
    })?;

    let cells = tessellate(&augmented.generators(), &shape, params.max_extend_factor)?;
    let local_roads = roads.within(&augmented.bounds);
    let weights = if local_roads.is_empty() {
        vec![0.0; augmented.real_count()]
    } else {
        weight(&cells, augmented.real_count(), &local_roads)
    };

    let result = aggregate(&region.id, &augmented.scores(), &weights, params.zero_weight_policy)?;
    debug!(
        points = result.point_count,
        roads = local_roads.len(),
        total_length = weights.iter().sum::<f64>(),
        sgvi = result.sgvi,
        "region aggregated"
    );
    Ok(result)
}

/// Compute one result row per boundary, in boundary order.
///
/// Only invalid parameters or a worker pool that cannot be built make this
/// fail; region-level errors become `Failed` rows.
pub fn run(
    boundaries: &[BoundaryRegion],
    points: &[SamplePoint],
    features: &[LinearFeature],
    params: &SgviParams,
) -> Result<Vec<RegionResult>> {
    params.validate()?;

    let roads = RoadNetwork::new(features);
    info!(
        regions = boundaries.len(),
        points = points.len(),
        roads = roads.len(),
        threads = params.mode.threads(),
        "computing sGVI"
    );

    let results = params.mode.par_map(0..boundaries.len(), |i| {
        let region = &boundaries[i];
        let _span = debug_span!("region", index = i, id = %region.id).entered();

        process_region(region, points, &roads, params).unwrap_or_else(|e| {
            warn!(region = %region.id, error = %e, "region abandoned");
            RegionResult::failed(region.id.as_str(), e.failure_kind())
        })
    })?;

    let failed = results.iter().filter(|r| r.status.is_failed()).count();
    info!(regions = results.len(), failed, "sGVI complete");
    Ok(results)
}
