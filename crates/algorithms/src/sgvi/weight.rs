//! Road length per Voronoi cell
//!
//! A sample point's weight is the total length of road lying inside its
//! cell. Roads are clipped cell by cell; envelopes are cached so each clip
//! only sees the polylines that can touch the cell.
//!
//! Road pieces running exactly along an edge shared by two cells are
//! dropped by the clip and add to neither weight, so no length is ever
//! counted twice.

use geo::{LineString, MultiLineString, MultiPolygon};
use sgvi_core::{LinearFeature, Result};
use tracing::{trace, warn};

use super::voronoi::VoronoiCell;
use crate::vector::{bounding_box, clip_polylines, total_length, BoundingBox};

/// Read-only view of the road polylines with their envelopes.
#[derive(Debug, Clone)]
pub struct RoadNetwork<'a> {
    lines: Vec<(BoundingBox, &'a LineString<f64>)>,
}

impl<'a> RoadNetwork<'a> {
    /// Index a feature collection. Empty polylines are dropped.
    pub fn new(features: &'a [LinearFeature]) -> Self {
        let lines = features
            .iter()
            .filter_map(|f| bounding_box(&f.geometry).map(|bb| (bb, &f.geometry)))
            .collect();
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Polylines whose envelope touches `bounds`
    pub fn within(&self, bounds: &BoundingBox) -> RoadNetwork<'a> {
        RoadNetwork {
            lines: self
                .lines
                .iter()
                .filter(|(bb, _)| bb.intersects(bounds))
                .copied()
                .collect(),
        }
    }

    fn lines_near(&self, bounds: &BoundingBox) -> MultiLineString<f64> {
        MultiLineString::new(
            self.lines
                .iter()
                .filter(|(bb, _)| bb.intersects(bounds))
                .map(|(_, ls)| (*ls).clone())
                .collect(),
        )
    }

    /// Total road length inside a polygon.
    pub fn length_inside(&self, polygon: &MultiPolygon<f64>) -> Result<f64> {
        let Some(bounds) = bounding_box(polygon) else {
            return Ok(0.0);
        };
        let candidates = self.lines_near(&bounds);
        if candidates.0.is_empty() {
            return Ok(0.0);
        }
        let clipped = clip_polylines(&candidates, polygon)?;
        Ok(total_length(&clipped))
    }
}

/// Road length inside each real point's cell.
///
/// The result is indexed by generator for `0..real_count`; cells of
/// synthetic generators are ignored. A cell whose clip fails counts as
/// holding no road.
pub fn weight(cells: &[VoronoiCell], real_count: usize, roads: &RoadNetwork<'_>) -> Vec<f64> {
    weight_with(cells, real_count, |polygon| roads.length_inside(polygon))
}

fn weight_with<F>(cells: &[VoronoiCell], real_count: usize, measure: F) -> Vec<f64>
where
    F: Fn(&MultiPolygon<f64>) -> Result<f64>,
{
    let mut weights = vec![0.0; real_count];

    for cell in cells.iter().filter(|c| c.generator < real_count && !c.is_empty()) {
        match measure(&cell.polygon) {
            Ok(length) => {
                trace!(generator = cell.generator, length, "cell road length");
                weights[cell.generator] += length;
            }
            Err(e) => {
                warn!(generator = cell.generator, error = %e, "road clip failed, cell weighted 0");
            }
        }
    }

    weights
}
