//! Synthetic far points
//!
//! Voronoi construction needs at least three non-collinear generators. A
//! region may hold one or two samples, so four far points are always added
//! around the boundary's envelope. Their cells lie outside the boundary and
//! they never receive a weight.

use geo::Coord;
use sgvi_core::{BoundaryRegion, Error, Result, SamplePoint};

use crate::vector::{area, bounding_box, BoundingBox};

/// Number of far points appended to every region.
pub const SYNTHETIC_POINT_COUNT: usize = 4;

/// A sample point that fell inside the region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClippedPoint {
    /// Index into the full sample collection
    pub source_index: usize,
    pub location: Coord<f64>,
    pub score: f64,
}

/// Real points of one region followed by the four synthetic points.
///
/// Generator indices `0..real_count()` address real points, the rest are
/// synthetic.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedPointSet {
    pub real: Vec<ClippedPoint>,
    pub synthetic: [Coord<f64>; SYNTHETIC_POINT_COUNT],
    /// Envelope of the boundary the far points were placed around
    pub bounds: BoundingBox,
}

impl AugmentedPointSet {
    pub fn real_count(&self) -> usize {
        self.real.len()
    }

    pub fn is_synthetic(&self, generator: usize) -> bool {
        generator >= self.real.len()
    }

    /// All generator locations in generator-index order
    pub fn generators(&self) -> Vec<Coord<f64>> {
        self.real
            .iter()
            .map(|p| p.location)
            .chain(self.synthetic.iter().copied())
            .collect()
    }

    /// Scores of the real points, in generator-index order
    pub fn scores(&self) -> Vec<f64> {
        self.real.iter().map(|p| p.score).collect()
    }
}

/// Far points around an envelope.
///
/// With `h`/`w` the envelope height/width and `k` the factor:
/// `(xmin, ymax + k*h)`, `(xmax, ymin - k*h)`, `(xmax + k*w, ymin)`,
/// `(xmin - k*w, ymax)`.
pub fn far_points(bounds: &BoundingBox, factor: f64) -> [Coord<f64>; SYNTHETIC_POINT_COUNT] {
    let h = bounds.height();
    let w = bounds.width();
    [
        Coord { x: bounds.min_x, y: bounds.max_y + factor * h },
        Coord { x: bounds.max_x, y: bounds.min_y - factor * h },
        Coord { x: bounds.max_x + factor * w, y: bounds.min_y },
        Coord { x: bounds.min_x - factor * w, y: bounds.max_y },
    ]
}

/// Build the generator set for one region.
///
/// `clipped` are the region's sample points with their original indices,
/// as returned by [`crate::vector::clip_points`]. Fails with
/// `DegenerateBoundary` when the boundary or its envelope has no area.
pub fn augment(
    region: &BoundaryRegion,
    clipped: &[(usize, &SamplePoint)],
    factor: f64,
) -> Result<AugmentedPointSet> {
    let degenerate = |reason: &str| Error::DegenerateBoundary {
        region: region.id.clone(),
        reason: reason.to_string(),
    };

    let bounds = bounding_box(&region.polygon).ok_or_else(|| degenerate("boundary has no coordinates"))?;
    if !bounds.is_finite() {
        return Err(degenerate("non-finite bounding box"));
    }
    if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return Err(degenerate("zero-area bounding box"));
    }
    if area(&region.polygon) <= 0.0 {
        return Err(degenerate("polygon encloses no area"));
    }

    let real = clipped
        .iter()
        .map(|(index, p)| ClippedPoint {
            source_index: *index,
            location: p.location.0,
            score: p.score,
        })
        .collect();

    Ok(AugmentedPointSet {
        real,
        synthetic: far_points(&bounds, factor),
        bounds,
    })
}
