//! Clipping operations
//!
//! Boundary-inclusive point selection against polygons, and single-edge
//! Sutherland-Hodgman clipping of convex rings by half-planes.

use geo::{Coord, Intersects, MultiPolygon};
use sgvi_core::SamplePoint;

use super::spatial::bounding_box;

/// Select the points lying inside or on the boundary of a polygon.
///
/// Returns `(original_index, point)` pairs in input order. Nodata points
/// (non-finite coordinates or score) are never selected.
pub fn clip_points<'a>(
    points: &'a [SamplePoint],
    polygon: &MultiPolygon<f64>,
) -> Vec<(usize, &'a SamplePoint)> {
    let Some(bounds) = bounding_box(polygon) else {
        return Vec::new();
    };

    points
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_valid())
        .filter(|(_, p)| bounds.contains_point(p.x(), p.y()))
        .filter(|(_, p)| polygon.intersects(&p.location))
        .collect()
}

/// Closed half-plane `{ p : (p - origin) · normal <= 0 }`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfPlane {
    pub origin: Coord<f64>,
    pub normal: Coord<f64>,
}

impl HalfPlane {
    pub fn new(origin: Coord<f64>, normal: Coord<f64>) -> Self {
        Self { origin, normal }
    }

    /// Side of the perpendicular bisector of `a`-`b` that contains `a`.
    pub fn bisector(a: Coord<f64>, b: Coord<f64>) -> Self {
        Self::new(
            Coord {
                x: (a.x + b.x) * 0.5,
                y: (a.y + b.y) * 0.5,
            },
            Coord {
                x: b.x - a.x,
                y: b.y - a.y,
            },
        )
    }

    #[inline]
    fn signed_distance(&self, p: &Coord<f64>) -> f64 {
        (p.x - self.origin.x) * self.normal.x + (p.y - self.origin.y) * self.normal.y
    }

    pub fn contains(&self, p: &Coord<f64>) -> bool {
        self.signed_distance(p) <= 0.0
    }

    /// Point where segment `p`-`q` crosses the boundary line
    fn crossing(&self, p: &Coord<f64>, q: &Coord<f64>) -> Coord<f64> {
        let dp = self.signed_distance(p);
        let t = dp / (dp - self.signed_distance(q));
        Coord {
            x: p.x + t * (q.x - p.x),
            y: p.y + t * (q.y - p.y),
        }
    }
}

/// Clip an open ring (no closing vertex) against a half-plane.
///
/// For a convex input the output is the convex intersection; it may have
/// fewer than 3 vertices when the ring lies outside the half-plane.
pub fn clip_ring_by_half_plane(vertices: &[Coord<f64>], plane: &HalfPlane) -> Vec<Coord<f64>> {
    if vertices.is_empty() {
        return Vec::new();
    }

    let mut output = Vec::with_capacity(vertices.len() + 1);
    let n = vertices.len();

    for i in 0..n {
        let current = &vertices[i];
        let next = &vertices[(i + 1) % n];

        match (plane.contains(current), plane.contains(next)) {
            (true, true) => output.push(*next),
            (true, false) => output.push(plane.crossing(current, next)),
            (false, true) => {
                output.push(plane.crossing(current, next));
                output.push(*next);
            }
            (false, false) => {}
        }
    }

    output
}
