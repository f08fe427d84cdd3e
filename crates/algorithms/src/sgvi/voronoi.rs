//! Voronoi tessellation clipped to a bounding shape
//!
//! Each cell starts as a frame rectangle around all generators and is cut by
//! the perpendicular bisector against every other generator. Neighbours are
//! visited nearest first, so the scan stops as soon as the next generator is
//! farther than twice the cell's current radius (its bisector can no longer
//! touch the cell). The convex cell is then intersected with the bounding
//! shape.

use geo::{Coord, LineString, MultiPolygon, Polygon};
use sgvi_core::{Error, Result};

use crate::vector::{bounding_box, clip_ring_by_half_plane, intersect_polygons, BoundingBox, HalfPlane};

/// Relative distance under which two generators count as coincident.
const COINCIDENT_TOLERANCE: f64 = 1e-9;

/// A Voronoi cell clipped to the bounding shape.
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiCell {
    /// Cell geometry; empty when the cell misses the bounding shape
    pub polygon: MultiPolygon<f64>,
    /// Index of the generating point
    pub generator: usize,
}

impl VoronoiCell {
    pub fn is_empty(&self) -> bool {
        self.polygon.0.is_empty()
    }
}

/// Compute the Voronoi diagram of `generators`, clipped to `bounding_shape`.
///
/// Returns exactly one cell per generator, in generator order.
/// `max_extend_factor` sets how far the frame enclosing the outer cells
/// reaches beyond the data, in multiples of the shape's extent.
///
/// # Errors
/// `TessellationFailed` for fewer than 3 generators, non-finite or
/// coincident generators, all-collinear input, or a cell the geometry
/// kernel cannot clip. `InvalidParameter` for a bad `max_extend_factor`.
pub fn tessellate(
    generators: &[Coord<f64>],
    bounding_shape: &MultiPolygon<f64>,
    max_extend_factor: f64,
) -> Result<Vec<VoronoiCell>> {
    if !max_extend_factor.is_finite() || max_extend_factor <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "max_extend_factor",
            value: max_extend_factor.to_string(),
            reason: "must be a positive finite number".into(),
        });
    }
    if generators.len() < 3 {
        return Err(Error::TessellationFailed(format!(
            "need at least 3 generators, got {}",
            generators.len()
        )));
    }
    if generators.iter().any(|c| !c.x.is_finite() || !c.y.is_finite()) {
        return Err(Error::TessellationFailed("non-finite generator coordinate".into()));
    }

    let shape_bounds = bounding_box(bounding_shape)
        .ok_or_else(|| Error::TessellationFailed("empty bounding shape".into()))?;
    let point_bounds = BoundingBox::from_coords(generators)
        .ok_or_else(|| Error::TessellationFailed("no generators".into()))?;
    let all_bounds = point_bounds.merge(&shape_bounds);

    let tolerance = COINCIDENT_TOLERANCE * all_bounds.extent().max(f64::MIN_POSITIVE);
    check_coincident(generators, tolerance)?;
    check_collinear(generators, tolerance)?;

    let margin = max_extend_factor * shape_bounds.extent().max(point_bounds.extent());
    let frame = all_bounds.expand(margin).corners();

    (0..generators.len())
        .map(|i| {
            let ring = convex_cell(generators, i, &frame)?;
            let convex = MultiPolygon::new(vec![Polygon::new(LineString::new(ring), vec![])]);
            let polygon = intersect_polygons(&convex, bounding_shape)
                .map_err(|e| Error::TessellationFailed(format!("cell {}: {}", i, e)))?;
            Ok(VoronoiCell { polygon, generator: i })
        })
        .collect()
}

/// Unclipped convex cell of generator `i`, as an open ring.
fn convex_cell(generators: &[Coord<f64>], i: usize, frame: &[Coord<f64>]) -> Result<Vec<Coord<f64>>> {
    let site = generators[i];

    let mut neighbors: Vec<(f64, usize)> = generators
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != i)
        .map(|(j, c)| (dist_sq(&site, c), j))
        .collect();
    neighbors.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

    let mut ring = frame.to_vec();
    for (d_sq, j) in neighbors {
        let radius_sq = ring.iter().map(|v| dist_sq(&site, v)).fold(0.0_f64, f64::max);
        if d_sq > 4.0 * radius_sq {
            break;
        }
        ring = clip_ring_by_half_plane(&ring, &HalfPlane::bisector(site, generators[j]));
        if ring.len() < 3 {
            return Err(Error::TessellationFailed(format!(
                "cell {} collapsed against generator {}",
                i, j
            )));
        }
    }

    Ok(ring)
}

fn check_coincident(generators: &[Coord<f64>], tolerance: f64) -> Result<()> {
    let mut order: Vec<usize> = (0..generators.len()).collect();
    order.sort_by(|&a, &b| generators[a].x.total_cmp(&generators[b].x));

    let tol_sq = tolerance * tolerance;
    for (k, &a) in order.iter().enumerate() {
        for &b in &order[k + 1..] {
            if generators[b].x - generators[a].x > tolerance {
                break;
            }
            if dist_sq(&generators[a], &generators[b]) <= tol_sq {
                return Err(Error::TessellationFailed(format!(
                    "generators {} and {} coincide at ({}, {})",
                    a.min(b),
                    a.max(b),
                    generators[a].x,
                    generators[a].y
                )));
            }
        }
    }
    Ok(())
}

fn check_collinear(generators: &[Coord<f64>], tolerance: f64) -> Result<()> {
    let origin = generators[0];
    let (far_sq, far) = generators
        .iter()
        .map(|c| (dist_sq(&origin, c), *c))
        .fold((0.0, origin), |best, cur| if cur.0 > best.0 { cur } else { best });

    let dir = Coord { x: far.x - origin.x, y: far.y - origin.y };
    let span = far_sq.sqrt();
    let off_line = generators.iter().any(|c| {
        let cross = dir.x * (c.y - origin.y) - dir.y * (c.x - origin.x);
        cross.abs() > tolerance * span
    });

    if off_line {
        Ok(())
    } else {
        Err(Error::TessellationFailed("all generators are collinear".into()))
    }
}

#[inline]
fn dist_sq(a: &Coord<f64>, b: &Coord<f64>) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::area;
    use geo::{Contains, Point};

    fn square(size: f64) -> MultiPolygon<f64> {
        MultiPolygon::new(vec![Polygon::new(
            LineString::from(vec![
                (0.0, 0.0), (size, 0.0), (size, size), (0.0, size), (0.0, 0.0),
            ]),
            vec![],
        )])
    }

    fn c(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    #[test]
    fn test_two_by_two_grid() {
        let generators = vec![c(2.5, 2.5), c(7.5, 2.5), c(2.5, 7.5), c(7.5, 7.5)];
        let cells = tessellate(&generators, &square(10.0), 20.0).unwrap();

        assert_eq!(cells.len(), 4);
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.generator, i);
            assert!((area(&cell.polygon) - 25.0).abs() < 1e-6, "cell {} area", i);
            let site = Point::from(generators[i]);
            assert!(cell.polygon.contains(&site));
        }
    }

    #[test]
    fn test_cells_partition_shape() {
        let generators = vec![
            c(1.0, 1.0), c(8.0, 2.0), c(4.0, 6.0), c(9.0, 9.0), c(2.0, 8.5), c(5.5, 3.0),
        ];
        let shape = square(10.0);
        let cells = tessellate(&generators, &shape, 20.0).unwrap();

        let total: f64 = cells.iter().map(|cell| area(&cell.polygon)).sum();
        assert!((total - 100.0).abs() < 1e-6, "total area {}", total);

        for (i, a) in cells.iter().enumerate() {
            for b in &cells[i + 1..] {
                let shared = intersect_polygons(&a.polygon, &b.polygon).unwrap();
                assert!(area(&shared) < 1e-6, "cells {} and {} overlap", a.generator, b.generator);
            }
        }

        // Each site lies in its own cell only
        for cell in &cells {
            for (j, g) in generators.iter().enumerate() {
                let inside = cell.polygon.contains(&Point::from(*g));
                assert_eq!(inside, j == cell.generator, "cell {} vs site {}", cell.generator, j);
            }
        }
    }

    #[test]
    fn test_far_generator_cell_outside_shape_is_empty() {
        let generators = vec![c(5.0, 5.0), c(500.0, 0.0), c(0.0, 500.0)];
        let cells = tessellate(&generators, &square(10.0), 20.0).unwrap();
        assert!((area(&cells[0].polygon) - 100.0).abs() < 1e-6);
        assert!(area(&cells[1].polygon) < 1e-9);
        assert!(area(&cells[2].polygon) < 1e-9);
    }

    #[test]
    fn test_too_few_generators() {
        let err = tessellate(&[c(0.0, 0.0), c(1.0, 1.0)], &square(10.0), 20.0).unwrap_err();
        assert!(matches!(err, Error::TessellationFailed(_)));
    }

    #[test]
    fn test_duplicate_generators() {
        let generators = vec![c(1.0, 1.0), c(5.0, 5.0), c(1.0, 1.0), c(9.0, 2.0)];
        let err = tessellate(&generators, &square(10.0), 20.0).unwrap_err();
        assert!(matches!(err, Error::TessellationFailed(_)));
    }

    #[test]
    fn test_collinear_generators() {
        let generators = vec![c(1.0, 1.0), c(2.0, 2.0), c(3.0, 3.0), c(4.0, 4.0)];
        let err = tessellate(&generators, &square(10.0), 20.0).unwrap_err();
        assert!(matches!(err, Error::TessellationFailed(_)));
    }

    #[test]
    fn test_invalid_extend_factor() {
        let generators = vec![c(1.0, 1.0), c(5.0, 5.0), c(9.0, 2.0)];
        for factor in [0.0, -1.0, f64::NAN] {
            let err = tessellate(&generators, &square(10.0), factor).unwrap_err();
            assert!(matches!(err, Error::InvalidParameter { .. }));
        }
    }

    #[test]
    fn test_deterministic() {
        let generators = vec![c(1.0, 1.0), c(8.0, 2.0), c(4.0, 6.0), c(9.0, 9.0)];
        let a = tessellate(&generators, &square(10.0), 20.0).unwrap();
        let b = tessellate(&generators, &square(10.0), 20.0).unwrap();
        assert_eq!(a, b);
    }
}
