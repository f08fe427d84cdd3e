//! Overlay operations backed by the geo boolean-ops kernel
//!
//! The kernel may panic on degenerate or nearly coincident input. Every
//! call is contained here and reported as [`Error::ClipFailed`], so callers
//! decide whether a failure is recoverable.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use geo::{BooleanOps, MultiLineString, MultiPolygon, Polygon};
use sgvi_core::{Error, Result};

fn kernel<T>(op: &'static str, f: impl FnOnce() -> T) -> Result<T> {
    panic::catch_unwind(AssertUnwindSafe(f))
        .map_err(|payload| Error::ClipFailed(format!("{} failed: {}", op, panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "geometry kernel panicked".to_string()
    }
}

/// Intersection of two (multi-)polygons.
pub fn intersect_polygons(a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> Result<MultiPolygon<f64>> {
    if a.0.is_empty() || b.0.is_empty() {
        return Ok(MultiPolygon::new(vec![]));
    }
    kernel("polygon intersection", || a.intersection(b))
}

/// Merge polygon parts into one shape.
///
/// A single part is returned unchanged.
pub fn union(parts: &[Polygon<f64>]) -> Result<MultiPolygon<f64>> {
    match parts {
        [] => Ok(MultiPolygon::new(vec![])),
        [single] => Ok(MultiPolygon::new(vec![single.clone()])),
        [first, rest @ ..] => {
            let mut merged = MultiPolygon::new(vec![first.clone()]);
            for part in rest {
                let part = MultiPolygon::new(vec![part.clone()]);
                merged = kernel("polygon union", || merged.union(&part))?;
            }
            Ok(merged)
        }
    }
}

/// Clip polylines to the inside of a polygon.
///
/// The result is the possibly empty set of sub-polylines lying inside
/// the polygon. Pieces collinear with an edge are kept or dropped as the
/// kernel decides, so callers should not rely on either.
pub fn clip_polylines(lines: &MultiLineString<f64>, polygon: &MultiPolygon<f64>) -> Result<MultiLineString<f64>> {
    if lines.0.is_empty() || polygon.0.is_empty() {
        return Ok(MultiLineString::new(vec![]));
    }
    let clipped = kernel("polyline clip", || polygon.clip(lines, false))?;
    Ok(MultiLineString::new(
        clipped.0.into_iter().filter(|ls| ls.0.len() >= 2).collect(),
    ))
}
