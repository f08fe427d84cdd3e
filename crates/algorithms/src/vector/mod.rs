//! Vector geometry operations
//!
//! Planar primitives used by the aggregation pipeline:
//! - Clip: select points inside a polygon, cut convex rings by half-planes
//! - Overlay: polygon intersection and union, polyline clipping (geo kernel)
//! - Bounding box: axis-aligned envelope
//! - Area / Length: geometric measurements

mod clip;
mod measurements;
mod overlay;
mod spatial;

pub use clip::{clip_points, clip_ring_by_half_plane, HalfPlane};
pub use measurements::{area, length, total_length};
pub use overlay::{clip_polylines, intersect_polygons, union};
pub use spatial::{bounding_box, BoundingBox};
