//! # sGVI Algorithms
//!
//! Geometry operations and the road-length weighted aggregation pipeline.
//!
//! ## Modules
//!
//! - **vector**: point/polyline clipping, polygon overlay, bounding boxes,
//!   length and area
//! - **sgvi**: far-point augmentation, Voronoi tessellation, road-length
//!   weighting, aggregation and the region batch driver

pub mod sgvi;
pub mod vector;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::sgvi::{
        process_region, run, sgvi, tessellate, RoadNetwork, Sgvi, SgviInput, SgviParams,
        VoronoiCell, ZeroWeightPolicy,
    };
    pub use crate::vector::{bounding_box, clip_points, clip_polylines, BoundingBox};
    pub use sgvi_core::prelude::*;
    pub use sgvi_parallel::ProcessingMode;
}
