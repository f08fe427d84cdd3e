//! Input model for the aggregation pipeline
//!
//! Sample points, boundary regions and linear features, all in one planar
//! coordinate system. Collections of these are loaded once and only ever
//! borrowed by the pipeline.

use geo_types::{Geometry, LineString, MultiPolygon, Point, Polygon};

use crate::error::{Error, Result};
use crate::vector::Feature;

/// Attribute holding the per-point score in street-view GVI outputs.
pub const DEFAULT_SCORE_FIELD: &str = "greenView";

/// A scored sample location.
///
/// Identity is the index of the point in the slice handed to the pipeline;
/// clipping keeps that index so weights can be mapped back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub location: Point<f64>,
    pub score: f64,
}

impl SamplePoint {
    pub fn new(x: f64, y: f64, score: f64) -> Self {
        Self {
            location: Point::new(x, y),
            score,
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.location.x()
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.location.y()
    }

    /// False for nodata points (non-finite coordinates or score).
    pub fn is_valid(&self) -> bool {
        self.x().is_finite() && self.y().is_finite() && self.score.is_finite()
    }

    /// Build a sample point from a point feature and its score attribute.
    ///
    /// A multi-point geometry is reduced to its first member.
    pub fn from_feature(feature: &Feature, score_field: &str) -> Result<Self> {
        let location = match &feature.geometry {
            Some(Geometry::Point(p)) => *p,
            Some(Geometry::MultiPoint(mp)) => *mp.0.first().ok_or_else(|| {
                Error::Other("empty multi-point sample feature".into())
            })?,
            Some(_) => return Err(Error::Other("sample feature is not a point".into())),
            None => return Err(Error::Other("sample feature has no geometry".into())),
        };
        let score = feature.get_f64(score_field).ok_or_else(|| {
            Error::Other(format!("sample feature has no numeric '{}' attribute", score_field))
        })?;
        Ok(Self { location, score })
    }
}

/// Attribute holding a boundary's identifier when the feature has no id.
pub const ID_FIELD: &str = "id";

/// One independent unit of aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryRegion {
    pub id: String,
    pub polygon: MultiPolygon<f64>,
}

impl BoundaryRegion {
    pub fn new(id: impl Into<String>, polygon: impl Into<MultiPolygon<f64>>) -> Self {
        Self {
            id: id.into(),
            polygon: polygon.into(),
        }
    }

    /// Build a region from a polygonal feature.
    ///
    /// The id is taken from the feature id, then from an integer or text
    /// `id` attribute, then from `fallback_id` (usually the row index).
    pub fn from_feature(feature: &Feature, fallback_id: usize) -> Result<Self> {
        let id = feature
            .id
            .clone()
            .or_else(|| feature.get_property(ID_FIELD).and_then(|v| v.as_id()))
            .unwrap_or_else(|| fallback_id.to_string());
        let polygon: MultiPolygon<f64> = match &feature.geometry {
            Some(Geometry::Polygon(p)) => p.clone().into(),
            Some(Geometry::MultiPolygon(mp)) => mp.clone(),
            Some(Geometry::Rect(r)) => Polygon::from(*r).into(),
            Some(_) => {
                return Err(Error::DegenerateBoundary {
                    region: id,
                    reason: "geometry is not polygonal".into(),
                })
            }
            None => {
                return Err(Error::DegenerateBoundary {
                    region: id,
                    reason: "feature has no geometry".into(),
                })
            }
        };
        Ok(Self { id, polygon })
    }
}

/// A single polyline of the road network.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearFeature {
    pub geometry: LineString<f64>,
}

impl LinearFeature {
    pub fn new(geometry: LineString<f64>) -> Self {
        Self { geometry }
    }

    /// Explode a linear geometry into single polylines.
    ///
    /// Non-linear geometries yield nothing.
    pub fn from_geometry(geometry: &Geometry<f64>) -> Vec<Self> {
        match geometry {
            Geometry::LineString(ls) => vec![Self::new(ls.clone())],
            Geometry::MultiLineString(mls) => mls.0.iter().cloned().map(Self::new).collect(),
            Geometry::Line(l) => vec![Self::new(LineString::from(vec![l.start, l.end]))],
            Geometry::GeometryCollection(gc) => gc.0.iter().flat_map(Self::from_geometry).collect(),
            _ => Vec::new(),
        }
    }
}

impl From<LineString<f64>> for LinearFeature {
    fn from(geometry: LineString<f64>) -> Self {
        Self::new(geometry)
    }
}
