//! Geometric measurements: area and polyline length

use geo::{Area as GeoArea, Euclidean, Length, LineString, MultiLineString, MultiPolygon};

/// Unsigned area of a (multi-)polygon in CRS units squared.
pub fn area(polygon: &MultiPolygon<f64>) -> f64 {
    polygon.unsigned_area()
}

/// Euclidean length of a polyline: the sum of its segment lengths.
#[inline]
pub fn length(line: &LineString<f64>) -> f64 {
    line.length::<Euclidean>()
}

/// Summed length of every polyline in the collection.
pub fn total_length(lines: &MultiLineString<f64>) -> f64 {
    lines.0.iter().map(length).sum()
}
