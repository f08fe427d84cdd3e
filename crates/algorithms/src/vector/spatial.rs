//! Axis-aligned bounding boxes

use geo::{BoundingRect, Coord, Rect};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Envelope of a set of coordinates, `None` when empty
    pub fn from_coords<'a, I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Coord<f64>>,
    {
        coords.into_iter().fold(None, |acc, c| {
            Some(match acc {
                None => Self::new(c.x, c.y, c.x, c.y),
                Some(bb) => Self::new(
                    bb.min_x.min(c.x),
                    bb.min_y.min(c.y),
                    bb.max_x.max(c.x),
                    bb.max_y.max(c.y),
                ),
            })
        })
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Larger of width and height
    pub fn extent(&self) -> f64 {
        self.width().max(self.height())
    }

    pub fn is_finite(&self) -> bool {
        self.min_x.is_finite() && self.min_y.is_finite() && self.max_x.is_finite() && self.max_y.is_finite()
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    /// Smallest box covering both
    pub fn merge(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    /// Grow every side by `margin`
    pub fn expand(&self, margin: f64) -> BoundingBox {
        BoundingBox::new(
            self.min_x - margin,
            self.min_y - margin,
            self.max_x + margin,
            self.max_y + margin,
        )
    }

    /// Corners in counter-clockwise order, without a closing vertex
    pub fn corners(&self) -> Vec<Coord<f64>> {
        vec![
            Coord { x: self.min_x, y: self.min_y },
            Coord { x: self.max_x, y: self.min_y },
            Coord { x: self.max_x, y: self.max_y },
            Coord { x: self.min_x, y: self.max_y },
        ]
    }
}

impl From<Rect<f64>> for BoundingBox {
    fn from(rect: Rect<f64>) -> Self {
        BoundingBox::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
    }
}

/// Compute the bounding box of a geometry, `None` when it has no coordinates
pub fn bounding_box<G>(geom: &G) -> Option<BoundingBox>
where
    G: BoundingRect<f64, Output = Option<Rect<f64>>>,
{
    geom.bounding_rect().map(BoundingBox::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{LineString, MultiPolygon, Polygon};

    fn sample_polygon() -> Polygon<f64> {
        Polygon::new(
            LineString::from(vec![
                (0.0, 0.0),
                (10.0, 0.0),
                (10.0, 4.0),
                (0.0, 4.0),
                (0.0, 0.0),
            ]),
            vec![],
        )
    }

    #[test]
    fn test_bounding_box() {
        let bb = bounding_box(&MultiPolygon::new(vec![sample_polygon()])).unwrap();

        assert_eq!(bb.min_x, 0.0);
        assert_eq!(bb.min_y, 0.0);
        assert_eq!(bb.max_x, 10.0);
        assert_eq!(bb.max_y, 4.0);
        assert_eq!(bb.width() * bb.height(), 40.0);
        assert_eq!(bb.extent(), 10.0);
    }

    #[test]
    fn test_bounding_box_empty() {
        assert!(bounding_box(&MultiPolygon::<f64>::new(vec![])).is_none());
        assert!(BoundingBox::from_coords(&Vec::<Coord<f64>>::new()).is_none());
    }

    #[test]
    fn test_from_coords() {
        let coords = [Coord { x: 3.0, y: -1.0 }, Coord { x: -2.0, y: 5.0 }];
        let bb = BoundingBox::from_coords(&coords).unwrap();
        assert_eq!(bb, BoundingBox::new(-2.0, -1.0, 3.0, 5.0));
    }

    #[test]
    fn test_bounding_box_intersects() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(5.0, 5.0, 15.0, 15.0);
        let c = BoundingBox::new(20.0, 20.0, 30.0, 30.0);

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert_eq!(a.merge(&c), BoundingBox::new(0.0, 0.0, 30.0, 30.0));
    }

    #[test]
    fn test_expand_and_corners() {
        let bb = BoundingBox::new(1.0, 2.0, 5.0, 8.0).expand(1.0);
        assert_eq!(bb, BoundingBox::new(0.0, 1.0, 6.0, 9.0));

        let corners = bb.corners();
        assert_eq!(corners.len(), 4);
        assert_eq!(corners[0], Coord { x: 0.0, y: 1.0 });
        assert_eq!(corners[2], Coord { x: 6.0, y: 9.0 });
    }
}
