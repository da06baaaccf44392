use crate::error::{GeokitError, Result};
use crate::geo_traits::CurveTrait;
use crate::geometry::{LinearRing, Point};

/// A planar surface bounded by one exterior ring and zero or more interior rings (holes).
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    exterior: LinearRing,
    interiors: Vec<LinearRing>,
}

impl Polygon {
    pub fn new(exterior: LinearRing, interiors: Vec<LinearRing>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    /// Build a polygon from rings in wire order: the first ring is the exterior.
    ///
    /// Fails if `rings` is empty.
    pub fn try_from_rings(rings: Vec<LinearRing>) -> Result<Self> {
        let mut rings = rings.into_iter();
        let exterior = rings.next().ok_or_else(|| {
            GeokitError::InvalidGeometry("a polygon needs an exterior ring".to_string())
        })?;
        Ok(Self::new(exterior, rings.collect()))
    }

    pub fn exterior_ring(&self) -> &LinearRing {
        &self.exterior
    }

    pub fn num_interior_rings(&self) -> usize {
        self.interiors.len()
    }

    pub fn interior_ring_n(&self, n: usize) -> Option<&LinearRing> {
        self.interiors.get(n)
    }

    pub fn interior_rings(&self) -> &[LinearRing] {
        &self.interiors
    }

    /// All rings, exterior first.
    pub fn rings(&self) -> impl Iterator<Item = &LinearRing> {
        std::iter::once(&self.exterior).chain(self.interiors.iter())
    }

    pub fn num_rings(&self) -> usize {
        1 + self.interiors.len()
    }

    pub fn into_inner(self) -> (LinearRing, Vec<LinearRing>) {
        (self.exterior, self.interiors)
    }
}

impl From<Triangle> for Polygon {
    fn from(value: Triangle) -> Self {
        Self::new(value.exterior, vec![])
    }
}

/// A polygon with exactly three distinct vertices and no interior rings.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    exterior: LinearRing,
}

impl Triangle {
    /// The number of points in a triangle's closed exterior ring
    pub const RING_POINTS: usize = 4;

    /// Fails unless the ring holds exactly four points (three vertices plus the closing point).
    pub fn new(exterior: LinearRing) -> Result<Self> {
        if exterior.num_points() != Self::RING_POINTS {
            return Err(GeokitError::InvalidGeometry(format!(
                "a triangle ring needs {} points, got {}",
                Self::RING_POINTS,
                exterior.num_points()
            )));
        }
        Ok(Self { exterior })
    }

    /// Build a triangle from its three vertices, closing the ring.
    pub fn from_vertices(a: Point, b: Point, c: Point) -> Self {
        Self {
            exterior: LinearRing::new(vec![a, b, c, a]),
        }
    }

    pub fn exterior_ring(&self) -> &LinearRing {
        &self.exterior
    }

    /// The first three points of the exterior ring.
    pub fn vertices(&self) -> [Point; 3] {
        let points = self.exterior.points();
        [points[0], points[1], points[2]]
    }

    pub fn num_interior_rings(&self) -> usize {
        0
    }

    pub fn interior_rings(&self) -> &[LinearRing] {
        &[]
    }
}

impl TryFrom<Polygon> for Triangle {
    type Error = GeokitError;

    fn try_from(value: Polygon) -> Result<Self> {
        let (exterior, interiors) = value.into_inner();
        if !interiors.is_empty() {
            return Err(GeokitError::InvalidGeometry(
                "a triangle has no interior rings".to_string(),
            ));
        }
        Triangle::new(exterior)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::polygon::p0;

    #[test]
    fn accessors() {
        let polygon = p0();
        assert_eq!(polygon.num_rings(), 2);
        assert_eq!(polygon.num_interior_rings(), 1);
        assert_eq!(polygon.exterior_ring().num_points(), 5);
        assert!(polygon.interior_ring_n(0).is_some());
        assert!(polygon.interior_ring_n(1).is_none());
        let rings: Vec<_> = polygon.rings().collect();
        assert_eq!(rings[0], polygon.exterior_ring());
    }

    #[test]
    fn from_rings_needs_exterior() {
        assert!(matches!(
            Polygon::try_from_rings(vec![]),
            Err(GeokitError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn triangle_ring_size() {
        let ring = LinearRing::closed(vec![
            Point::new(0., 0.),
            Point::new(1., 0.),
            Point::new(0., 1.),
        ]);
        let triangle = Triangle::new(ring.clone()).unwrap();
        assert_eq!(triangle.exterior_ring(), &ring);
        assert_eq!(triangle.num_interior_rings(), 0);

        let open = LinearRing::new(vec![Point::new(0., 0.), Point::new(1., 0.)]);
        assert!(Triangle::new(open).is_err());
    }

    #[test]
    fn triangle_from_vertices() {
        let (a, b, c) = (Point::new(0., 0.), Point::new(1., 0.), Point::new(0., 1.));
        let triangle = Triangle::from_vertices(a, b, c);
        assert!(triangle.exterior_ring().is_closed());
        assert_eq!(triangle.vertices(), [a, b, c]);
    }

    #[test]
    fn triangle_from_polygon() {
        assert!(Triangle::try_from(p0()).is_err());
        let ring = LinearRing::closed(vec![
            Point::new(0., 0.),
            Point::new(1., 0.),
            Point::new(0., 1.),
        ]);
        let polygon = Polygon::new(ring, vec![]);
        let triangle = Triangle::try_from(polygon.clone()).unwrap();
        assert_eq!(Polygon::from(triangle), polygon);
    }
}
