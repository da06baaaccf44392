use crate::datatypes::Dimension;
use crate::error::Result;
use crate::geo_traits::{uniform_dimension, CurveTrait};
use crate::geometry::{Polygon, Triangle};
use crate::io::wkb::common::WkbType;
use crate::io::wkb::writer::WkbWriter;
use crate::io::wkb::WkbHeader;

/// The byte length of a WKBPolygon
pub fn polygon_wkb_size(geom: &Polygon, dim: Dimension) -> usize {
    let each_coord = 8 * dim.size();
    WkbHeader::MIN_SIZE
        + 4
        + geom
            .rings()
            .map(|ring| 4 + ring.num_points() * each_coord)
            .sum::<usize>()
}

/// The byte length of a WKBTriangle
pub fn triangle_wkb_size(geom: &Triangle, dim: Dimension) -> usize {
    WkbHeader::MIN_SIZE + 4 + 4 + geom.exterior_ring().num_points() * 8 * dim.size()
}

impl WkbWriter {
    /// Write a ring count, then each ring as a point count and flat coordinates, exterior first.
    pub(super) fn write_polygon(&mut self, polygon: &Polygon, srid: Option<u32>) -> Result<()> {
        let dim = uniform_dimension(polygon.rings().flat_map(|ring| ring.points()))?
            .unwrap_or(Dimension::XY);
        self.write_header(WkbType::Polygon, dim, srid)?;
        self.write_count(polygon.num_rings())?;
        for ring in polygon.rings() {
            self.write_points(ring, dim)?;
        }
        Ok(())
    }

    pub(super) fn write_triangle(&mut self, triangle: &Triangle, srid: Option<u32>) -> Result<()> {
        let ring = triangle.exterior_ring();
        let dim = ring.uniform_dimension()?.unwrap_or(Dimension::XY);
        self.write_header(WkbType::Triangle, dim, srid)?;
        self.write_count(1)?;
        self.write_points(ring, dim)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{Geometry, LinearRing, Point};
    use crate::io::wkb::{decode_hex, from_wkb, WkbTransformer};
    use crate::test::polygon::{p0, p1};

    #[test]
    fn round_trip() {
        let expected = decode_hex(
            "01030000000200000005000000000000000000f03f000000000000004000000000000008400000000000001040000000000000144000000000000018400000000000001c400000000000002040000000000000f03f00000000000000400500000000000000000022400000000000002440000000000000264000000000000028400000000000002a400000000000002c400000000000002e40000000000000304000000000000022400000000000002440",
        )
        .unwrap();
        let buf = Geometry::Polygon(p0()).as_binary().unwrap();
        assert_eq!(buf, expected);
        assert_eq!(buf.len(), polygon_wkb_size(&p0(), Dimension::XY));

        let buf = Geometry::Polygon(p1()).as_binary().unwrap();
        assert_eq!(from_wkb(&buf).unwrap(), Geometry::Polygon(p1()));
    }

    #[test]
    fn triangle_round_trip() {
        let triangle = Triangle::from_vertices(
            Point::new_z(0., 0., 1.),
            Point::new_z(1., 0., 2.),
            Point::new_z(0., 1., 3.),
        );
        let geom = Geometry::Triangle(triangle.clone());
        let transformer = WkbTransformer::ewkb(None);
        let buf = transformer.encode(&geom).unwrap();
        assert_eq!(buf.len(), triangle_wkb_size(&triangle, Dimension::XYZ));
        assert_eq!(transformer.decode(&buf).unwrap(), geom);
    }

    #[test]
    fn mixed_ring_dimensions() {
        let exterior = LinearRing::closed(vec![
            Point::new(0., 0.),
            Point::new(1., 0.),
            Point::new(0., 1.),
        ]);
        let interior = LinearRing::closed(vec![
            Point::new_m(0.1, 0.1, 1.),
            Point::new_m(0.2, 0.1, 1.),
            Point::new_m(0.1, 0.2, 1.),
        ]);
        let geom = Geometry::Polygon(Polygon::new(exterior, vec![interior]));
        assert!(matches!(
            WkbTransformer::ewkb(None).encode(&geom),
            Err(crate::error::GeokitError::MixedDimensions { .. })
        ));
    }
}
