use crate::geometry::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, Triangle,
};

/// Convert a [`geo::Coord`] to a two-dimensional [`Point`].
pub fn coord_from_geo(coord: geo::Coord<f64>) -> Point {
    Point::new(coord.x, coord.y)
}

/// Convert a [`geo::LineString`] to a [`LineString`].
pub fn line_string_from_geo(line_string: &geo::LineString<f64>) -> LineString {
    LineString::new(line_string.coords().copied().map(coord_from_geo).collect())
}

/// Convert a polygon ring to a [`LinearRing`].
///
/// `geo` keeps its rings closed, so the points are taken as they are.
pub fn ring_from_geo(ring: &geo::LineString<f64>) -> LinearRing {
    LinearRing::new(ring.coords().copied().map(coord_from_geo).collect())
}

/// Convert a [`geo::Polygon`] to a [`Polygon`].
pub fn polygon_from_geo(polygon: &geo::Polygon<f64>) -> Polygon {
    Polygon::new(
        ring_from_geo(polygon.exterior()),
        polygon.interiors().iter().map(ring_from_geo).collect(),
    )
}

/// Convert a [`geo::Triangle`] to a [`Triangle`].
pub fn triangle_from_geo(triangle: &geo::Triangle<f64>) -> Triangle {
    let [a, b, c] = triangle.to_array().map(coord_from_geo);
    Triangle::from_vertices(a, b, c)
}

impl From<&geo::Geometry<f64>> for Geometry {
    fn from(value: &geo::Geometry<f64>) -> Self {
        match value {
            geo::Geometry::Point(point) => Geometry::Point(coord_from_geo(point.0)),
            geo::Geometry::Line(line) => Geometry::LineString(LineString::line(
                coord_from_geo(line.start),
                coord_from_geo(line.end),
            )),
            geo::Geometry::LineString(line_string) => {
                Geometry::LineString(line_string_from_geo(line_string))
            }
            geo::Geometry::Polygon(polygon) => Geometry::Polygon(polygon_from_geo(polygon)),
            geo::Geometry::MultiPoint(multi_point) => Geometry::MultiPoint(MultiPoint::new(
                multi_point.iter().map(|point| coord_from_geo(point.0)).collect(),
            )),
            geo::Geometry::MultiLineString(multi_line_string) => {
                Geometry::MultiLineString(MultiLineString::new(
                    multi_line_string.iter().map(line_string_from_geo).collect(),
                ))
            }
            geo::Geometry::MultiPolygon(multi_polygon) => Geometry::MultiPolygon(
                MultiPolygon::new(multi_polygon.iter().map(polygon_from_geo).collect()),
            ),
            geo::Geometry::GeometryCollection(collection) => Geometry::GeometryCollection(
                GeometryCollection::new(collection.iter().map(Geometry::from).collect()),
            ),
            geo::Geometry::Rect(rect) => Geometry::Polygon(polygon_from_geo(&rect.to_polygon())),
            geo::Geometry::Triangle(triangle) => {
                Geometry::Triangle(triangle_from_geo(triangle))
            }
        }
    }
}

impl From<geo::Geometry<f64>> for Geometry {
    fn from(value: geo::Geometry<f64>) -> Self {
        Self::from(&value)
    }
}
