use crate::datatypes::Dimension;
use crate::error::{GeokitError, Result};
use crate::geo_traits::{CurveTrait, GeometryCollectionTrait};
use crate::geometry::{
    Geometry, GeometryCollection, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
    Triangle,
};

/// Convert a Point to a [`geo::Point`].
///
/// Only the first two dimensions will be kept.
pub fn point_to_geo(point: &Point) -> geo::Point<f64> {
    geo::Point::new(point.x(), point.y())
}

/// Convert any curve to a [`geo::LineString`].
///
/// Only the first two dimensions will be kept.
pub fn line_string_to_geo(curve: &impl CurveTrait) -> geo::LineString<f64> {
    geo::LineString::new(
        curve
            .points()
            .iter()
            .map(|point| geo::Coord {
                x: point.x(),
                y: point.y(),
            })
            .collect(),
    )
}

/// Convert a Polygon to a [`geo::Polygon`].
///
/// Only the first two dimensions will be kept. `geo` closes open rings.
pub fn polygon_to_geo(polygon: &Polygon) -> geo::Polygon<f64> {
    let exterior = line_string_to_geo(polygon.exterior_ring());
    let interiors = polygon
        .interior_rings()
        .iter()
        .map(line_string_to_geo)
        .collect();
    geo::Polygon::new(exterior, interiors)
}

/// Convert a Triangle to a [`geo::Triangle`].
///
/// Only the first two dimensions will be kept.
pub fn triangle_to_geo(triangle: &Triangle) -> geo::Triangle<f64> {
    let [a, b, c] = triangle.vertices().map(|p| point_to_geo(&p).0);
    geo::Triangle::new(a, b, c)
}

/// Convert a MultiPoint to a [`geo::MultiPoint`].
///
/// Only the first two dimensions will be kept.
pub fn multi_point_to_geo(multi_point: &MultiPoint) -> geo::MultiPoint<f64> {
    geo::MultiPoint::new(multi_point.geometries().iter().map(point_to_geo).collect())
}

/// Convert a MultiLineString to a [`geo::MultiLineString`].
///
/// Only the first two dimensions will be kept.
pub fn multi_line_string_to_geo(
    multi_line_string: &MultiLineString,
) -> geo::MultiLineString<f64> {
    geo::MultiLineString::new(
        multi_line_string
            .geometries()
            .iter()
            .map(line_string_to_geo)
            .collect(),
    )
}

/// Convert a MultiPolygon to a [`geo::MultiPolygon`].
///
/// Only the first two dimensions will be kept.
pub fn multi_polygon_to_geo(multi_polygon: &MultiPolygon) -> geo::MultiPolygon<f64> {
    geo::MultiPolygon::new(
        multi_polygon
            .geometries()
            .iter()
            .map(polygon_to_geo)
            .collect(),
    )
}

/// Convert any Geometry to a [`geo::Geometry`].
///
/// Only the first two dimensions will be kept. Polyhedral surfaces and TINs have no `geo`
/// counterpart and become collections of their patches.
pub fn geometry_to_geo(geometry: &Geometry) -> geo::Geometry<f64> {
    match geometry {
        Geometry::Point(geom) => geo::Geometry::Point(point_to_geo(geom)),
        Geometry::LineString(geom) => geo::Geometry::LineString(line_string_to_geo(geom)),
        Geometry::LinearRing(geom) => geo::Geometry::LineString(line_string_to_geo(geom)),
        Geometry::Polygon(geom) => geo::Geometry::Polygon(polygon_to_geo(geom)),
        Geometry::Triangle(geom) => geo::Geometry::Triangle(triangle_to_geo(geom)),
        Geometry::MultiPoint(geom) => geo::Geometry::MultiPoint(multi_point_to_geo(geom)),
        Geometry::MultiLineString(geom) => {
            geo::Geometry::MultiLineString(multi_line_string_to_geo(geom))
        }
        Geometry::MultiPolygon(geom) => geo::Geometry::MultiPolygon(multi_polygon_to_geo(geom)),
        Geometry::GeometryCollection(geom) => {
            geo::Geometry::GeometryCollection(geometry_collection_to_geo(geom))
        }
        Geometry::PolyhedralSurface(geom) => geo::Geometry::GeometryCollection(
            geom.patches()
                .iter()
                .map(|patch| geo::Geometry::Polygon(polygon_to_geo(patch)))
                .collect(),
        ),
        Geometry::Tin(geom) => geo::Geometry::GeometryCollection(
            geom.patches()
                .iter()
                .map(|patch| geo::Geometry::Triangle(triangle_to_geo(patch)))
                .collect(),
        ),
    }
}

/// Convert a GeometryCollection to a [`geo::GeometryCollection`].
///
/// Only the first two dimensions will be kept.
pub fn geometry_collection_to_geo(
    geometry_collection: &GeometryCollection,
) -> geo::GeometryCollection<f64> {
    geometry_collection
        .geometries()
        .iter()
        .map(geometry_to_geo)
        .collect()
}

/// Lossless conversion: fails for geometries carrying Z or M values.
impl TryFrom<&Geometry> for geo::Geometry<f64> {
    type Error = GeokitError;

    fn try_from(value: &Geometry) -> Result<Self> {
        match value.coord_dimension() {
            Dimension::XY => Ok(geometry_to_geo(value)),
            dim => Err(GeokitError::UnsupportedDimension(dim)),
        }
    }
}

impl TryFrom<Geometry> for geo::Geometry<f64> {
    type Error = GeokitError;

    fn try_from(value: Geometry) -> Result<Self> {
        Self::try_from(&value)
    }
}
