//! Immutable geometry values following the OGC Simple Features model.
//!
//! Every geometry kind is a plain owned value tree with structural equality. [`Geometry`] is
//! the closed sum over all kinds and is what the WKB codec reads and writes.

pub use collection::{GeometryCollection, MultiLineString, MultiPoint, MultiPolygon};
pub use coord::Coord;
pub use linestring::{LineString, LinearRing};
pub use point::Point;
pub use polygon::{Polygon, Triangle};
pub use surface::{PolyhedralSurface, Tin};

mod collection;
mod coord;
mod linestring;
mod point;
mod polygon;
mod surface;

use crate::datatypes::Dimension;
use crate::error::{GeokitError, Result};
use crate::geo_traits::{CurveTrait, GeometryCollectionTrait};
use crate::io::wkb::{WkbTransformer, WkbType};

/// Any geometry value.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    LinearRing(LinearRing),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
    Triangle(Triangle),
    PolyhedralSurface(PolyhedralSurface),
    Tin(Tin),
}

impl Geometry {
    /// The Simple Features name of this geometry's kind.
    pub fn geometry_type(&self) -> &'static str {
        match self {
            Self::Point(_) => "Point",
            Self::LineString(_) => "LineString",
            Self::LinearRing(_) => "LinearRing",
            Self::Polygon(_) => "Polygon",
            Self::MultiPoint(_) => "MultiPoint",
            Self::MultiLineString(_) => "MultiLineString",
            Self::MultiPolygon(_) => "MultiPolygon",
            Self::GeometryCollection(_) => "GeometryCollection",
            Self::Triangle(_) => "Triangle",
            Self::PolyhedralSurface(_) => "PolyhedralSurface",
            Self::Tin(_) => "TIN",
        }
    }

    /// The base WKB type code of this geometry's kind.
    pub fn wkb_type(&self) -> WkbType {
        match self {
            Self::Point(_) => WkbType::Point,
            Self::LineString(_) | Self::LinearRing(_) => WkbType::LineString,
            Self::Polygon(_) => WkbType::Polygon,
            Self::MultiPoint(_) => WkbType::MultiPoint,
            Self::MultiLineString(_) => WkbType::MultiLineString,
            Self::MultiPolygon(_) => WkbType::MultiPolygon,
            Self::GeometryCollection(_) => WkbType::GeometryCollection,
            Self::Triangle(_) => WkbType::Triangle,
            Self::PolyhedralSurface(_) => WkbType::PolyhedralSurface,
            Self::Tin(_) => WkbType::Tin,
        }
    }

    /// The topological dimension: 0 for points, 1 for curves, 2 for surfaces.
    ///
    /// Collections report the largest dimension among their members, or 0 when empty.
    pub fn dimension(&self) -> usize {
        match self {
            Self::Point(_) | Self::MultiPoint(_) => 0,
            Self::LineString(_) | Self::LinearRing(_) | Self::MultiLineString(_) => 1,
            Self::Polygon(_)
            | Self::MultiPolygon(_)
            | Self::Triangle(_)
            | Self::PolyhedralSurface(_)
            | Self::Tin(_) => 2,
            Self::GeometryCollection(gc) => gc
                .geometries()
                .iter()
                .map(|g| g.dimension())
                .max()
                .unwrap_or(0),
        }
    }

    /// The smallest coordinate dimension covering every coordinate in this geometry.
    ///
    /// Empty geometries are [`Dimension::XY`].
    pub fn coord_dimension(&self) -> Dimension {
        let mut dim = Dimension::XY;
        self.visit_points(&mut |point: &Point| dim = dim.union(point.dimension()));
        dim
    }

    pub fn is_3d(&self) -> bool {
        self.coord_dimension().has_z()
    }

    pub fn is_measured(&self) -> bool {
        self.coord_dimension().has_m()
    }

    /// Whether this geometry has no points at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Point(_) => false,
            Self::LineString(ls) => ls.num_points() == 0,
            Self::LinearRing(ring) => ring.num_points() == 0,
            Self::Polygon(p) => p.rings().all(|ring| ring.num_points() == 0),
            Self::Triangle(t) => t.exterior_ring().num_points() == 0,
            Self::MultiPoint(mp) => mp.num_geometries() == 0,
            Self::MultiLineString(mls) => {
                mls.geometries().iter().all(|ls| ls.num_points() == 0)
            }
            Self::MultiPolygon(mp) => mp
                .geometries()
                .iter()
                .all(|p| p.rings().all(|ring| ring.num_points() == 0)),
            Self::GeometryCollection(gc) => gc.geometries().iter().all(|g| g.is_empty()),
            Self::PolyhedralSurface(ps) => ps
                .patches()
                .iter()
                .all(|p| p.rings().all(|ring| ring.num_points() == 0)),
            Self::Tin(tin) => tin.num_patches() == 0,
        }
    }

    /// Encode as little-endian plain WKB.
    pub fn as_binary(&self) -> Result<Vec<u8>> {
        WkbTransformer::default().encode(self)
    }

    /// Call `f` on every point of this geometry in wire order.
    pub(crate) fn visit_points(&self, f: &mut impl FnMut(&Point)) {
        match self {
            Self::Point(p) => f(p),
            Self::LineString(ls) => ls.points().iter().for_each(f),
            Self::LinearRing(ring) => ring.points().iter().for_each(f),
            Self::Polygon(p) => p.rings().flat_map(|r| r.points()).for_each(f),
            Self::Triangle(t) => t.exterior_ring().points().iter().for_each(f),
            Self::MultiPoint(mp) => mp.geometries().iter().for_each(f),
            Self::MultiLineString(mls) => mls
                .geometries()
                .iter()
                .flat_map(|ls| ls.points())
                .for_each(f),
            Self::MultiPolygon(mp) => mp
                .geometries()
                .iter()
                .flat_map(|p| p.rings())
                .flat_map(|r| r.points())
                .for_each(f),
            Self::GeometryCollection(gc) => gc
                .geometries()
                .iter()
                .for_each(|g| g.visit_points(&mut *f)),
            Self::PolyhedralSurface(ps) => ps
                .patches()
                .iter()
                .flat_map(|p| p.rings())
                .flat_map(|r| r.points())
                .for_each(f),
            Self::Tin(tin) => tin
                .patches()
                .iter()
                .flat_map(|t| t.exterior_ring().points())
                .for_each(f),
        }
    }
}

macro_rules! impl_geometry_conversions {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Geometry {
                fn from(value: $variant) -> Self {
                    Geometry::$variant(value)
                }
            }

            impl TryFrom<Geometry> for $variant {
                type Error = GeokitError;

                fn try_from(value: Geometry) -> Result<Self> {
                    match value {
                        Geometry::$variant(geom) => Ok(geom),
                        other => Err(GeokitError::IncorrectGeometryType(format!(
                            "expected {}, got {}",
                            stringify!($variant),
                            other.geometry_type()
                        ))),
                    }
                }
            }
        )*
    };
}

impl_geometry_conversions!(
    Point,
    LineString,
    LinearRing,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    Triangle,
    PolyhedralSurface,
    Tin
);
