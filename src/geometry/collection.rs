use crate::error::{GeokitError, Result};
use crate::geo_traits::{CurveTrait, GeometryCollectionTrait};
use crate::geometry::{Geometry, LineString, Point, Polygon};

/// A heterogeneous, ordered collection of geometries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
}

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self { geometries }
    }

    pub fn into_inner(self) -> Vec<Geometry> {
        self.geometries
    }
}

impl GeometryCollectionTrait for GeometryCollection {
    type ItemType = Geometry;

    fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }
}

impl From<Vec<Geometry>> for GeometryCollection {
    fn from(value: Vec<Geometry>) -> Self {
        Self::new(value)
    }
}

/// A collection of points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPoint {
    points: Vec<Point>,
}

impl MultiPoint {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn into_inner(self) -> Vec<Point> {
        self.points
    }
}

/// A collection of line strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiLineString {
    line_strings: Vec<LineString>,
}

impl MultiLineString {
    pub fn new(line_strings: Vec<LineString>) -> Self {
        Self { line_strings }
    }

    /// Closed if every member is closed.
    pub fn is_closed(&self) -> bool {
        self.line_strings.iter().all(|ls| ls.is_closed())
    }

    /// Sum of the planar lengths of the members.
    pub fn length(&self) -> f64 {
        self.line_strings.iter().map(|ls| ls.length()).sum()
    }

    pub fn into_inner(self) -> Vec<LineString> {
        self.line_strings
    }
}

/// A collection of polygons.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    pub fn into_inner(self) -> Vec<Polygon> {
        self.polygons
    }
}

macro_rules! impl_typed_collection {
    ($collection:ident, $item:ident, $field:ident) => {
        impl GeometryCollectionTrait for $collection {
            type ItemType = $item;

            fn geometries(&self) -> &[$item] {
                &self.$field
            }
        }

        impl From<Vec<$item>> for $collection {
            fn from(value: Vec<$item>) -> Self {
                Self::new(value)
            }
        }

        impl TryFrom<Vec<Geometry>> for $collection {
            type Error = GeokitError;

            fn try_from(value: Vec<Geometry>) -> Result<Self> {
                let members = value
                    .into_iter()
                    .map($item::try_from)
                    .collect::<Result<Vec<_>>>()?;
                Ok(Self::new(members))
            }
        }
    };
}

impl_typed_collection!(MultiPoint, Point, points);
impl_typed_collection!(MultiLineString, LineString, line_strings);
impl_typed_collection!(MultiPolygon, Polygon, polygons);
