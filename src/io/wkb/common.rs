use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::GeokitError;

/// EWKB flag: the geometry carries z ordinates
pub const EWKB_Z_FLAG: u32 = 0x8000_0000;

/// EWKB flag: the geometry carries m ordinates
pub const EWKB_M_FLAG: u32 = 0x4000_0000;

/// EWKB flag: an SRID follows the type code
pub const EWKB_SRID_FLAG: u32 = 0x2000_0000;

/// All EWKB flag bits
pub const EWKB_FLAGS: u32 = EWKB_Z_FLAG | EWKB_M_FLAG | EWKB_SRID_FLAG;

/// The base WKB type codes supported by this crate.
///
/// This doubles as the registry between geometry kinds and wire codes: encoding maps a
/// [`Geometry`](crate::geometry::Geometry) to one of these through
/// [`Geometry::wkb_type`](crate::geometry::Geometry::wkb_type), decoding goes through
/// [`TryFrom<u32>`]. A `LinearRing` has no code of its own and is written as a `LineString`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WkbType {
    /// A WKB Point
    Point = 1,
    /// A WKB LineString
    LineString = 2,
    /// A WKB Polygon
    Polygon = 3,
    /// A WKB MultiPoint
    MultiPoint = 4,
    /// A WKB MultiLineString
    MultiLineString = 5,
    /// A WKB MultiPolygon
    MultiPolygon = 6,
    /// A WKB GeometryCollection
    GeometryCollection = 7,
    /// A WKB PolyhedralSurface
    PolyhedralSurface = 15,
    /// A WKB TIN
    Tin = 16,
    /// A WKB Triangle
    Triangle = 17,
}

impl WkbType {
    /// Look up a base type code, with any EWKB flag bits already masked off.
    pub fn from_code(code: u32) -> Result<Self, GeokitError> {
        Self::try_from_primitive(code).map_err(|_| GeokitError::UnknownTypeCode(code))
    }

    /// The base type code.
    pub fn code(self) -> u32 {
        self.into()
    }

    /// Whether members of this type are written as complete nested geometries.
    pub fn is_collection(self) -> bool {
        matches!(
            self,
            WkbType::MultiPoint
                | WkbType::MultiLineString
                | WkbType::MultiPolygon
                | WkbType::GeometryCollection
                | WkbType::PolyhedralSurface
                | WkbType::Tin
        )
    }
}

/// Endianness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Endianness {
    BigEndian,
    #[default]
    LittleEndian,
}

impl TryFrom<u8> for Endianness {
    type Error = GeokitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Endianness::BigEndian),
            1 => Ok(Endianness::LittleEndian),
            other => Err(GeokitError::InvalidByteOrderMarker(other)),
        }
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        use Endianness::*;
        match value {
            BigEndian => 0,
            LittleEndian => 1,
        }
    }
}
