use crate::datatypes::Dimension;
use crate::error::Result;
use crate::io::wkb::common::{
    Endianness, WkbType, EWKB_FLAGS, EWKB_M_FLAG, EWKB_SRID_FLAG, EWKB_Z_FLAG,
};
use crate::io::wkb::reader::ByteReader;

/// The decoded header that starts every WKB geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WkbHeader {
    /// Byte order of this geometry's own fields
    pub endianness: Endianness,

    /// Base type with the EWKB flag bits removed
    pub wkb_type: WkbType,

    /// Coordinate dimension from the Z and M flags
    pub dimension: Dimension,

    /// Embedded SRID, if the SRID flag was set
    pub srid: Option<u32>,
}

impl WkbHeader {
    /// The smallest possible header: byte order plus type code.
    pub const MIN_SIZE: usize = 1 + 4;

    pub(crate) fn read(reader: &mut ByteReader) -> Result<Self> {
        let endianness = Endianness::try_from(reader.read_u8()?)?;
        let type_code = reader.read_u32(endianness)?;

        let has_z = type_code & EWKB_Z_FLAG != 0;
        let has_m = type_code & EWKB_M_FLAG != 0;
        let has_srid = type_code & EWKB_SRID_FLAG != 0;
        let wkb_type = WkbType::from_code(type_code & !EWKB_FLAGS)?;

        let srid = if has_srid {
            Some(reader.read_u32(endianness)?)
        } else {
            None
        };

        Ok(Self {
            endianness,
            wkb_type,
            dimension: Dimension::from_flags(has_z, has_m),
            srid,
        })
    }
}
