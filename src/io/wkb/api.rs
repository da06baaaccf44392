use log::warn;

use crate::error::{GeokitError, Result};
use crate::geometry::Geometry;
use crate::io::wkb::hex::{decode_hex, encode_hex};
use crate::io::wkb::options::{WkbDialect, WkbOptions};
use crate::io::wkb::reader::WkbReader;
use crate::io::wkb::writer::{geometry_wkb_size, ByteWriter, WkbWriter};

/// A decoded geometry together with the SRID embedded in its root header, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryWithSrid {
    pub geometry: Geometry,
    pub srid: Option<u32>,
}

/// Converts [`Geometry`] values to and from WKB or EWKB.
///
/// The transformer only holds its [`WkbOptions`]; every call works on its own buffer, so one
/// instance can be shared freely between threads.
///
/// ```
/// use geokit::geometry::{Geometry, Point};
/// use geokit::io::wkb::WkbTransformer;
///
/// let transformer = WkbTransformer::ewkb(Some(4326));
/// let hex = transformer.encode_hex(&Geometry::Point(Point::new(1., 1.))).unwrap();
/// assert_eq!(hex, "0101000020e6100000000000000000f03f000000000000f03f");
///
/// let decoded = transformer.decode_hex_with_srid(&hex).unwrap();
/// assert_eq!(decoded.srid, Some(4326));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WkbTransformer {
    options: WkbOptions,
}

impl WkbTransformer {
    pub fn new(options: WkbOptions) -> Self {
        Self { options }
    }

    /// An EWKB transformer with default byte order, embedding `srid` at the root when given.
    pub fn ewkb(srid: Option<u32>) -> Self {
        Self::new(
            WkbOptions::default()
                .with_dialect(WkbDialect::Ewkb)
                .with_srid(srid),
        )
    }

    pub fn options(&self) -> &WkbOptions {
        &self.options
    }

    /// Encode using the SRID from the options.
    pub fn encode(&self, geom: &Geometry) -> Result<Vec<u8>> {
        self.encode_with_srid(geom, self.options.srid)
    }

    /// Encode, embedding `srid` in the root header when writing EWKB.
    ///
    /// Plain WKB has no SRID field, so `srid` is ignored there.
    pub fn encode_with_srid(&self, geom: &Geometry, srid: Option<u32>) -> Result<Vec<u8>> {
        let srid = match (self.options.dialect, srid) {
            (WkbDialect::Wkb, Some(srid)) => {
                warn!("plain WKB cannot carry SRID {srid}, writing without it");
                None
            }
            (_, srid) => srid,
        };

        let capacity = geometry_wkb_size(geom) + if srid.is_some() { 4 } else { 0 };
        let out = ByteWriter::with_capacity(self.options.endianness, capacity);
        let mut writer = WkbWriter::new(out, self.options.dialect);
        writer.write_geometry(geom, srid)?;
        Ok(writer.finish())
    }

    pub fn encode_hex(&self, geom: &Geometry) -> Result<String> {
        Ok(encode_hex(&self.encode(geom)?))
    }

    /// Decode a complete buffer, discarding any SRID.
    pub fn decode(&self, buf: &[u8]) -> Result<Geometry> {
        Ok(self.decode_with_srid(buf)?.geometry)
    }

    /// Decode a complete buffer, keeping the root SRID.
    ///
    /// Flag bits are honored whatever the configured dialect, so this reads both plain WKB and
    /// EWKB. The whole buffer must be consumed.
    pub fn decode_with_srid(&self, buf: &[u8]) -> Result<GeometryWithSrid> {
        let mut reader = WkbReader::new(buf, self.options.max_depth);
        let (geometry, srid) = reader.read_geometry(0).map_err(|err| match err {
            GeokitError::UnexpectedEndOfBuffer { needed, remaining } => {
                GeokitError::TruncatedGeometry(format!(
                    "needed {needed} more bytes but only {remaining} remain"
                ))
            }
            err => err,
        })?;

        let trailing = reader.remaining();
        if trailing > 0 {
            return Err(GeokitError::TrailingBytes(trailing));
        }
        Ok(GeometryWithSrid { geometry, srid })
    }

    pub fn decode_hex(&self, hex: &str) -> Result<Geometry> {
        self.decode(&decode_hex(hex)?)
    }

    pub fn decode_hex_with_srid(&self, hex: &str) -> Result<GeometryWithSrid> {
        self.decode_with_srid(&decode_hex(hex)?)
    }
}

/// Encode a geometry with the given options.
pub fn to_wkb(geom: &Geometry, options: WkbOptions) -> Result<Vec<u8>> {
    WkbTransformer::new(options).encode(geom)
}

/// Decode a WKB or EWKB buffer with default options.
pub fn from_wkb(buf: &[u8]) -> Result<Geometry> {
    WkbTransformer::default().decode(buf)
}
