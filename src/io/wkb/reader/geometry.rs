use log::{debug, trace};

use crate::error::{GeokitError, Result};
use crate::geometry::Geometry;
use crate::io::wkb::common::WkbType;
use crate::io::wkb::reader::{ByteReader, WkbHeader};

/// Recursive WKB decoder over a single buffer.
///
/// Each nested geometry reads its own header, so byte order may change from one member of a
/// collection to the next.
pub(crate) struct WkbReader<'a> {
    pub(super) reader: ByteReader<'a>,
    max_depth: usize,
}

impl<'a> WkbReader<'a> {
    pub fn new(buf: &'a [u8], max_depth: usize) -> Self {
        Self {
            reader: ByteReader::new(buf),
            max_depth,
        }
    }

    pub fn remaining(&self) -> usize {
        self.reader.remaining()
    }

    /// Decode one complete geometry, header included.
    ///
    /// Returns the SRID found in this geometry's own header, if any.
    pub fn read_geometry(&mut self, depth: usize) -> Result<(Geometry, Option<u32>)> {
        if depth > self.max_depth {
            return Err(GeokitError::NestingTooDeep(self.max_depth));
        }

        let offset = self.reader.position();
        let header = WkbHeader::read(&mut self.reader)?;
        trace!(
            "decoding {:?} ({}, {:?}) at offset {offset}",
            header.wkb_type,
            header.dimension,
            header.endianness
        );

        let geometry = match header.wkb_type {
            WkbType::Point => Geometry::Point(self.read_point(&header)?),
            WkbType::LineString => Geometry::LineString(self.read_line_string(&header)?),
            WkbType::Polygon => Geometry::Polygon(self.read_polygon(&header)?),
            WkbType::Triangle => Geometry::Triangle(self.read_triangle(&header)?),
            WkbType::MultiPoint => {
                Geometry::MultiPoint(self.read_members(&header, depth)?.try_into()?)
            }
            WkbType::MultiLineString => {
                Geometry::MultiLineString(self.read_members(&header, depth)?.try_into()?)
            }
            WkbType::MultiPolygon => {
                Geometry::MultiPolygon(self.read_members(&header, depth)?.try_into()?)
            }
            WkbType::GeometryCollection => {
                Geometry::GeometryCollection(self.read_members(&header, depth)?.into())
            }
            WkbType::PolyhedralSurface => {
                Geometry::PolyhedralSurface(self.read_polyhedral_surface(&header, depth)?)
            }
            WkbType::Tin => Geometry::Tin(self.read_tin(&header, depth)?),
        };

        Ok((geometry, header.srid))
    }

    /// Decode a member of a collection. Members inherit the root SRID, so their own is dropped.
    pub(super) fn read_member(&mut self, depth: usize) -> Result<Geometry> {
        let (geometry, srid) = self.read_geometry(depth)?;
        if let Some(srid) = srid {
            debug!(
                "ignoring SRID {srid} on nested {}",
                geometry.geometry_type()
            );
        }
        Ok(geometry)
    }
}
