use crate::datatypes::Dimension;
use crate::error::Result;
use crate::geometry::{Coord, Point};
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::{ByteReader, WkbHeader, WkbReader};

impl ByteReader<'_> {
    /// Read one coordinate tuple in x, y, [z], [m] order.
    pub fn read_coord(&mut self, endianness: Endianness, dim: Dimension) -> Result<Coord> {
        let mut coord = Coord::new(self.read_f64(endianness)?, self.read_f64(endianness)?);
        if dim.has_z() {
            coord.z = Some(self.read_f64(endianness)?);
        }
        if dim.has_m() {
            coord.m = Some(self.read_f64(endianness)?);
        }
        Ok(coord)
    }
}

impl WkbReader<'_> {
    pub(super) fn read_point(&mut self, header: &WkbHeader) -> Result<Point> {
        let coord = self.reader.read_coord(header.endianness, header.dimension)?;
        Ok(Point::from_coord(coord))
    }
}
