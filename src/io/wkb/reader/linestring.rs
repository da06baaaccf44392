use crate::datatypes::Dimension;
use crate::error::Result;
use crate::geometry::{LineString, Point};
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::{ByteReader, WkbHeader, WkbReader};

impl ByteReader<'_> {
    /// Read a point count followed by that many flat coordinate tuples.
    pub fn read_points(
        &mut self,
        endianness: Endianness,
        dim: Dimension,
        what: &str,
    ) -> Result<Vec<Point>> {
        let num_points = self.read_count(endianness, 8 * dim.size(), what)?;
        let mut points = Vec::with_capacity(num_points);
        for _ in 0..num_points {
            points.push(Point::from_coord(self.read_coord(endianness, dim)?));
        }
        Ok(points)
    }
}

impl WkbReader<'_> {
    /// A standalone code-2 geometry is always a plain `LineString`.
    pub(super) fn read_line_string(&mut self, header: &WkbHeader) -> Result<LineString> {
        let points = self
            .reader
            .read_points(header.endianness, header.dimension, "LineString")?;
        Ok(LineString::new(points))
    }
}
