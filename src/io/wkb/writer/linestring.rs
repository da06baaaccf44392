use crate::datatypes::Dimension;
use crate::error::{GeokitError, Result};
use crate::geo_traits::CurveTrait;
use crate::io::wkb::common::WkbType;
use crate::io::wkb::writer::WkbWriter;
use crate::io::wkb::WkbHeader;

/// The byte length of a WKBLineString
pub fn line_string_wkb_size(geom: &impl CurveTrait, dim: Dimension) -> usize {
    WkbHeader::MIN_SIZE + 4 + geom.num_points() * 8 * dim.size()
}

impl WkbWriter {
    /// Write a u32 count that must fit the format's 32-bit fields.
    pub(super) fn write_count(&mut self, count: usize) -> Result<()> {
        let count = u32::try_from(count).map_err(|_| GeokitError::Overflow)?;
        self.out.write_u32(count);
        Ok(())
    }

    /// Write a point count followed by flat coordinate tuples, with no nested headers.
    pub(super) fn write_points(&mut self, curve: &impl CurveTrait, dim: Dimension) -> Result<()> {
        self.write_count(curve.num_points())?;
        for point in curve.points() {
            self.write_coord(point, dim);
        }
        Ok(())
    }

    /// Rings and line strings share code 2 on the wire.
    pub(super) fn write_line_string(
        &mut self,
        curve: &impl CurveTrait,
        srid: Option<u32>,
    ) -> Result<()> {
        let dim = curve.uniform_dimension()?.unwrap_or(Dimension::XY);
        self.write_header(WkbType::LineString, dim, srid)?;
        self.write_points(curve, dim)
    }
}
