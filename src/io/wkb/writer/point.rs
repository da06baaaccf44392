use crate::datatypes::Dimension;
use crate::error::Result;
use crate::geo_traits::CoordTrait;
use crate::geometry::Point;
use crate::io::wkb::common::WkbType;
use crate::io::wkb::writer::WkbWriter;
use crate::io::wkb::WkbHeader;

/// The byte length of a WKBPoint
pub fn point_wkb_size(dim: Dimension) -> usize {
    WkbHeader::MIN_SIZE + 8 * dim.size()
}

impl WkbWriter {
    /// Write one flat coordinate tuple: x, y, then z and m when `dim` carries them.
    pub(super) fn write_coord(&mut self, coord: &impl CoordTrait, dim: Dimension) {
        self.out.write_f64(coord.x());
        self.out.write_f64(coord.y());
        if dim.has_z() {
            self.out.write_f64(coord.z().unwrap_or(f64::NAN));
        }
        if dim.has_m() {
            self.out.write_f64(coord.m().unwrap_or(f64::NAN));
        }
    }

    pub(super) fn write_point(&mut self, point: &Point, srid: Option<u32>) -> Result<()> {
        let dim = point.dimension();
        self.write_header(WkbType::Point, dim, srid)?;
        self.write_coord(point, dim);
        Ok(())
    }
}
