use crate::error::Result;
use crate::geometry::{Geometry, Polygon, PolyhedralSurface, Tin, Triangle};
use crate::io::wkb::reader::{WkbHeader, WkbReader};

/// The smallest nested geometry is an empty LineString: header plus a u32 count.
const MIN_MEMBER_SIZE: usize = 1 + 4 + 4;

impl WkbReader<'_> {
    /// Read a member count followed by that many complete nested geometries.
    pub(super) fn read_members(
        &mut self,
        header: &WkbHeader,
        depth: usize,
    ) -> Result<Vec<Geometry>> {
        let what = format!("{:?}", header.wkb_type);
        let num_members = self
            .reader
            .read_count(header.endianness, MIN_MEMBER_SIZE, &what)?;
        let mut members = Vec::with_capacity(num_members);
        for _ in 0..num_members {
            members.push(self.read_member(depth + 1)?);
        }
        Ok(members)
    }

    pub(super) fn read_polyhedral_surface(
        &mut self,
        header: &WkbHeader,
        depth: usize,
    ) -> Result<PolyhedralSurface> {
        let patches = self
            .read_members(header, depth)?
            .into_iter()
            .map(Polygon::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(PolyhedralSurface::new(patches))
    }

    pub(super) fn read_tin(&mut self, header: &WkbHeader, depth: usize) -> Result<Tin> {
        let patches = self
            .read_members(header, depth)?
            .into_iter()
            .map(Triangle::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Tin::new(patches))
    }
}
