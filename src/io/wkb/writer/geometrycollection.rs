use crate::datatypes::Dimension;
use crate::error::Result;
use crate::geometry::Geometry;
use crate::io::wkb::common::WkbType;
use crate::io::wkb::writer::{geometry_wkb_size, WkbWriter};
use crate::io::wkb::WkbHeader;

/// The byte length of a WKBGeometryCollection
pub fn geometry_collection_wkb_size(members: &[Geometry]) -> usize {
    WkbHeader::MIN_SIZE + 4 + members.iter().map(geometry_wkb_size).sum::<usize>()
}

impl WkbWriter {
    /// Write a member count, then each member as a complete geometry with its own header.
    ///
    /// `dim` covers every member and only drives the collection's own flags.
    pub(super) fn write_members<T>(
        &mut self,
        wkb_type: WkbType,
        dim: Dimension,
        srid: Option<u32>,
        members: &[T],
        mut write_member: impl FnMut(&mut Self, &T) -> Result<()>,
    ) -> Result<()> {
        self.write_header(wkb_type, dim, srid)?;
        self.write_count(members.len())?;
        for member in members {
            write_member(self, member)?;
        }
        Ok(())
    }
}
