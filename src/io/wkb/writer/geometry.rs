use log::trace;

use crate::datatypes::Dimension;
use crate::error::{GeokitError, Result};
use crate::geo_traits::{union_dimension, CurveTrait, GeometryCollectionTrait};
use crate::geometry::{Geometry, Polygon};
use crate::io::wkb::common::{WkbType, EWKB_M_FLAG, EWKB_SRID_FLAG, EWKB_Z_FLAG};
use crate::io::wkb::options::WkbDialect;
use crate::io::wkb::writer::{
    geometry_collection_wkb_size, line_string_wkb_size, point_wkb_size, polygon_wkb_size,
    triangle_wkb_size, ByteWriter,
};
use crate::io::wkb::WkbHeader;

/// The byte length of a Geometry written without an SRID.
///
/// Add 4 bytes when an EWKB SRID is embedded at the root.
pub fn geometry_wkb_size(geom: &Geometry) -> usize {
    use Geometry as G;
    let polygon_size = |p: &Polygon| {
        polygon_wkb_size(p, union_dimension(p.rings().flat_map(|r| r.points())))
    };
    let collection_header = WkbHeader::MIN_SIZE + 4;
    match geom {
        G::Point(p) => point_wkb_size(p.dimension()),
        G::LineString(ls) => line_string_wkb_size(ls, union_dimension(ls.points())),
        G::LinearRing(ring) => line_string_wkb_size(ring, union_dimension(ring.points())),
        G::Polygon(p) => polygon_size(p),
        G::Triangle(t) => triangle_wkb_size(t, union_dimension(t.exterior_ring().points())),
        G::MultiPoint(mp) => {
            collection_header
                + mp.geometries()
                    .iter()
                    .map(|p| point_wkb_size(p.dimension()))
                    .sum::<usize>()
        }
        G::MultiLineString(mls) => {
            collection_header
                + mls
                    .geometries()
                    .iter()
                    .map(|ls| line_string_wkb_size(ls, union_dimension(ls.points())))
                    .sum::<usize>()
        }
        G::MultiPolygon(mp) => {
            collection_header + mp.geometries().iter().map(polygon_size).sum::<usize>()
        }
        G::GeometryCollection(gc) => geometry_collection_wkb_size(gc.geometries()),
        G::PolyhedralSurface(ps) => {
            collection_header + ps.patches().iter().map(polygon_size).sum::<usize>()
        }
        G::Tin(tin) => {
            collection_header
                + tin
                    .patches()
                    .iter()
                    .map(|t| triangle_wkb_size(t, union_dimension(t.exterior_ring().points())))
                    .sum::<usize>()
        }
    }
}

/// Recursive WKB encoder writing into a single output buffer.
pub(crate) struct WkbWriter {
    pub(super) out: ByteWriter,
    dialect: WkbDialect,
}

impl WkbWriter {
    pub fn new(out: ByteWriter, dialect: WkbDialect) -> Self {
        Self { out, dialect }
    }

    pub fn finish(self) -> Vec<u8> {
        self.out.into_inner()
    }

    /// Write a byte order marker and type code, plus the SRID when one is given.
    ///
    /// Plain WKB has no way to flag Z or M, so anything but XY is rejected there.
    pub(super) fn write_header(
        &mut self,
        wkb_type: WkbType,
        dim: Dimension,
        srid: Option<u32>,
    ) -> Result<()> {
        let mut type_code = wkb_type.code();
        match self.dialect {
            WkbDialect::Wkb => {
                if dim != Dimension::XY {
                    return Err(GeokitError::UnsupportedDimension(dim));
                }
            }
            WkbDialect::Ewkb => {
                if dim.has_z() {
                    type_code |= EWKB_Z_FLAG;
                }
                if dim.has_m() {
                    type_code |= EWKB_M_FLAG;
                }
                if srid.is_some() {
                    type_code |= EWKB_SRID_FLAG;
                }
            }
        }
        trace!("encoding {wkb_type:?} ({dim}) as type code {type_code:#010x}");

        self.out.write_u8(self.out.endianness().into());
        self.out.write_u32(type_code);
        if let (WkbDialect::Ewkb, Some(srid)) = (self.dialect, srid) {
            self.out.write_u32(srid);
        }
        Ok(())
    }

    /// Write a complete geometry. Only the root call should pass an SRID.
    pub fn write_geometry(&mut self, geom: &Geometry, srid: Option<u32>) -> Result<()> {
        use Geometry as G;
        match geom {
            G::Point(p) => self.write_point(p, srid),
            G::LineString(ls) => self.write_line_string(ls, srid),
            G::LinearRing(ring) => self.write_line_string(ring, srid),
            G::Polygon(p) => self.write_polygon(p, srid),
            G::Triangle(t) => self.write_triangle(t, srid),
            G::MultiPoint(mp) => self.write_members(
                WkbType::MultiPoint,
                geom.coord_dimension(),
                srid,
                mp.geometries(),
                |writer, p| writer.write_point(p, None),
            ),
            G::MultiLineString(mls) => self.write_members(
                WkbType::MultiLineString,
                geom.coord_dimension(),
                srid,
                mls.geometries(),
                |writer, ls| writer.write_line_string(ls, None),
            ),
            G::MultiPolygon(mp) => self.write_members(
                WkbType::MultiPolygon,
                geom.coord_dimension(),
                srid,
                mp.geometries(),
                |writer, p| writer.write_polygon(p, None),
            ),
            G::GeometryCollection(gc) => self.write_members(
                WkbType::GeometryCollection,
                geom.coord_dimension(),
                srid,
                gc.geometries(),
                |writer, g| writer.write_geometry(g, None),
            ),
            G::PolyhedralSurface(ps) => self.write_members(
                WkbType::PolyhedralSurface,
                geom.coord_dimension(),
                srid,
                ps.patches(),
                |writer, p| writer.write_polygon(p, None),
            ),
            G::Tin(tin) => self.write_members(
                WkbType::Tin,
                geom.coord_dimension(),
                srid,
                tin.patches(),
                |writer, t| writer.write_triangle(t, None),
            ),
        }
    }
}
