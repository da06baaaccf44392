//! Reading and writing OGC WKB and PostGIS EWKB.

mod api;
mod common;
mod hex;
mod options;
pub(crate) mod reader;
pub(crate) mod writer;

pub use api::{from_wkb, to_wkb, GeometryWithSrid, WkbTransformer};
pub use common::{Endianness, WkbType, EWKB_M_FLAG, EWKB_SRID_FLAG, EWKB_Z_FLAG};
pub use hex::{decode_hex, encode_hex};
pub use options::{WkbDialect, WkbOptions};
pub use reader::WkbHeader;
pub use writer::geometry_wkb_size;
