//! Encoding [`Geometry`](crate::geometry::Geometry) values as WKB or EWKB.

mod buffer;
mod geometry;
mod geometrycollection;
mod linestring;
mod point;
mod polygon;

pub(crate) use buffer::ByteWriter;
pub(crate) use geometry::WkbWriter;

pub use geometry::geometry_wkb_size;
pub use geometrycollection::geometry_collection_wkb_size;
pub use linestring::line_string_wkb_size;
pub use point::point_wkb_size;
pub use polygon::{polygon_wkb_size, triangle_wkb_size};
