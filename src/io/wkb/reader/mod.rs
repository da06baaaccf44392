//! Decoding WKB and EWKB buffers into [`Geometry`](crate::geometry::Geometry) values.

mod cursor;
mod geometry;
mod geometrycollection;
mod header;
mod linestring;
mod point;
mod polygon;

pub(crate) use cursor::ByteReader;
pub(crate) use geometry::WkbReader;
pub use header::WkbHeader;
