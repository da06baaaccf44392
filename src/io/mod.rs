//! Encoding and conversion of geometries: the WKB/EWKB codec and interoperability with the
//! [`geo`](https://docs.rs/geo) crate.

#[cfg(feature = "geo")]
pub mod geo;
pub mod wkb;
