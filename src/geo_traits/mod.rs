//! Traits for reading data out of the geometry value types.
//!
//! These mirror the accessor groups of the OGC Simple Features interfaces: coordinates, curves
//! and collections. The codec is written against them rather than against concrete types where
//! several types share a wire layout.

pub use coord::CoordTrait;
pub use curve::CurveTrait;
pub(crate) use curve::{union_dimension, uniform_dimension};
pub use geometry_collection::GeometryCollectionTrait;

mod coord;
mod curve;
mod geometry_collection;
