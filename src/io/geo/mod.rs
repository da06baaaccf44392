//! Convert between this crate's geometries and [`geo`] scalars.

mod from_geo;
mod scalar;

pub use from_geo::{
    coord_from_geo, line_string_from_geo, polygon_from_geo, ring_from_geo, triangle_from_geo,
};
pub use scalar::{
    geometry_collection_to_geo, geometry_to_geo, line_string_to_geo, multi_line_string_to_geo,
    multi_point_to_geo, multi_polygon_to_geo, point_to_geo, polygon_to_geo, triangle_to_geo,
};
