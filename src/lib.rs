//! An implementation of the OGC Simple Features geometry model, with a recursive codec for
//! Well-Known Binary (WKB) and its PostGIS extension (EWKB).
//!
//! ```
//! use geokit::geometry::{Geometry, LineString, Point};
//! use geokit::io::wkb::{from_wkb, WkbTransformer};
//!
//! let line = Geometry::LineString(LineString::line(Point::new(1., 2.), Point::new(3., 4.)));
//! let buf = WkbTransformer::default().encode(&line).unwrap();
//! assert_eq!(from_wkb(&buf).unwrap(), line);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use error::{GeokitError, Result};
pub use geometry::Geometry;

pub mod datatypes;
pub mod error;
pub mod geo_traits;
pub mod geometry;
pub mod io;
