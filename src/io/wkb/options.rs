use serde::{Deserialize, Serialize};

use crate::io::wkb::common::Endianness;

/// Which flavor of WKB to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WkbDialect {
    /// OGC WKB with 2D coordinates only.
    #[default]
    Wkb,
    /// PostGIS extended WKB: Z/M/SRID flags in the high bits of the type code.
    Ewkb,
}

/// Options for [`WkbTransformer`](super::WkbTransformer).
///
/// Missing fields take their default when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WkbOptions {
    /// Byte order of encoded output. Decoding always follows the markers in the input.
    pub endianness: Endianness,

    /// Output dialect.
    pub dialect: WkbDialect,

    /// SRID embedded in the root geometry of EWKB output. Ignored for plain WKB.
    pub srid: Option<u32>,

    /// Maximum collection nesting accepted while decoding.
    pub max_depth: usize,
}

impl WkbOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    pub fn with_endianness(self, endianness: Endianness) -> Self {
        Self { endianness, ..self }
    }

    pub fn with_dialect(self, dialect: WkbDialect) -> Self {
        Self { dialect, ..self }
    }

    pub fn with_srid(self, srid: Option<u32>) -> Self {
        Self { srid, ..self }
    }

    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    pub fn is_extended(&self) -> bool {
        self.dialect == WkbDialect::Ewkb
    }
}

impl Default for WkbOptions {
    fn default() -> Self {
        Self {
            endianness: Endianness::LittleEndian,
            dialect: WkbDialect::Wkb,
            srid: None,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
