//! Defines [`GeokitError`], representing all errors returned by this crate.

use std::fmt::Debug;

use thiserror::Error;

use crate::datatypes::Dimension;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GeokitError {
    /// The base type code of a WKB header is not one of the supported geometry kinds.
    #[error("Unknown WKB type code: {0}")]
    UnknownTypeCode(u32),

    /// The buffer ended early or a count field is inconsistent with the remaining data.
    #[error("Truncated geometry: {0}")]
    TruncatedGeometry(String),

    /// A primitive read ran past the end of the buffer.
    #[error("Unexpected end of buffer: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEndOfBuffer {
        /// Bytes requested by the read
        needed: usize,
        /// Bytes left after the cursor
        remaining: usize,
    },

    /// Z or M coordinates were requested in a dialect that cannot carry them.
    #[error("Dimension {0} cannot be written as plain WKB, use EWKB instead")]
    UnsupportedDimension(Dimension),

    /// The byte order marker was neither 0 (big endian) nor 1 (little endian).
    #[error("Invalid byte order marker: {0}")]
    InvalidByteOrderMarker(u8),

    /// Coordinates inside one geometry do not share a single dimension.
    #[error("Mixed coordinate dimensions: expected {expected}, found {found}")]
    MixedDimensions {
        /// Dimension of the first coordinate
        expected: Dimension,
        /// Dimension of the offending coordinate
        found: Dimension,
    },

    /// Incorrect geometry type for operation
    #[error("Incorrect geometry type for operation: {0}")]
    IncorrectGeometryType(String),

    /// A constructor was given a structurally invalid input.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Collections are nested deeper than the configured limit.
    #[error("Geometry nesting exceeds the maximum depth of {0}")]
    NestingTooDeep(usize),

    /// Bytes were left over after decoding the root geometry.
    #[error("{0} trailing bytes after geometry")]
    TrailingBytes(usize),

    /// The input is not valid hexadecimal.
    #[error("Invalid hex input: {0}")]
    InvalidHex(String),

    /// Whenever a count does not fit into the u32 fields of the WKB format.
    #[error("Overflow: count does not fit in a u32")]
    Overflow,
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeokitError>;
