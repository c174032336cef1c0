//! Defines [`SdoError`] and [`FormatError`], representing all errors returned by this crate.

use thiserror::Error;

use crate::io::sdo::SdoGeometryKind;

/// Malformed `SDO_GEOMETRY` input.
///
/// Every variant carries the descriptor index (0-based position of the triplet in the element
/// info array), the stored offset, or the type code that was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FormatError {
    /// Unrecognized dimension, measure or geometry kind digits.
    #[error("Bad geometry type code {gtype}: {reason}")]
    BadTypeCode { gtype: i32, reason: &'static str },

    /// The element info array ends before a complete triplet or before all parts of a compound
    /// element.
    #[error("Truncated element info array: length {len}, expected at least {expected}")]
    TruncatedDescriptor { len: usize, expected: usize },

    /// An offset that does not increase, is misaligned, or points outside the ordinate array.
    #[error("Element {index} has offset {offset} out of range: {reason}")]
    DescriptorOffsetOutOfRange {
        index: usize,
        offset: i32,
        reason: &'static str,
    },

    /// An arc-interpreted element whose point count is not 3, 5, 7...
    #[error("Element {index} has {count} points, circular arcs need 3, 5, 7...")]
    InvalidArcPointCount { index: usize, count: usize },

    /// Compound parts that do not share endpoints, or a compound ring that does not close.
    #[error("Element {index} is not connected to the previous part of its compound element")]
    CompoundPartDiscontinuity { index: usize },

    /// The assembled shapes do not fit the declared geometry kind.
    #[error("Shapes do not match geometry kind {kind:?}: {reason}")]
    ShapeCountMismatch {
        kind: SdoGeometryKind,
        reason: String,
    },

    /// Element type and interpretation pair with no known meaning.
    #[error("Element {index} has unsupported type {etype} with interpretation {interpretation}")]
    UnsupportedElement {
        index: usize,
        etype: i32,
        interpretation: i32,
    },

    /// Point, cluster and shorthand elements need an exact number of coordinates.
    #[error("Element {index} has {found} coordinates, expected {expected}")]
    ElementPointCount {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// A polygon ring whose first and last coordinates differ.
    #[error("Element {index} is a ring that is not closed")]
    UnclosedRing { index: usize },

    /// Circle shorthand defined by collinear or coincident points.
    #[error("Element {index} describes a circle through collinear points")]
    DegenerateCircle { index: usize },
}

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SdoError {
    /// [FormatError]
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Direct construction or configuration with a disallowed value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, SdoError>;
