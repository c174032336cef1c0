use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The geometry kind stored in the last two digits of `SDO_GTYPE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum SdoGeometryKind {
    Point = 1,
    Line = 2,
    Polygon = 3,
    Collection = 4,
    MultiPoint = 5,
    MultiLine = 6,
    MultiPolygon = 7,
}

/// The `SDO_ETYPE` of an element descriptor.
///
/// | code | meaning                  |
/// |------|--------------------------|
/// | 0    | unknown, skipped         |
/// | 1    | point or point cluster   |
/// | 2    | line                     |
/// | 4    | compound line            |
/// | 1003 | exterior ring            |
/// | 2003 | interior ring            |
/// | 1005 | compound exterior ring   |
/// | 2005 | compound interior ring   |
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum ElementType {
    Unknown = 0,
    Point = 1,
    Line = 2,
    CompoundLine = 4,
    ExteriorRing = 1003,
    InteriorRing = 2003,
    CompoundExteriorRing = 1005,
    CompoundInteriorRing = 2005,
}

impl ElementType {
    pub fn is_compound(&self) -> bool {
        matches!(
            self,
            ElementType::CompoundLine
                | ElementType::CompoundExteriorRing
                | ElementType::CompoundInteriorRing
        )
    }
}

/// How the ordinates of a line or ring element are connected.
///
/// Rectangles and circles are shorthands only valid for rings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum SegmentInterpretation {
    /// Straight segments between consecutive points.
    Straight = 1,
    /// Circular arcs through consecutive point triplets sharing their end points.
    Arcs = 2,
    /// Lower-left and upper-right corners of an axis-aligned rectangle.
    Rectangle = 3,
    /// Three distinct points on the circumference of a circle.
    Circle = 4,
}
