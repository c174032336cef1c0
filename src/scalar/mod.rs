//! Immutable geometry values produced by the decoder.
//!
//! Values carry up to four ordinates per coordinate. Everything that needs a planar kernel
//! (length, area, envelope) converts to [`geo`] types through [`crate::io::geo`] and only looks at
//! `x` and `y`.

mod circularstring;
mod compoundcurve;
mod coord;
mod geometry;
mod geometrycollection;
mod linestring;
mod multicircularstring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

pub use circularstring::CircularString;
pub(crate) use circularstring::is_valid_arc_point_count;
pub use compoundcurve::{CompoundCurve, Curve, CurveSegment};
pub(crate) use compoundcurve::first_discontinuity;
pub use coord::Coord;
pub use geometry::Geometry;
pub(crate) use geometry::curves_to_multi_geometry;
pub use geometrycollection::GeometryCollection;
pub use linestring::LineString;
pub use multicircularstring::MultiCircularString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;
