//! Structural algorithms implemented directly on the geometry model.

mod boundary;
mod cmp;
pub mod eq;
mod map_coords;
mod normalize;
mod reverse;

pub use boundary::Boundary;
pub use cmp::GeometryOrd;
pub use eq::EqualsExact;
pub use map_coords::MapCoords;
pub use normalize::Normalize;
pub use reverse::Reverse;
