//! Measurements delegated to georust/geo.
//!
//! Every geometry is converted with [`crate::io::geo`] first, so only `x` and `y` take part and
//! curves are measured through their control points.

/// Calculate the area of the surface of a `Geometry`.
pub mod area;
pub use area::Area;

/// Calculate the bounding rectangle of a `Geometry`.
pub mod bounding_rect;
pub use bounding_rect::BoundingRect;

/// Calculate the length of a lineal `Geometry`.
pub mod euclidean_length;
pub use euclidean_length::EuclideanLength;
