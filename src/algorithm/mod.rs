//! Algorithms implemented on the geometry model.

pub mod geo;
pub mod native;
