//! Turning walked elements into shapes, and shapes into a geometry tree.

mod assembler;
pub(crate) mod builder;
mod coord;

pub(crate) use assembler::ShapeAssembler;
pub(crate) use coord::OrdinateReader;

use crate::io::sdo::RingRole;
use crate::scalar::{Coord, Curve};

/// The geometry described by one element, or by one compound element and its parts.
///
/// Shapes only live for a single decode call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Shape {
    Point(Coord),
    Cluster(Vec<Coord>),
    Line(Curve),
    Ring {
        role: RingRole,
        ring: Curve,
        /// Descriptor index of the ring, for error reporting.
        index: usize,
    },
}
