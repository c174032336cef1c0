use crate::error::{Result, SdoError};
use crate::scalar::{Coord, Point};

/// An OGC-style `CircularString`.
///
/// A circular string is a sequence of continuous circular arc segments. Every arc is defined by
/// three consecutive vertices, and consecutive arcs share their end vertex: vertices 0, 1, 2 form
/// the first arc, vertices 2, 3, 4 the second, and so on. A circular string therefore has either
/// no vertices (the empty geometry) or 3, 5, 7... vertices.
///
/// Consecutive vertices may be equal, and arcs may intersect each other. Three collinear vertices
/// describe a straight segment.
///
/// Measurements that need the kernel (length, envelope) are computed over the vertex sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CircularString {
    coords: Vec<Coord>,
}

impl CircularString {
    /// Construct a new circular string.
    ///
    /// Returns [`SdoError::InvalidArgument`] if `coords` is not empty and its length is not one
    /// of 3, 5, 7...
    pub fn try_new(coords: Vec<Coord>) -> Result<Self> {
        if !is_valid_arc_point_count(coords.len()) {
            return Err(SdoError::InvalidArgument(format!(
                "Invalid number of points in CircularString (found {} - must be 0 or 3, 5, 7...)",
                coords.len()
            )));
        }
        Ok(Self { coords })
    }

    /// Construct from a vertex list already known to satisfy the point count rule, such as a
    /// reordering of another circular string.
    pub(crate) fn new_unchecked(coords: Vec<Coord>) -> Self {
        debug_assert!(is_valid_arc_point_count(coords.len()));
        Self { coords }
    }

    pub fn empty() -> Self {
        Self { coords: vec![] }
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn into_inner(self) -> Vec<Coord> {
        self.coords
    }

    pub fn num_points(&self) -> usize {
        self.coords.len()
    }

    /// The number of arc segments.
    pub fn num_arcs(&self) -> usize {
        self.coords.len().saturating_sub(1) / 2
    }

    /// Iterate over the `(start, mid, end)` vertices of every arc.
    pub fn arcs(&self) -> impl Iterator<Item = (&Coord, &Coord, &Coord)> + '_ {
        (0..self.num_arcs()).map(|i| {
            let j = 2 * i;
            (&self.coords[j], &self.coords[j + 1], &self.coords[j + 2])
        })
    }

    pub fn point_n(&self, n: usize) -> Option<Point> {
        self.coords.get(n).copied().map(Point::new)
    }

    pub fn start_point(&self) -> Option<Point> {
        self.coords.first().copied().map(Point::new)
    }

    pub fn end_point(&self) -> Option<Point> {
        self.coords.last().copied().map(Point::new)
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// First and last vertices are equal in 2D. Always false for the empty curve.
    pub fn is_closed(&self) -> bool {
        match (self.coords.first(), self.coords.last()) {
            (Some(first), Some(last)) => first.equals_2d(last),
            _ => false,
        }
    }

    /// Whether `coord` is one of the vertices of this curve.
    pub fn is_coordinate(&self, coord: &Coord) -> bool {
        self.coords.iter().any(|c| c.equals_2d(coord))
    }

    /// Topological dimension.
    pub fn dimension(&self) -> usize {
        1
    }

    /// Dimension of the boundary; `None` for a closed curve, which has an empty boundary.
    pub fn boundary_dimension(&self) -> Option<usize> {
        if self.is_closed() {
            None
        } else {
            Some(0)
        }
    }
}

/// Whether `count` vertices describe whole arcs.
pub(crate) fn is_valid_arc_point_count(count: usize) -> bool {
    count == 0 || (count >= 3 && (count - 1) % 2 == 0)
}
