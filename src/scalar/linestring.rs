use crate::scalar::{Coord, Point};

/// A sequence of straight segments between consecutive coordinates.
///
/// Also used for linear rings, in which case the first and last coordinates are equal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString {
    coords: Vec<Coord>,
}

impl LineString {
    pub fn new(coords: Vec<Coord>) -> Self {
        Self { coords }
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn into_inner(self) -> Vec<Coord> {
        self.coords
    }

    pub fn num_coords(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn start_point(&self) -> Option<Point> {
        self.coords.first().copied().map(Point::new)
    }

    pub fn end_point(&self) -> Option<Point> {
        self.coords.last().copied().map(Point::new)
    }

    /// First and last coordinates are equal in 2D. Always false for the empty line.
    pub fn is_closed(&self) -> bool {
        match (self.coords.first(), self.coords.last()) {
            (Some(first), Some(last)) => first.equals_2d(last),
            _ => false,
        }
    }
}

impl From<geo::LineString> for LineString {
    fn from(value: geo::LineString) -> Self {
        LineString::new(value.0.into_iter().map(Coord::from).collect())
    }
}
