use crate::scalar::Coord;

/// A single position, or the empty point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    coord: Option<Coord>,
}

impl Point {
    pub fn new(coord: Coord) -> Self {
        Self { coord: Some(coord) }
    }

    pub fn empty() -> Self {
        Self { coord: None }
    }

    pub fn coord(&self) -> Option<&Coord> {
        self.coord.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.coord.is_none()
    }

    pub fn x(&self) -> Option<f64> {
        self.coord.map(|c| c.x)
    }

    pub fn y(&self) -> Option<f64> {
        self.coord.map(|c| c.y)
    }
}

impl From<Coord> for Point {
    fn from(value: Coord) -> Self {
        Point::new(value)
    }
}

impl From<geo::Point> for Point {
    fn from(value: geo::Point) -> Self {
        Point::new(value.0.into())
    }
}
