use std::cmp::Ordering;

use crate::datatypes::Dimension;

/// A coordinate with up to four ordinates.
///
/// Equality through [`PartialEq`] compares all four ordinates. The geometric predicates on this
/// type ([`Coord::equals_2d`], [`Coord::compare`]) only look at `x` and `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub m: Option<f64>,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    pub fn with_z(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }

    pub fn with_m(mut self, m: f64) -> Self {
        self.m = Some(m);
        self
    }

    pub fn dimension(&self) -> Dimension {
        Dimension::from_flags(self.z.is_some(), self.m.is_some())
    }

    pub fn x_y(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn equals_2d(&self, other: &Coord) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Equality within `tolerance`; a zero tolerance means exact 2D equality.
    pub fn equals_with_tolerance(&self, other: &Coord, tolerance: f64) -> bool {
        if tolerance == 0.0 {
            self.equals_2d(other)
        } else {
            self.distance_2d(other) <= tolerance
        }
    }

    pub fn distance_2d(&self, other: &Coord) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Total lexicographic order on `(x, y)`.
    pub fn compare(&self, other: &Coord) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }

    /// Keep `x`, `y` and then the present ordinates in z, m order until `max_dim` are kept.
    pub fn limit_dimension(&self, max_dim: usize) -> Coord {
        let mut out = Coord::new(self.x, self.y);
        let mut kept = 2;
        if let Some(z) = self.z {
            if kept < max_dim {
                out.z = Some(z);
                kept += 1;
            }
        }
        if let Some(m) = self.m {
            if kept < max_dim {
                out.m = Some(m);
            }
        }
        out
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Coord::new(x, y)
    }
}

impl From<geo::Coord> for Coord {
    fn from(value: geo::Coord) -> Self {
        Coord::new(value.x, value.y)
    }
}
