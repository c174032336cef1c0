use crate::algorithm::native::Normalize;
use crate::scalar::*;

pub fn coord_eq(left: &Coord, right: &Coord, tolerance: f64) -> bool {
    left.equals_with_tolerance(right, tolerance)
}

pub fn coords_eq(left: &[Coord], right: &[Coord], tolerance: f64) -> bool {
    if left.len() != right.len() {
        return false;
    }

    left.iter()
        .zip(right.iter())
        .all(|(l, r)| coord_eq(l, r, tolerance))
}

/// Structural equality of two geometries up to a coordinate tolerance.
///
/// Two geometries are exactly equal if they have the same type, the same structure and pairwise
/// equal vertices in the same order. A tolerance of zero requires identical `x` and `y`.
pub trait EqualsExact {
    fn equals_exact(&self, other: &Self, tolerance: f64) -> bool;

    /// Equality after normalizing both sides, so vertex order and element order do not matter.
    fn equals_norm(&self, other: &Self) -> bool
    where
        Self: Normalize + Sized,
    {
        self.normalize().equals_exact(&other.normalize(), 0.0)
    }
}

impl EqualsExact for Point {
    fn equals_exact(&self, other: &Self, tolerance: f64) -> bool {
        match (self.coord(), other.coord()) {
            (Some(l), Some(r)) => coord_eq(l, r, tolerance),
            (None, None) => true,
            _ => false,
        }
    }
}

impl EqualsExact for LineString {
    fn equals_exact(&self, other: &Self, tolerance: f64) -> bool {
        coords_eq(self.coords(), other.coords(), tolerance)
    }
}

impl EqualsExact for CircularString {
    fn equals_exact(&self, other: &Self, tolerance: f64) -> bool {
        coords_eq(self.coords(), other.coords(), tolerance)
    }
}

impl EqualsExact for CurveSegment {
    fn equals_exact(&self, other: &Self, tolerance: f64) -> bool {
        match (self, other) {
            (CurveSegment::LineString(l), CurveSegment::LineString(r)) => {
                l.equals_exact(r, tolerance)
            }
            (CurveSegment::CircularString(l), CurveSegment::CircularString(r)) => {
                l.equals_exact(r, tolerance)
            }
            _ => false,
        }
    }
}

impl EqualsExact for CompoundCurve {
    fn equals_exact(&self, other: &Self, tolerance: f64) -> bool {
        slice_eq(self.segments(), other.segments(), tolerance)
    }
}

impl EqualsExact for Curve {
    fn equals_exact(&self, other: &Self, tolerance: f64) -> bool {
        match (self, other) {
            (Curve::LineString(l), Curve::LineString(r)) => l.equals_exact(r, tolerance),
            (Curve::CircularString(l), Curve::CircularString(r)) => l.equals_exact(r, tolerance),
            (Curve::CompoundCurve(l), Curve::CompoundCurve(r)) => l.equals_exact(r, tolerance),
            _ => false,
        }
    }
}

impl EqualsExact for Polygon {
    fn equals_exact(&self, other: &Self, tolerance: f64) -> bool {
        self.exterior().equals_exact(other.exterior(), tolerance)
            && slice_eq(self.interiors(), other.interiors(), tolerance)
    }
}

impl EqualsExact for MultiPoint {
    fn equals_exact(&self, other: &Self, tolerance: f64) -> bool {
        slice_eq(self.points(), other.points(), tolerance)
    }
}

impl EqualsExact for MultiLineString {
    fn equals_exact(&self, other: &Self, tolerance: f64) -> bool {
        slice_eq(self.lines(), other.lines(), tolerance)
    }
}

impl EqualsExact for MultiCircularString {
    fn equals_exact(&self, other: &Self, tolerance: f64) -> bool {
        slice_eq(self.curves(), other.curves(), tolerance)
    }
}

impl EqualsExact for MultiPolygon {
    fn equals_exact(&self, other: &Self, tolerance: f64) -> bool {
        slice_eq(self.polygons(), other.polygons(), tolerance)
    }
}

impl EqualsExact for GeometryCollection {
    fn equals_exact(&self, other: &Self, tolerance: f64) -> bool {
        slice_eq(self.geometries(), other.geometries(), tolerance)
    }
}

impl EqualsExact for Geometry {
    fn equals_exact(&self, other: &Self, tolerance: f64) -> bool {
        use Geometry::*;
        match (self, other) {
            (Point(l), Point(r)) => l.equals_exact(r, tolerance),
            (LineString(l), LineString(r)) => l.equals_exact(r, tolerance),
            (CircularString(l), CircularString(r)) => l.equals_exact(r, tolerance),
            (CompoundCurve(l), CompoundCurve(r)) => l.equals_exact(r, tolerance),
            (Polygon(l), Polygon(r)) => l.equals_exact(r, tolerance),
            (MultiPoint(l), MultiPoint(r)) => l.equals_exact(r, tolerance),
            (MultiLineString(l), MultiLineString(r)) => l.equals_exact(r, tolerance),
            (MultiCircularString(l), MultiCircularString(r)) => l.equals_exact(r, tolerance),
            (MultiPolygon(l), MultiPolygon(r)) => l.equals_exact(r, tolerance),
            (GeometryCollection(l), GeometryCollection(r)) => l.equals_exact(r, tolerance),
            _ => false,
        }
    }
}

fn slice_eq<G: EqualsExact>(left: &[G], right: &[G], tolerance: f64) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right.iter())
            .all(|(l, r)| l.equals_exact(r, tolerance))
}
