use std::cmp::Ordering;

use crate::scalar::*;

/// A total order over geometries, used to sort the members of normalized collections.
///
/// Geometries of different types are ordered by type: Point, MultiPoint, LineString,
/// CircularString, CompoundCurve, MultiLineString, MultiCircularString, Polygon, MultiPolygon,
/// GeometryCollection. Geometries of the same type compare their coordinate sequences
/// lexicographically by `(x, y)`; a sequence that is a strict prefix of another sorts first.
pub trait GeometryOrd {
    fn compare(&self, other: &Self) -> Ordering;
}

/// Lexicographic comparison of two sequences, shorter prefix first.
fn compare_seq<T>(left: &[T], right: &[T], cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
    left.iter()
        .zip(right.iter())
        .map(|(l, r)| cmp(l, r))
        .find(|ord| ord.is_ne())
        .unwrap_or_else(|| left.len().cmp(&right.len()))
}

pub(crate) fn compare_coords(left: &[Coord], right: &[Coord]) -> Ordering {
    compare_seq(left, right, Coord::compare)
}

fn compare_members<G: GeometryOrd>(left: &[G], right: &[G]) -> Ordering {
    compare_seq(left, right, G::compare)
}

impl GeometryOrd for Coord {
    fn compare(&self, other: &Self) -> Ordering {
        Coord::compare(self, other)
    }
}

impl GeometryOrd for Point {
    fn compare(&self, other: &Self) -> Ordering {
        match (self.coord(), other.coord()) {
            (Some(l), Some(r)) => l.compare(r),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
        }
    }
}

impl GeometryOrd for LineString {
    fn compare(&self, other: &Self) -> Ordering {
        compare_coords(self.coords(), other.coords())
    }
}

impl GeometryOrd for CircularString {
    fn compare(&self, other: &Self) -> Ordering {
        compare_coords(self.coords(), other.coords())
    }
}

impl GeometryOrd for CurveSegment {
    fn compare(&self, other: &Self) -> Ordering {
        use CurveSegment::*;
        match (self, other) {
            (LineString(l), LineString(r)) => l.compare(r),
            (CircularString(l), CircularString(r)) => l.compare(r),
            (LineString(_), CircularString(_)) => Ordering::Less,
            (CircularString(_), LineString(_)) => Ordering::Greater,
        }
    }
}

impl GeometryOrd for CompoundCurve {
    fn compare(&self, other: &Self) -> Ordering {
        compare_members(self.segments(), other.segments())
    }
}

impl GeometryOrd for Curve {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Curve::LineString(l), Curve::LineString(r)) => l.compare(r),
            (Curve::CircularString(l), Curve::CircularString(r)) => l.compare(r),
            (Curve::CompoundCurve(l), Curve::CompoundCurve(r)) => l.compare(r),
            _ => curve_rank(self).cmp(&curve_rank(other)),
        }
    }
}

fn curve_rank(curve: &Curve) -> u8 {
    match curve {
        Curve::LineString(_) => 0,
        Curve::CircularString(_) => 1,
        Curve::CompoundCurve(_) => 2,
    }
}

impl GeometryOrd for Polygon {
    fn compare(&self, other: &Self) -> Ordering {
        self.exterior()
            .compare(other.exterior())
            .then_with(|| compare_members(self.interiors(), other.interiors()))
    }
}

impl GeometryOrd for MultiPoint {
    fn compare(&self, other: &Self) -> Ordering {
        compare_members(self.points(), other.points())
    }
}

impl GeometryOrd for MultiLineString {
    fn compare(&self, other: &Self) -> Ordering {
        compare_members(self.lines(), other.lines())
    }
}

impl GeometryOrd for MultiCircularString {
    fn compare(&self, other: &Self) -> Ordering {
        compare_members(self.curves(), other.curves())
    }
}

impl GeometryOrd for MultiPolygon {
    fn compare(&self, other: &Self) -> Ordering {
        compare_members(self.polygons(), other.polygons())
    }
}

impl GeometryOrd for GeometryCollection {
    fn compare(&self, other: &Self) -> Ordering {
        compare_members(self.geometries(), other.geometries())
    }
}

impl GeometryOrd for Geometry {
    fn compare(&self, other: &Self) -> Ordering {
        use Geometry::*;
        match (self, other) {
            (Point(l), Point(r)) => l.compare(r),
            (LineString(l), LineString(r)) => l.compare(r),
            (CircularString(l), CircularString(r)) => l.compare(r),
            (CompoundCurve(l), CompoundCurve(r)) => l.compare(r),
            (Polygon(l), Polygon(r)) => l.compare(r),
            (MultiPoint(l), MultiPoint(r)) => l.compare(r),
            (MultiLineString(l), MultiLineString(r)) => l.compare(r),
            (MultiCircularString(l), MultiCircularString(r)) => l.compare(r),
            (MultiPolygon(l), MultiPolygon(r)) => l.compare(r),
            (GeometryCollection(l), GeometryCollection(r)) => l.compare(r),
            _ => self.sort_index().cmp(&other.sort_index()),
        }
    }
}
