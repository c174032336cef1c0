use std::cmp::Ordering;

use geo::Area;
use itertools::Itertools;

use crate::algorithm::native::{GeometryOrd, Reverse};
use crate::io::geo::curve_to_geo;
use crate::scalar::*;

/// Convert a geometry to its normal form.
///
/// Two geometries that describe the same point set with the same structure have equal normal
/// forms, which makes [`EqualsExact::equals_norm`][crate::algorithm::native::EqualsExact]
/// independent of vertex direction and member order. Normalizing is idempotent.
///
/// - Curves run in the direction where the start side of a mirrored scan is the smaller one.
/// - Linear rings start at their smallest coordinate. Exterior rings run clockwise and interior
///   rings counter-clockwise, and the interior rings are sorted.
/// - Multi-geometries and collections normalize each member and sort the members.
pub trait Normalize {
    fn normalize(&self) -> Self;
}

/// Whether the sequence should be reversed: compares `coords[i]` with `coords[n - 1 - i]` from
/// both ends towards the middle and looks at the first pair that differs.
fn needs_reverse(coords: &[Coord]) -> bool {
    let n = coords.len();
    (0..n / 2)
        .map(|i| coords[i].compare(&coords[n - 1 - i]))
        .find(|ord| ord.is_ne())
        == Some(Ordering::Greater)
}

impl Normalize for Point {
    fn normalize(&self) -> Self {
        *self
    }
}

impl Normalize for LineString {
    fn normalize(&self) -> Self {
        if needs_reverse(self.coords()) {
            self.reverse()
        } else {
            self.clone()
        }
    }
}

impl Normalize for CircularString {
    fn normalize(&self) -> Self {
        if needs_reverse(self.coords()) {
            self.reverse()
        } else {
            self.clone()
        }
    }
}

impl Normalize for CompoundCurve {
    fn normalize(&self) -> Self {
        if needs_reverse(&self.coords()) {
            self.reverse()
        } else {
            self.clone()
        }
    }
}

impl Normalize for Curve {
    fn normalize(&self) -> Self {
        match self {
            Curve::LineString(g) => Curve::LineString(g.normalize()),
            Curve::CircularString(g) => Curve::CircularString(g.normalize()),
            Curve::CompoundCurve(g) => Curve::CompoundCurve(g.normalize()),
        }
    }
}

/// Rotate a closed linear ring so that it starts at its smallest coordinate.
fn rotate_to_min(ring: &LineString) -> LineString {
    if !ring.is_closed() || ring.num_coords() < 3 {
        return ring.clone();
    }
    let open = &ring.coords()[..ring.num_coords() - 1];
    let Some(start) = open.iter().position_min_by(|a, b| a.compare(b)) else {
        return ring.clone();
    };
    let mut coords: Vec<Coord> = open[start..].iter().chain(&open[..start]).copied().collect();
    coords.push(coords[0]);
    LineString::new(coords)
}

/// Orient a ring clockwise (`clockwise == true`) or counter-clockwise, rotating linear rings to
/// their smallest coordinate first. Curved rings keep their start vertex so their arcs stay
/// aligned.
fn normalize_ring(ring: &Curve, clockwise: bool) -> Curve {
    if ring.is_empty() {
        return ring.clone();
    }
    let ring = match ring {
        Curve::LineString(g) => Curve::LineString(rotate_to_min(g)),
        other => other.clone(),
    };
    let signed_area = geo::Polygon::new(curve_to_geo(&ring), vec![]).signed_area();
    let is_ccw = signed_area > 0.0;
    if signed_area != 0.0 && is_ccw == clockwise {
        ring.reverse()
    } else {
        ring
    }
}

impl Normalize for Polygon {
    fn normalize(&self) -> Self {
        let exterior = normalize_ring(self.exterior(), true);
        let interiors = self
            .interiors()
            .iter()
            .map(|ring| normalize_ring(ring, false))
            .sorted_by(GeometryOrd::compare)
            .collect();
        Polygon::new(exterior, interiors)
    }
}

fn normalize_members<G: Normalize + GeometryOrd>(members: &[G]) -> Vec<G> {
    members
        .iter()
        .map(Normalize::normalize)
        .sorted_by(GeometryOrd::compare)
        .collect()
}

impl Normalize for MultiPoint {
    fn normalize(&self) -> Self {
        MultiPoint::new(normalize_members(self.points()))
    }
}

impl Normalize for MultiLineString {
    fn normalize(&self) -> Self {
        MultiLineString::new(normalize_members(self.lines()))
    }
}

impl Normalize for MultiCircularString {
    fn normalize(&self) -> Self {
        MultiCircularString::new(normalize_members(self.curves()))
    }
}

impl Normalize for MultiPolygon {
    fn normalize(&self) -> Self {
        MultiPolygon::new(normalize_members(self.polygons()))
    }
}

impl Normalize for GeometryCollection {
    fn normalize(&self) -> Self {
        GeometryCollection::new(normalize_members(self.geometries()))
    }
}

impl Normalize for Geometry {
    fn normalize(&self) -> Self {
        use Geometry::*;
        match self {
            Point(g) => Point(g.normalize()),
            LineString(g) => LineString(g.normalize()),
            CircularString(g) => CircularString(g.normalize()),
            CompoundCurve(g) => CompoundCurve(g.normalize()),
            Polygon(g) => Polygon(g.normalize()),
            MultiPoint(g) => MultiPoint(g.normalize()),
            MultiLineString(g) => MultiLineString(g.normalize()),
            MultiCircularString(g) => MultiCircularString(g.normalize()),
            MultiPolygon(g) => MultiPolygon(g.normalize()),
            GeometryCollection(g) => GeometryCollection(g.normalize()),
        }
    }
}
