use crate::scalar::*;

/// Reverse the direction of a geometry.
///
/// Lineal geometries get their vertex order reversed. Multi-geometries reverse both the order of
/// their members and each member. Points are unchanged.
pub trait Reverse {
    fn reverse(&self) -> Self;
}

fn reversed(coords: &[Coord]) -> Vec<Coord> {
    coords.iter().rev().copied().collect()
}

impl Reverse for Point {
    fn reverse(&self) -> Self {
        *self
    }
}

impl Reverse for LineString {
    fn reverse(&self) -> Self {
        LineString::new(reversed(self.coords()))
    }
}

impl Reverse for CircularString {
    fn reverse(&self) -> Self {
        CircularString::new_unchecked(reversed(self.coords()))
    }
}

impl Reverse for CurveSegment {
    fn reverse(&self) -> Self {
        match self {
            CurveSegment::LineString(g) => CurveSegment::LineString(g.reverse()),
            CurveSegment::CircularString(g) => CurveSegment::CircularString(g.reverse()),
        }
    }
}

impl Reverse for CompoundCurve {
    fn reverse(&self) -> Self {
        let segments = self.segments().iter().rev().map(Reverse::reverse).collect();
        CompoundCurve::new_unchecked(segments)
    }
}

impl Reverse for Curve {
    fn reverse(&self) -> Self {
        match self {
            Curve::LineString(g) => Curve::LineString(g.reverse()),
            Curve::CircularString(g) => Curve::CircularString(g.reverse()),
            Curve::CompoundCurve(g) => Curve::CompoundCurve(g.reverse()),
        }
    }
}

impl Reverse for Polygon {
    fn reverse(&self) -> Self {
        Polygon::new(
            self.exterior().reverse(),
            self.interiors().iter().map(Reverse::reverse).collect(),
        )
    }
}

impl Reverse for MultiPoint {
    fn reverse(&self) -> Self {
        MultiPoint::new(self.points().iter().rev().copied().collect())
    }
}

impl Reverse for MultiLineString {
    fn reverse(&self) -> Self {
        MultiLineString::new(self.lines().iter().rev().map(Reverse::reverse).collect())
    }
}

impl Reverse for MultiCircularString {
    fn reverse(&self) -> Self {
        MultiCircularString::new(self.curves().iter().rev().map(Reverse::reverse).collect())
    }
}

impl Reverse for MultiPolygon {
    fn reverse(&self) -> Self {
        MultiPolygon::new(self.polygons().iter().rev().map(Reverse::reverse).collect())
    }
}

impl Reverse for GeometryCollection {
    fn reverse(&self) -> Self {
        GeometryCollection::new(
            self.geometries()
                .iter()
                .rev()
                .map(Reverse::reverse)
                .collect(),
        )
    }
}

impl Reverse for Geometry {
    fn reverse(&self) -> Self {
        use Geometry::*;
        match self {
            Point(g) => Point(g.reverse()),
            LineString(g) => LineString(g.reverse()),
            CircularString(g) => CircularString(g.reverse()),
            CompoundCurve(g) => CompoundCurve(g.reverse()),
            Polygon(g) => Polygon(g.reverse()),
            MultiPoint(g) => MultiPoint(g.reverse()),
            MultiLineString(g) => MultiLineString(g.reverse()),
            MultiCircularString(g) => MultiCircularString(g.reverse()),
            MultiPolygon(g) => MultiPolygon(g.reverse()),
            GeometryCollection(g) => GeometryCollection(g.reverse()),
        }
    }
}
