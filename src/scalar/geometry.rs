use crate::scalar::*;

/// Any decoded geometry.
///
/// This is a closed set: every capability of the geometry model (see [`crate::algorithm`]) is
/// implemented on each variant and dispatched through this enum.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    CircularString(CircularString),
    CompoundCurve(CompoundCurve),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiCircularString(MultiCircularString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    pub fn geometry_type(&self) -> &'static str {
        use Geometry::*;
        match self {
            Point(_) => "Point",
            LineString(_) => "LineString",
            CircularString(_) => "CircularString",
            CompoundCurve(_) => "CompoundCurve",
            Polygon(_) => "Polygon",
            MultiPoint(_) => "MultiPoint",
            MultiLineString(_) => "MultiLineString",
            MultiCircularString(_) => "MultiCircularString",
            MultiPolygon(_) => "MultiPolygon",
            GeometryCollection(_) => "GeometryCollection",
        }
    }

    /// Position of this variant in the cross-type ordering used by
    /// [`GeometryOrd`][crate::algorithm::native::GeometryOrd].
    pub(crate) fn sort_index(&self) -> u8 {
        use Geometry::*;
        match self {
            Point(_) => 0,
            MultiPoint(_) => 1,
            LineString(_) => 2,
            CircularString(_) => 3,
            CompoundCurve(_) => 4,
            MultiLineString(_) => 5,
            MultiCircularString(_) => 6,
            Polygon(_) => 7,
            MultiPolygon(_) => 8,
            GeometryCollection(_) => 9,
        }
    }

    pub fn is_empty(&self) -> bool {
        use Geometry::*;
        match self {
            Point(g) => g.is_empty(),
            LineString(g) => g.is_empty(),
            CircularString(g) => g.is_empty(),
            CompoundCurve(g) => g.is_empty(),
            Polygon(g) => g.is_empty(),
            MultiPoint(g) => g.is_empty(),
            MultiLineString(g) => g.is_empty(),
            MultiCircularString(g) => g.is_empty(),
            MultiPolygon(g) => g.is_empty(),
            GeometryCollection(g) => g.is_empty(),
        }
    }

    /// Topological dimension: 0 for points, 1 for curves, 2 for surfaces, and the maximum over
    /// the members of a collection (`None` for an empty collection).
    pub fn dimension(&self) -> Option<usize> {
        use Geometry::*;
        match self {
            Point(_) | MultiPoint(_) => Some(0),
            LineString(_) | CircularString(_) | CompoundCurve(_) | MultiLineString(_)
            | MultiCircularString(_) => Some(1),
            Polygon(_) | MultiPolygon(_) => Some(2),
            GeometryCollection(g) => g.geometries().iter().filter_map(|g| g.dimension()).max(),
        }
    }
}

impl From<Curve> for Geometry {
    fn from(value: Curve) -> Self {
        match value {
            Curve::LineString(g) => Geometry::LineString(g),
            Curve::CircularString(g) => Geometry::CircularString(g),
            Curve::CompoundCurve(g) => Geometry::CompoundCurve(g),
        }
    }
}

/// Pack curves into the tightest multi-geometry that holds them all.
///
/// All straight curves become a [`MultiLineString`], all circular ones a
/// [`MultiCircularString`], and any other mix a [`GeometryCollection`] in the same order.
pub(crate) fn curves_to_multi_geometry(curves: Vec<Curve>) -> Geometry {
    if curves.iter().all(|c| matches!(c, Curve::LineString(_))) {
        let lines = curves
            .into_iter()
            .filter_map(|c| match c {
                Curve::LineString(g) => Some(g),
                _ => None,
            })
            .collect();
        Geometry::MultiLineString(MultiLineString::new(lines))
    } else if curves.iter().all(|c| matches!(c, Curve::CircularString(_))) {
        let arcs = curves
            .into_iter()
            .filter_map(|c| match c {
                Curve::CircularString(g) => Some(g),
                _ => None,
            })
            .collect();
        Geometry::MultiCircularString(MultiCircularString::new(arcs))
    } else {
        Geometry::GeometryCollection(GeometryCollection::new(
            curves.into_iter().map(Geometry::from).collect(),
        ))
    }
}

impl From<geo::Geometry> for Geometry {
    fn from(value: geo::Geometry) -> Self {
        match value {
            geo::Geometry::Point(g) => Geometry::Point(g.into()),
            geo::Geometry::Line(g) => Geometry::LineString(LineString::new(vec![
                g.start.into(),
                g.end.into(),
            ])),
            geo::Geometry::LineString(g) => Geometry::LineString(g.into()),
            geo::Geometry::Polygon(g) => Geometry::Polygon(g.into()),
            geo::Geometry::MultiPoint(g) => Geometry::MultiPoint(g.into()),
            geo::Geometry::MultiLineString(g) => Geometry::MultiLineString(g.into()),
            geo::Geometry::MultiPolygon(g) => Geometry::MultiPolygon(g.into()),
            geo::Geometry::GeometryCollection(g) => Geometry::GeometryCollection(g.into()),
            geo::Geometry::Rect(g) => Geometry::Polygon(g.to_polygon().into()),
            geo::Geometry::Triangle(g) => Geometry::Polygon(g.to_polygon().into()),
        }
    }
}
