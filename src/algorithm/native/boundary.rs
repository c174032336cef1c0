use itertools::Itertools;

use crate::error::{Result, SdoError};
use crate::scalar::*;

/// The topological boundary of a geometry.
///
/// Lineal geometries return their endpoints as a [`MultiPoint`], using the mod-2 rule for
/// multi-geometries: an endpoint belongs to the boundary when an odd number of members end there.
/// Areal geometries return their rings.
pub trait Boundary {
    type Output;

    fn boundary(&self) -> Self::Output;
}

fn curve_endpoints(start: Option<&Coord>, end: Option<&Coord>, closed: bool) -> MultiPoint {
    match (start, end) {
        (Some(start), Some(end)) if !closed => {
            MultiPoint::new(vec![Point::new(*start), Point::new(*end)])
        }
        _ => MultiPoint::default(),
    }
}

/// Endpoints that occur an odd number of times, in coordinate order.
fn mod2_boundary<'a>(endpoints: impl Iterator<Item = &'a Coord>) -> MultiPoint {
    let points = endpoints
        .copied()
        .sorted_by(Coord::compare)
        .dedup_by_with_count(|a, b| a.equals_2d(b))
        .filter(|(count, _)| count % 2 == 1)
        .map(|(_, coord)| Point::new(coord))
        .collect();
    MultiPoint::new(points)
}

impl Boundary for Point {
    type Output = MultiPoint;

    fn boundary(&self) -> Self::Output {
        MultiPoint::default()
    }
}

impl Boundary for MultiPoint {
    type Output = MultiPoint;

    fn boundary(&self) -> Self::Output {
        MultiPoint::default()
    }
}

impl Boundary for LineString {
    type Output = MultiPoint;

    fn boundary(&self) -> Self::Output {
        curve_endpoints(self.coords().first(), self.coords().last(), self.is_closed())
    }
}

impl Boundary for CircularString {
    type Output = MultiPoint;

    fn boundary(&self) -> Self::Output {
        curve_endpoints(self.coords().first(), self.coords().last(), self.is_closed())
    }
}

impl Boundary for CompoundCurve {
    type Output = MultiPoint;

    fn boundary(&self) -> Self::Output {
        curve_endpoints(self.start(), self.end(), self.is_closed())
    }
}

impl Boundary for Curve {
    type Output = MultiPoint;

    fn boundary(&self) -> Self::Output {
        match self {
            Curve::LineString(g) => g.boundary(),
            Curve::CircularString(g) => g.boundary(),
            Curve::CompoundCurve(g) => g.boundary(),
        }
    }
}

impl Boundary for MultiLineString {
    type Output = MultiPoint;

    fn boundary(&self) -> Self::Output {
        mod2_boundary(
            self.lines()
                .iter()
                .filter_map(|line| line.coords().first().zip(line.coords().last()))
                .flat_map(|(start, end)| [start, end]),
        )
    }
}

impl Boundary for MultiCircularString {
    type Output = MultiPoint;

    fn boundary(&self) -> Self::Output {
        mod2_boundary(
            self.curves()
                .iter()
                .filter_map(|curve| curve.coords().first().zip(curve.coords().last()))
                .flat_map(|(start, end)| [start, end]),
        )
    }
}

impl Boundary for Polygon {
    type Output = Geometry;

    fn boundary(&self) -> Self::Output {
        if self.is_empty() {
            return Geometry::MultiLineString(MultiLineString::default());
        }
        if self.interiors().is_empty() {
            return self.exterior().clone().into();
        }
        curves_to_multi_geometry(self.rings().cloned().collect())
    }
}

impl Boundary for MultiPolygon {
    type Output = Geometry;

    fn boundary(&self) -> Self::Output {
        curves_to_multi_geometry(
            self.polygons()
                .iter()
                .filter(|polygon| !polygon.is_empty())
                .flat_map(Polygon::rings)
                .cloned()
                .collect(),
        )
    }
}

impl Boundary for GeometryCollection {
    type Output = Result<Geometry>;

    fn boundary(&self) -> Self::Output {
        Err(SdoError::InvalidArgument(
            "boundary is not defined for GeometryCollection".to_string(),
        ))
    }
}

impl Boundary for Geometry {
    type Output = Result<Geometry>;

    fn boundary(&self) -> Self::Output {
        use Geometry::*;
        let boundary = match self {
            Point(g) => MultiPoint(g.boundary()),
            LineString(g) => MultiPoint(g.boundary()),
            CircularString(g) => MultiPoint(g.boundary()),
            CompoundCurve(g) => MultiPoint(g.boundary()),
            Polygon(g) => g.boundary(),
            MultiPoint(g) => MultiPoint(g.boundary()),
            MultiLineString(g) => MultiPoint(g.boundary()),
            MultiCircularString(g) => MultiPoint(g.boundary()),
            MultiPolygon(g) => g.boundary(),
            GeometryCollection(g) => g.boundary()?,
        };
        Ok(boundary)
    }
}
