use crate::error::{Result, SdoError};
use crate::scalar::*;

/// Apply a function to every coordinate of a geometry, keeping its structure.
///
/// The number of vertices never changes, so a circular string keeps whole arcs. A compound curve
/// whose segments stop sharing endpoints after the mapping is an error.
pub trait MapCoords {
    type Output;

    fn map_coords<F>(&self, map_op: F) -> Result<Self::Output>
    where
        F: Fn(&Coord) -> Coord,
    {
        self.try_map_coords(|coord| Ok::<_, SdoError>(map_op(coord)))
    }

    fn try_map_coords<F, E>(&self, map_op: F) -> Result<Self::Output>
    where
        F: Fn(&Coord) -> std::result::Result<Coord, E>,
        SdoError: From<E>;
}

fn try_map_seq<F, E>(coords: &[Coord], map_op: F) -> Result<Vec<Coord>>
where
    F: Fn(&Coord) -> std::result::Result<Coord, E>,
    SdoError: From<E>,
{
    Ok(coords
        .iter()
        .map(map_op)
        .collect::<std::result::Result<Vec<_>, E>>()?)
}

impl MapCoords for Coord {
    type Output = Coord;

    fn try_map_coords<F, E>(&self, map_op: F) -> Result<Self::Output>
    where
        F: Fn(&Coord) -> std::result::Result<Coord, E>,
        SdoError: From<E>,
    {
        Ok(map_op(self)?)
    }
}

impl MapCoords for Point {
    type Output = Point;

    fn try_map_coords<F, E>(&self, map_op: F) -> Result<Self::Output>
    where
        F: Fn(&Coord) -> std::result::Result<Coord, E>,
        SdoError: From<E>,
    {
        match self.coord() {
            Some(coord) => Ok(Point::new(map_op(coord)?)),
            None => Ok(Point::empty()),
        }
    }
}

impl MapCoords for LineString {
    type Output = LineString;

    fn try_map_coords<F, E>(&self, map_op: F) -> Result<Self::Output>
    where
        F: Fn(&Coord) -> std::result::Result<Coord, E>,
        SdoError: From<E>,
    {
        Ok(LineString::new(try_map_seq(self.coords(), map_op)?))
    }
}

impl MapCoords for CircularString {
    type Output = CircularString;

    fn try_map_coords<F, E>(&self, map_op: F) -> Result<Self::Output>
    where
        F: Fn(&Coord) -> std::result::Result<Coord, E>,
        SdoError: From<E>,
    {
        Ok(CircularString::new_unchecked(try_map_seq(
            self.coords(),
            map_op,
        )?))
    }
}

impl MapCoords for CurveSegment {
    type Output = CurveSegment;

    fn try_map_coords<F, E>(&self, map_op: F) -> Result<Self::Output>
    where
        F: Fn(&Coord) -> std::result::Result<Coord, E>,
        SdoError: From<E>,
    {
        match self {
            CurveSegment::LineString(g) => Ok(CurveSegment::LineString(g.try_map_coords(map_op)?)),
            CurveSegment::CircularString(g) => {
                Ok(CurveSegment::CircularString(g.try_map_coords(map_op)?))
            }
        }
    }
}

impl MapCoords for CompoundCurve {
    type Output = CompoundCurve;

    fn try_map_coords<F, E>(&self, map_op: F) -> Result<Self::Output>
    where
        F: Fn(&Coord) -> std::result::Result<Coord, E>,
        SdoError: From<E>,
    {
        let segments = self
            .segments()
            .iter()
            .map(|segment| segment.try_map_coords(&map_op))
            .collect::<Result<Vec<_>>>()?;
        CompoundCurve::try_new(segments)
    }
}

impl MapCoords for Curve {
    type Output = Curve;

    fn try_map_coords<F, E>(&self, map_op: F) -> Result<Self::Output>
    where
        F: Fn(&Coord) -> std::result::Result<Coord, E>,
        SdoError: From<E>,
    {
        match self {
            Curve::LineString(g) => Ok(Curve::LineString(g.try_map_coords(map_op)?)),
            Curve::CircularString(g) => Ok(Curve::CircularString(g.try_map_coords(map_op)?)),
            Curve::CompoundCurve(g) => Ok(Curve::CompoundCurve(g.try_map_coords(map_op)?)),
        }
    }
}

impl MapCoords for Polygon {
    type Output = Polygon;

    fn try_map_coords<F, E>(&self, map_op: F) -> Result<Self::Output>
    where
        F: Fn(&Coord) -> std::result::Result<Coord, E>,
        SdoError: From<E>,
    {
        let exterior = self.exterior().try_map_coords(&map_op)?;
        let interiors = self
            .interiors()
            .iter()
            .map(|int| int.try_map_coords(&map_op))
            .collect::<Result<Vec<_>>>()?;
        Ok(Polygon::new(exterior, interiors))
    }
}

impl MapCoords for MultiPoint {
    type Output = MultiPoint;

    fn try_map_coords<F, E>(&self, map_op: F) -> Result<Self::Output>
    where
        F: Fn(&Coord) -> std::result::Result<Coord, E>,
        SdoError: From<E>,
    {
        let points = self
            .points()
            .iter()
            .map(|point| point.try_map_coords(&map_op))
            .collect::<Result<Vec<_>>>()?;
        Ok(MultiPoint::new(points))
    }
}

impl MapCoords for MultiLineString {
    type Output = MultiLineString;

    fn try_map_coords<F, E>(&self, map_op: F) -> Result<Self::Output>
    where
        F: Fn(&Coord) -> std::result::Result<Coord, E>,
        SdoError: From<E>,
    {
        let lines = self
            .lines()
            .iter()
            .map(|line_string| line_string.try_map_coords(&map_op))
            .collect::<Result<Vec<_>>>()?;
        Ok(MultiLineString::new(lines))
    }
}

impl MapCoords for MultiCircularString {
    type Output = MultiCircularString;

    fn try_map_coords<F, E>(&self, map_op: F) -> Result<Self::Output>
    where
        F: Fn(&Coord) -> std::result::Result<Coord, E>,
        SdoError: From<E>,
    {
        let curves = self
            .curves()
            .iter()
            .map(|curve| curve.try_map_coords(&map_op))
            .collect::<Result<Vec<_>>>()?;
        Ok(MultiCircularString::new(curves))
    }
}

impl MapCoords for MultiPolygon {
    type Output = MultiPolygon;

    fn try_map_coords<F, E>(&self, map_op: F) -> Result<Self::Output>
    where
        F: Fn(&Coord) -> std::result::Result<Coord, E>,
        SdoError: From<E>,
    {
        let polygons = self
            .polygons()
            .iter()
            .map(|polygon| polygon.try_map_coords(&map_op))
            .collect::<Result<Vec<_>>>()?;
        Ok(MultiPolygon::new(polygons))
    }
}

impl MapCoords for GeometryCollection {
    type Output = GeometryCollection;

    fn try_map_coords<F, E>(&self, map_op: F) -> Result<Self::Output>
    where
        F: Fn(&Coord) -> std::result::Result<Coord, E>,
        SdoError: From<E>,
    {
        // Members may be collections again; a trait object keeps the closure type fixed
        let map_op: &dyn Fn(&Coord) -> std::result::Result<Coord, E> = &map_op;
        let geometries = self
            .geometries()
            .iter()
            .map(|geometry| geometry.try_map_coords(map_op))
            .collect::<Result<Vec<_>>>()?;
        Ok(GeometryCollection::new(geometries))
    }
}

impl MapCoords for Geometry {
    type Output = Geometry;

    fn try_map_coords<F, E>(&self, map_op: F) -> Result<Self::Output>
    where
        F: Fn(&Coord) -> std::result::Result<Coord, E>,
        SdoError: From<E>,
    {
        use Geometry::*;
        let mapped = match self {
            Point(g) => Point(g.try_map_coords(map_op)?),
            LineString(g) => LineString(g.try_map_coords(map_op)?),
            CircularString(g) => CircularString(g.try_map_coords(map_op)?),
            CompoundCurve(g) => CompoundCurve(g.try_map_coords(map_op)?),
            Polygon(g) => Polygon(g.try_map_coords(map_op)?),
            MultiPoint(g) => MultiPoint(g.try_map_coords(map_op)?),
            MultiLineString(g) => MultiLineString(g.try_map_coords(map_op)?),
            MultiCircularString(g) => MultiCircularString(g.try_map_coords(map_op)?),
            MultiPolygon(g) => MultiPolygon(g.try_map_coords(map_op)?),
            GeometryCollection(g) => GeometryCollection(g.try_map_coords(map_op)?),
        };
        Ok(mapped)
    }
}
