use crate::scalar::*;

/// Convert any coordinate to a [`geo::Coord`].
///
/// Only the first two dimensions will be kept.
pub fn coord_to_geo(coord: &Coord) -> geo::Coord {
    geo::Coord {
        x: coord.x,
        y: coord.y,
    }
}

/// Convert a [`Point`] to a [`geo::Point`], or `None` for the empty point.
///
/// Only the first two dimensions will be kept.
pub fn point_to_geo(point: &Point) -> Option<geo::Point> {
    point.coord().map(|coord| geo::Point(coord_to_geo(coord)))
}

/// Convert a [`LineString`] to a [`geo::LineString`].
///
/// Only the first two dimensions will be kept.
pub fn line_string_to_geo(line_string: &LineString) -> geo::LineString {
    coords_to_geo(line_string.coords())
}

/// Convert a [`CircularString`] to a [`geo::LineString`] through its vertices.
///
/// Only the first two dimensions will be kept.
pub fn circular_string_to_geo(circular_string: &CircularString) -> geo::LineString {
    coords_to_geo(circular_string.coords())
}

/// Convert a [`CompoundCurve`] to a [`geo::LineString`] through its vertices.
///
/// Only the first two dimensions will be kept.
pub fn compound_curve_to_geo(compound_curve: &CompoundCurve) -> geo::LineString {
    coords_to_geo(&compound_curve.coords())
}

/// Convert any [`Curve`] to a [`geo::LineString`] through its vertices.
pub fn curve_to_geo(curve: &Curve) -> geo::LineString {
    match curve {
        Curve::LineString(g) => line_string_to_geo(g),
        Curve::CircularString(g) => circular_string_to_geo(g),
        Curve::CompoundCurve(g) => compound_curve_to_geo(g),
    }
}

/// Convert a [`Polygon`] to a [`geo::Polygon`].
///
/// Curved rings are taken through their vertices. Only the first two dimensions will be kept.
pub fn polygon_to_geo(polygon: &Polygon) -> geo::Polygon {
    let exterior = curve_to_geo(polygon.exterior());
    let interiors = polygon.interiors().iter().map(curve_to_geo).collect();
    geo::Polygon::new(exterior, interiors)
}

/// Convert a [`MultiPoint`] to a [`geo::MultiPoint`], skipping empty points.
pub fn multi_point_to_geo(multi_point: &MultiPoint) -> geo::MultiPoint {
    geo::MultiPoint::new(multi_point.points().iter().filter_map(point_to_geo).collect())
}

/// Convert a [`MultiLineString`] to a [`geo::MultiLineString`].
pub fn multi_line_string_to_geo(multi_line_string: &MultiLineString) -> geo::MultiLineString {
    geo::MultiLineString::new(
        multi_line_string
            .lines()
            .iter()
            .map(line_string_to_geo)
            .collect(),
    )
}

/// Convert a [`MultiCircularString`] to a [`geo::MultiLineString`] through the vertices of each
/// curve.
pub fn multi_circular_string_to_geo(
    multi_circular_string: &MultiCircularString,
) -> geo::MultiLineString {
    geo::MultiLineString::new(
        multi_circular_string
            .curves()
            .iter()
            .map(circular_string_to_geo)
            .collect(),
    )
}

/// Convert a [`MultiPolygon`] to a [`geo::MultiPolygon`].
pub fn multi_polygon_to_geo(multi_polygon: &MultiPolygon) -> geo::MultiPolygon {
    geo::MultiPolygon::new(multi_polygon.polygons().iter().map(polygon_to_geo).collect())
}

/// Convert a [`GeometryCollection`] to a [`geo::GeometryCollection`].
pub fn geometry_collection_to_geo(collection: &GeometryCollection) -> geo::GeometryCollection {
    geo::GeometryCollection(
        collection
            .geometries()
            .iter()
            .map(geometry_to_geo)
            .collect(),
    )
}

/// Convert any [`Geometry`] to a [`geo::Geometry`].
///
/// The empty point has no `geo` counterpart and becomes an empty `MultiPoint`.
pub fn geometry_to_geo(geometry: &Geometry) -> geo::Geometry {
    match geometry {
        Geometry::Point(g) => match point_to_geo(g) {
            Some(p) => geo::Geometry::Point(p),
            None => geo::Geometry::MultiPoint(geo::MultiPoint::new(vec![])),
        },
        Geometry::LineString(g) => geo::Geometry::LineString(line_string_to_geo(g)),
        Geometry::CircularString(g) => geo::Geometry::LineString(circular_string_to_geo(g)),
        Geometry::CompoundCurve(g) => geo::Geometry::LineString(compound_curve_to_geo(g)),
        Geometry::Polygon(g) => geo::Geometry::Polygon(polygon_to_geo(g)),
        Geometry::MultiPoint(g) => geo::Geometry::MultiPoint(multi_point_to_geo(g)),
        Geometry::MultiLineString(g) => {
            geo::Geometry::MultiLineString(multi_line_string_to_geo(g))
        }
        Geometry::MultiCircularString(g) => {
            geo::Geometry::MultiLineString(multi_circular_string_to_geo(g))
        }
        Geometry::MultiPolygon(g) => geo::Geometry::MultiPolygon(multi_polygon_to_geo(g)),
        Geometry::GeometryCollection(g) => {
            geo::Geometry::GeometryCollection(geometry_collection_to_geo(g))
        }
    }
}

fn coords_to_geo(coords: &[Coord]) -> geo::LineString {
    geo::LineString::new(coords.iter().map(coord_to_geo).collect())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::circularstring::cs0;
    use crate::test::polygon::p0;

    #[test]
    fn drops_z_and_m() {
        let coord = Coord::new(1., 2.).with_z(3.).with_m(4.);
        assert_eq!(coord_to_geo(&coord), geo::coord! { x: 1., y: 2. });
    }

    #[test]
    fn curves_through_vertices() {
        let line = circular_string_to_geo(&cs0());
        assert_eq!(line.0.len(), cs0().num_points());
    }

    #[test]
    fn polygon_round_trips_through_geo() {
        let polygon = p0();
        let back: Polygon = polygon_to_geo(&polygon).into();
        assert_eq!(back, polygon);
    }

    #[test]
    fn empty_point() {
        assert!(point_to_geo(&Point::empty()).is_none());
        assert!(matches!(
            geometry_to_geo(&Geometry::Point(Point::empty())),
            geo::Geometry::MultiPoint(ref mp) if mp.0.is_empty()
        ));
    }
}
