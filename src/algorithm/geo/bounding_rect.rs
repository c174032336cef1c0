use geo::algorithm::bounding_rect::BoundingRect as GeoBoundingRect;
use geo::Rect;

use crate::io::geo::*;
use crate::scalar::*;

/// Calculation of the bounding rectangle of a geometry.
///
/// Curved geometries use the envelope of their control points. `None` for empty geometries.
pub trait BoundingRect {
    /// Return the bounding rectangle of a geometry
    ///
    /// # Examples
    ///
    /// ```
    /// use sdo_geometry::algorithm::geo::BoundingRect;
    /// use sdo_geometry::scalar::{CircularString, Coord};
    ///
    /// let arc = CircularString::try_new(vec![
    ///     Coord::new(40.02, 116.34),
    ///     Coord::new(42.02, 116.34),
    ///     Coord::new(42.02, 118.34),
    /// ])
    /// .unwrap();
    ///
    /// let bounding_rect = arc.bounding_rect().unwrap();
    ///
    /// assert_eq!(40.02f64, bounding_rect.min().x);
    /// assert_eq!(42.02f64, bounding_rect.max().x);
    /// assert_eq!(116.34, bounding_rect.min().y);
    /// assert_eq!(118.34, bounding_rect.max().y);
    /// ```
    fn bounding_rect(&self) -> Option<Rect>;
}

impl BoundingRect for Point {
    fn bounding_rect(&self) -> Option<Rect> {
        point_to_geo(self).map(|point| point.bounding_rect())
    }
}

/// Implementation that converts to geo objects
macro_rules! to_geo_impl {
    ($type:ty, $to_geo:ident) => {
        impl BoundingRect for $type {
            fn bounding_rect(&self) -> Option<Rect> {
                $to_geo(self).bounding_rect()
            }
        }
    };
}

to_geo_impl!(LineString, line_string_to_geo);
to_geo_impl!(CircularString, circular_string_to_geo);
to_geo_impl!(CompoundCurve, compound_curve_to_geo);
to_geo_impl!(Curve, curve_to_geo);
to_geo_impl!(Polygon, polygon_to_geo);
to_geo_impl!(MultiPoint, multi_point_to_geo);
to_geo_impl!(MultiLineString, multi_line_string_to_geo);
to_geo_impl!(MultiCircularString, multi_circular_string_to_geo);
to_geo_impl!(MultiPolygon, multi_polygon_to_geo);
to_geo_impl!(GeometryCollection, geometry_collection_to_geo);
to_geo_impl!(Geometry, geometry_to_geo);

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::circularstring::cs0;

    #[test]
    fn envelope_of_control_points() {
        let rect = cs0().bounding_rect().unwrap();
        assert_eq!(rect.min(), geo::coord! { x: 0., y: -1. });
        assert_eq!(rect.max(), geo::coord! { x: 4., y: 1. });
    }

    #[test]
    fn empty_has_no_envelope() {
        assert!(CircularString::empty().bounding_rect().is_none());
        assert!(Point::empty().bounding_rect().is_none());
        assert!(MultiCircularString::default().bounding_rect().is_none());
    }
}
