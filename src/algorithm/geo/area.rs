use geo::prelude::Area as GeoArea;

use crate::io::geo::*;
use crate::scalar::*;

/// Signed and unsigned planar area of a geometry.
///
/// Curved rings are measured over the polygon through their control points.
///
/// # Examples
///
/// ```
/// use sdo_geometry::algorithm::geo::Area;
/// use sdo_geometry::algorithm::native::Reverse;
/// use sdo_geometry::scalar::{Coord, LineString, Polygon};
///
/// let polygon = Polygon::new(
///     LineString::new(vec![
///         Coord::new(0., 0.),
///         Coord::new(5., 0.),
///         Coord::new(5., 6.),
///         Coord::new(0., 6.),
///         Coord::new(0., 0.),
///     ]),
///     vec![],
/// );
///
/// assert_eq!(polygon.signed_area(), 30.);
/// assert_eq!(polygon.reverse().signed_area(), -30.);
/// assert_eq!(polygon.reverse().unsigned_area(), 30.);
/// ```
pub trait Area {
    fn signed_area(&self) -> f64;

    fn unsigned_area(&self) -> f64;
}

/// Implementation where the result is zero.
macro_rules! zero_impl {
    ($type:ty) => {
        impl Area for $type {
            fn signed_area(&self) -> f64 {
                0.0
            }

            fn unsigned_area(&self) -> f64 {
                0.0
            }
        }
    };
}

zero_impl!(Point);
zero_impl!(LineString);
zero_impl!(CircularString);
zero_impl!(CompoundCurve);
zero_impl!(MultiPoint);
zero_impl!(MultiLineString);
zero_impl!(MultiCircularString);

macro_rules! to_geo_impl {
    ($type:ty, $to_geo:ident) => {
        impl Area for $type {
            fn signed_area(&self) -> f64 {
                $to_geo(self).signed_area()
            }

            fn unsigned_area(&self) -> f64 {
                $to_geo(self).unsigned_area()
            }
        }
    };
}

to_geo_impl!(Polygon, polygon_to_geo);
to_geo_impl!(MultiPolygon, multi_polygon_to_geo);
to_geo_impl!(GeometryCollection, geometry_collection_to_geo);
to_geo_impl!(Geometry, geometry_to_geo);
