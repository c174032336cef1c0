use geo::EuclideanLength as _EuclideanLength;

use crate::io::geo::*;
use crate::scalar::*;

pub trait EuclideanLength {
    /// Planar length of a geometry, measured along its vertices.
    ///
    /// Curved geometries are measured through their control points, so a circular arc counts
    /// as the two chords between its start, mid and end vertices.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdo_geometry::algorithm::geo::EuclideanLength;
    /// use sdo_geometry::scalar::{CircularString, Coord};
    ///
    /// let arc = CircularString::try_new(vec![
    ///     Coord::new(0., 0.),
    ///     Coord::new(3., 4.),
    ///     Coord::new(6., 0.),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(arc.euclidean_length(), 10.);
    /// ```
    fn euclidean_length(&self) -> f64;
}

/// Implementation where the result is zero.
macro_rules! zero_impl {
    ($type:ty) => {
        impl EuclideanLength for $type {
            fn euclidean_length(&self) -> f64 {
                0.0
            }
        }
    };
}

zero_impl!(Point);
zero_impl!(MultiPoint);
zero_impl!(Polygon);
zero_impl!(MultiPolygon);

/// Implementation that converts to geo objects
macro_rules! to_geo_impl {
    ($type:ty, $to_geo:ident) => {
        impl EuclideanLength for $type {
            fn euclidean_length(&self) -> f64 {
                $to_geo(self).euclidean_length()
            }
        }
    };
}

to_geo_impl!(LineString, line_string_to_geo);
to_geo_impl!(CircularString, circular_string_to_geo);
to_geo_impl!(CompoundCurve, compound_curve_to_geo);
to_geo_impl!(Curve, curve_to_geo);
to_geo_impl!(MultiLineString, multi_line_string_to_geo);
to_geo_impl!(MultiCircularString, multi_circular_string_to_geo);

impl EuclideanLength for GeometryCollection {
    fn euclidean_length(&self) -> f64 {
        self.geometries().iter().map(|g| g.euclidean_length()).sum()
    }
}

impl EuclideanLength for Geometry {
    fn euclidean_length(&self) -> f64 {
        use Geometry::*;
        match self {
            Point(g) => g.euclidean_length(),
            LineString(g) => g.euclidean_length(),
            CircularString(g) => g.euclidean_length(),
            CompoundCurve(g) => g.euclidean_length(),
            Polygon(g) => g.euclidean_length(),
            MultiPoint(g) => g.euclidean_length(),
            MultiLineString(g) => g.euclidean_length(),
            MultiCircularString(g) => g.euclidean_length(),
            MultiPolygon(g) => g.euclidean_length(),
            GeometryCollection(g) => g.euclidean_length(),
        }
    }
}
