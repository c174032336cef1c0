use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{FormatError, Result, SdoError};
use crate::io::sdo::reader::builder::{build_geometry, empty_geometry};
use crate::io::sdo::reader::{OrdinateReader, ShapeAssembler};
use crate::io::sdo::{apply_dimension_limit, ElementWalker, SdoGeometryKind, SdoTypeCode};
use crate::scalar::{Coord, Geometry, Point};

/// The `SDO_POINT` attribute of an `SDO_GEOMETRY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SdoPoint {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl SdoPoint {
    pub fn new(x: f64, y: f64, z: Option<f64>) -> Self {
        Self { x, y, z }
    }
}

/// A borrowed `SDO_GEOMETRY` value.
///
/// Absent attributes (SQL `NULL`) are `None`. `SDO_SRID` is not needed for decoding and is not
/// part of this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SdoGeometry<'a> {
    pub gtype: i32,
    pub point: Option<SdoPoint>,
    pub elem_info: Option<&'a [i32]>,
    pub ordinates: Option<&'a [f64]>,
}

impl<'a> SdoGeometry<'a> {
    /// A geometry described by element info and ordinate arrays.
    pub fn new(gtype: i32, elem_info: &'a [i32], ordinates: &'a [f64]) -> Self {
        Self {
            gtype,
            point: None,
            elem_info: Some(elem_info),
            ordinates: Some(ordinates),
        }
    }

    /// A point stored inline in `SDO_POINT`.
    pub fn from_point(gtype: i32, point: SdoPoint) -> Self {
        Self {
            gtype,
            point: Some(point),
            elem_info: None,
            ordinates: None,
        }
    }
}

/// Options for [`SdoReader`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdoReaderOptions {
    /// Maximum number of ordinates kept per coordinate, between 2 and 4.
    ///
    /// `x` and `y` are always kept, then `z` and `m` in that order while they are present.
    /// Defaults to the dimension of the source geometry.
    pub dimension_limit: Option<usize>,
}

impl SdoReaderOptions {
    pub fn with_dimension_limit(mut self, dimension_limit: usize) -> Self {
        self.dimension_limit = Some(dimension_limit);
        self
    }
}

/// Decodes `SDO_GEOMETRY` values into [`Geometry`].
///
/// A reader only holds its options, so one reader can decode any number of values, from any
/// number of threads.
///
/// # Examples
///
/// ```
/// use sdo_geometry::io::sdo::{SdoGeometry, SdoReader, SdoReaderOptions};
/// use sdo_geometry::scalar::Geometry;
///
/// let reader = SdoReader::new(SdoReaderOptions::default());
/// let geom = SdoGeometry::new(2003, &[1, 1003, 3], &[0., 0., 50., 50.]);
///
/// let Geometry::Polygon(polygon) = reader.read(&geom).unwrap() else {
///     panic!("expected a polygon");
/// };
/// assert_eq!(polygon.exterior().coords().len(), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SdoReader {
    options: SdoReaderOptions,
}

impl SdoReader {
    pub fn new(options: SdoReaderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SdoReaderOptions {
        &self.options
    }

    fn dimension_limit(&self, source: usize) -> Result<usize> {
        match self.options.dimension_limit {
            None => Ok(source),
            Some(limit) if (2..=4).contains(&limit) => Ok(limit),
            Some(limit) => Err(SdoError::InvalidArgument(format!(
                "dimension limit must be between 2 and 4, got {limit}"
            ))),
        }
    }

    /// Decode one `SDO_GEOMETRY`.
    ///
    /// Any malformed input is reported as a [`FormatError`] and no partial geometry is returned.
    pub fn read(&self, geom: &SdoGeometry) -> Result<Geometry> {
        let elem_info = geom.elem_info.unwrap_or_default();
        let ordinates = geom.ordinates.unwrap_or_default();
        trace!(
            gtype = geom.gtype,
            descriptors = elem_info.len() / 3,
            ordinates = ordinates.len(),
            "decoding SDO_GEOMETRY"
        );

        let type_code = SdoTypeCode::resolve(geom.gtype)?;
        let layout = type_code.layout();
        let max_dim = self.dimension_limit(layout.stride())?;

        if elem_info.is_empty() {
            if !ordinates.is_empty() {
                return Err(FormatError::TruncatedDescriptor {
                    len: 0,
                    expected: 3,
                }
                .into());
            }
            return match geom.point {
                Some(point) => read_inline_point(&type_code, &point, max_dim),
                None => Ok(empty_geometry(type_code.kind())),
            };
        }

        if geom.point.is_some() {
            debug!(gtype = geom.gtype, "ignoring SDO_POINT next to element info");
        }

        let walker = ElementWalker::try_new(elem_info, ordinates.len(), layout)?;
        let reader = OrdinateReader::new(ordinates, layout, max_dim);
        let shapes = ShapeAssembler::new(reader).assemble(walker)?;
        build_geometry(type_code.kind(), shapes)
    }
}

fn read_inline_point(type_code: &SdoTypeCode, point: &SdoPoint, max_dim: usize) -> Result<Geometry> {
    if type_code.kind() != SdoGeometryKind::Point {
        return Err(FormatError::ShapeCountMismatch {
            kind: type_code.kind(),
            reason: "SDO_POINT is only valid for point geometries".to_string(),
        }
        .into());
    }
    let mut coord = Coord::new(point.x, point.y);
    if type_code.layout().z_index().is_some() {
        coord.z = point.z;
    }
    Ok(Geometry::Point(Point::new(apply_dimension_limit(
        &coord, max_dim,
    ))))
}

/// Decode one `SDO_GEOMETRY` with default options.
pub fn from_sdo(geom: &SdoGeometry) -> Result<Geometry> {
    SdoReader::default().read(geom)
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use wkt::TryFromWkt;

    use super::*;
    use crate::algorithm::geo::Area;
    use crate::algorithm::native::{EqualsExact, Normalize, Reverse};
    use crate::scalar::*;

    fn from_wkt(s: &str) -> Geometry {
        geo::Geometry::<f64>::try_from_wkt_str(s).unwrap().into()
    }

    fn read_with(
        limit: Option<usize>,
        gtype: i32,
        elem_info: &[i32],
        ordinates: &[f64],
    ) -> Result<Geometry> {
        let options = SdoReaderOptions {
            dimension_limit: limit,
        };
        SdoReader::new(options).read(&SdoGeometry::new(gtype, elem_info, ordinates))
    }

    fn read(gtype: i32, elem_info: &[i32], ordinates: &[f64]) -> Result<Geometry> {
        read_with(None, gtype, elem_info, ordinates)
    }

    fn assert_decodes(gtype: i32, elem_info: &[i32], ordinates: &[f64], expected: &str) {
        let actual = read(gtype, elem_info, ordinates).unwrap();
        assert!(
            actual.equals_norm(&from_wkt(expected)),
            "expected {expected}, got {actual:?}"
        );
    }

    fn format_error(result: Result<Geometry>) -> FormatError {
        match result {
            Err(SdoError::Format(err)) => err,
            other => panic!("expected a format error, got {other:?}"),
        }
    }

    #[test]
    fn point() {
        assert_decodes(2001, &[1, 1, 1], &[50., 50.], "POINT (50 50)");
    }

    #[test]
    fn point_xyzm_with_dimension_limit() {
        let geom = read_with(Some(3), 4001, &[1, 1, 1], &[50., 50., 100., 200.]).unwrap();
        assert_eq!(
            geom,
            Geometry::Point(Point::new(Coord::new(50., 50.).with_z(100.)))
        );
        assert!(geom.equals_norm(&from_wkt("POINT (50 50)")));

        let geom = read_with(Some(2), 4001, &[1, 1, 1], &[50., 50., 100., 200.]).unwrap();
        assert_eq!(geom, Geometry::Point(Point::new(Coord::new(50., 50.))));
    }

    #[test]
    fn point_xyzm_full() {
        let geom = read(4001, &[1, 1, 1], &[50., 50., 100., 200.]).unwrap();
        assert_eq!(
            geom,
            Geometry::Point(Point::new(Coord::new(50., 50.).with_z(100.).with_m(200.)))
        );
    }

    #[test]
    fn inline_point() {
        let geom = SdoGeometry::from_point(3001, SdoPoint::new(50., 50., Some(100.)));
        let point = from_sdo(&geom).unwrap();
        assert_eq!(
            point,
            Geometry::Point(Point::new(Coord::new(50., 50.).with_z(100.)))
        );
        assert!(point.equals_norm(&from_wkt("POINT (50 50)")));

        let flat = SdoGeometry::from_point(2001, SdoPoint::new(1., 2., Some(3.)));
        assert_eq!(
            from_sdo(&flat).unwrap(),
            Geometry::Point(Point::new(Coord::new(1., 2.)))
        );
    }

    #[test]
    fn inline_point_requires_point_kind() {
        let geom = SdoGeometry::from_point(2002, SdoPoint::new(1., 2., None));
        assert!(matches!(
            format_error(from_sdo(&geom)),
            FormatError::ShapeCountMismatch {
                kind: SdoGeometryKind::Line,
                ..
            }
        ));
    }

    #[test]
    fn inline_point_ignored_next_to_elements() {
        let geom = SdoGeometry {
            gtype: 2001,
            point: Some(SdoPoint::new(9., 9., None)),
            elem_info: Some(&[1, 1, 1]),
            ordinates: Some(&[1., 2.]),
        };
        assert_eq!(
            from_sdo(&geom).unwrap(),
            Geometry::Point(Point::new(Coord::new(1., 2.)))
        );
    }

    #[test]
    fn multi_point() {
        assert_decodes(
            3005,
            &[1, 1, 2],
            &[50., 50., 5., 100., 200., 300.],
            "MULTIPOINT ((50 50), (100 200))",
        );
    }

    #[test]
    fn line_strings_in_every_layout() {
        assert_decodes(2002, &[1, 2, 1], &[0., 0., 50., 50.], "LINESTRING (0 0, 50 50)");
        assert_decodes(
            3002,
            &[1, 2, 1],
            &[0., 0., 0., 50., 50., 100.],
            "LINESTRING (0 0, 50 50)",
        );
        assert_decodes(
            3302,
            &[1, 2, 1],
            &[1., 1., 20., 2., 2., 30.],
            "LINESTRING (1 1, 2 2)",
        );
        assert_decodes(
            4302,
            &[1, 2, 1],
            &[0., 0., 2., 3., 50., 50., 100., 200.],
            "LINESTRING (0 0, 50 50)",
        );
    }

    #[test]
    fn measured_layouts_place_z_and_m() {
        let Geometry::LineString(line) = read(3302, &[1, 2, 1], &[1., 1., 20., 2., 2., 30.]).unwrap()
        else {
            panic!("expected a line string");
        };
        assert_eq!(line.coords()[1], Coord::new(2., 2.).with_m(30.));

        let Geometry::LineString(line) =
            read(4302, &[1, 2, 1], &[0., 0., 2., 3., 50., 50., 100., 200.]).unwrap()
        else {
            panic!("expected a line string");
        };
        assert_eq!(line.coords()[0], Coord::new(0., 0.).with_m(2.).with_z(3.));
    }

    #[test]
    fn multi_line_string_xymz() {
        assert_decodes(
            4306,
            &[1, 2, 1, 9, 2, 1],
            &[
                0., 0., 2., 3., 50., 50., 100., 200., 10., 10., 12., 13., 150., 150., 110., 210.,
            ],
            "MULTILINESTRING ((0 0, 50 50), (10 10, 150 150))",
        );
    }

    #[test]
    fn polygon() {
        assert_decodes(
            2003,
            &[1, 1003, 1],
            &[0., 0., 50., 0., 50., 50., 0., 50., 0., 0.],
            "POLYGON ((0 0, 50 0, 50 50, 0 50, 0 0))",
        );
    }

    #[test]
    fn rectangle() {
        let geom = read(2003, &[1, 1003, 3], &[0., 0., 50., 50.]).unwrap();
        assert!(geom.equals_norm(&from_wkt("POLYGON ((0 0, 50 0, 50 50, 0 50, 0 0))")));
        assert_eq!(geom.unsigned_area(), 2500.);
    }

    #[test]
    fn polygon_with_rectangle_hole() {
        assert_decodes(
            2003,
            &[1, 1003, 3, 5, 2003, 3],
            &[0., 0., 50., 50., 40., 40., 20., 20.],
            "POLYGON ((0 0, 50 0, 50 50, 0 50, 0 0), (40 40, 20 40, 20 20, 40 20, 40 40))",
        );
    }

    #[test]
    fn multi_polygon_of_rectangles() {
        assert_decodes(
            2007,
            &[1, 1003, 3, 5, 2003, 3, 9, 1003, 3],
            &[0., 0., 50., 50., 40., 40., 20., 20., 60., 0., 70., 10.],
            "MULTIPOLYGON (((0 0, 50 0, 50 50, 0 50, 0 0), (40 40, 20 40, 20 20, 40 20, 40 40)), ((60 0, 70 0, 70 10, 60 10, 60 0)))",
        );
    }

    #[test]
    fn heterogeneous_collection() {
        let geom = read(2004, &[1, 2, 1, 5, 1, 1], &[1., 1., 2., 2., 3., 3.]).unwrap();
        let expected = from_wkt("GEOMETRYCOLLECTION (LINESTRING (1 1, 2 2), POINT (3 3))");
        assert!(geom.equals_exact(&expected, 0.));
    }

    #[test]
    fn arc_line_string() {
        let geom = read(2002, &[1, 2, 2], &[0., 0., 1., 1., 2., 0.]).unwrap();
        let Geometry::CircularString(cs) = geom else {
            panic!("expected a circular string");
        };
        assert_eq!(cs.num_arcs(), 1);
    }

    #[test]
    fn multi_arc_line_string() {
        let geom = read(
            2006,
            &[1, 2, 2, 7, 2, 2],
            &[0., 0., 1., 1., 2., 0., 10., 0., 11., 1., 12., 0.],
        )
        .unwrap();
        let Geometry::MultiCircularString(mcs) = geom else {
            panic!("expected a multi circular string");
        };
        assert_eq!(mcs.num_curves(), 2);
        assert_eq!(mcs.reverse().reverse(), mcs);
    }

    #[test]
    fn circle_polygon() {
        let geom = read(2003, &[1, 1003, 4], &[0., -1., 1., 0., 0., 1.]).unwrap();
        let Geometry::Polygon(polygon) = geom else {
            panic!("expected a polygon");
        };
        let Curve::CircularString(ring) = polygon.exterior() else {
            panic!("expected a circular ring");
        };
        assert_eq!(ring.num_points(), 5);
        assert!(ring.is_closed());
        let d = ring.coords()[3];
        assert_relative_eq!(d.x, -1., epsilon = 1e-12);
        assert_relative_eq!(d.y, 0., epsilon = 1e-12);
    }

    #[test]
    fn compound_line() {
        let geom = read(
            2002,
            &[1, 4, 2, 1, 2, 1, 3, 2, 2],
            &[10., 10., 10., 14., 6., 10., 14., 10.],
        )
        .unwrap();
        assert_eq!(
            geom,
            Geometry::CompoundCurve(crate::test::compoundcurve::cc0())
        );
    }

    #[test]
    fn compound_polygon() {
        let geom = read(
            2003,
            &[1, 1005, 2, 1, 2, 1, 5, 2, 2],
            &[6., 10., 10., 10., 14., 10., 10., 6., 6., 10.],
        )
        .unwrap();
        let Geometry::Polygon(polygon) = geom else {
            panic!("expected a polygon");
        };
        assert!(matches!(polygon.exterior(), Curve::CompoundCurve(cc) if cc.num_segments() == 2));
    }

    #[test]
    fn empty_input() {
        let geom = SdoGeometry {
            gtype: 2003,
            point: None,
            elem_info: None,
            ordinates: None,
        };
        assert_eq!(
            from_sdo(&geom).unwrap(),
            Geometry::Polygon(Polygon::empty())
        );
        assert_eq!(
            format_error(read(2002, &[], &[0., 0.])),
            FormatError::TruncatedDescriptor {
                len: 0,
                expected: 3
            }
        );
    }

    #[test]
    fn reverse_and_normalize_laws() {
        let geom = read(
            2006,
            &[1, 2, 2, 7, 2, 2],
            &[0., 0., 1., 1., 2., 0., 12., 0., 11., 1., 10., 0.],
        )
        .unwrap();
        assert_eq!(geom.reverse().reverse(), geom);
        let norm = geom.normalize();
        assert_eq!(norm.normalize(), norm);
    }

    #[test]
    fn dimension_limit_out_of_range() {
        for limit in [0, 1, 5] {
            let err = read_with(Some(limit), 2001, &[1, 1, 1], &[0., 0.]).unwrap_err();
            assert!(matches!(err, SdoError::InvalidArgument(_)));
        }
    }

    #[test]
    fn error_kinds() {
        assert!(matches!(
            format_error(read(2009, &[1, 1, 1], &[0., 0.])),
            FormatError::BadTypeCode { gtype: 2009, .. }
        ));
        assert!(matches!(
            format_error(read(2002, &[1, 2], &[0., 0., 1., 1.])),
            FormatError::TruncatedDescriptor { .. }
        ));
        assert!(matches!(
            format_error(read(2002, &[7, 2, 1], &[0., 0., 1., 1.])),
            FormatError::DescriptorOffsetOutOfRange { index: 0, .. }
        ));
        assert!(matches!(
            format_error(read(2002, &[1, 2, 2], &[0., 0., 1., 1.])),
            FormatError::InvalidArcPointCount { count: 2, .. }
        ));
        assert!(matches!(
            format_error(read(2001, &[1, 1, 1, 3, 1, 1], &[0., 0., 1., 1.])),
            FormatError::ShapeCountMismatch {
                kind: SdoGeometryKind::Point,
                ..
            }
        ));
        assert!(matches!(
            format_error(read(2003, &[1, 1003, 1], &[0., 0., 1., 0., 1., 1., 0., 1.])),
            FormatError::UnclosedRing { index: 0 }
        ));
    }

    #[test]
    fn options_from_json() {
        let options: SdoReaderOptions = serde_json::from_str(r#"{"dimension_limit": 3}"#).unwrap();
        assert_eq!(options, SdoReaderOptions::default().with_dimension_limit(3));
        let options: SdoReaderOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.dimension_limit, None);
    }
}
