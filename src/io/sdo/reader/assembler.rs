use std::f64::consts::TAU;

use tracing::{debug, trace};

use crate::error::{FormatError, Result};
use crate::io::sdo::reader::{OrdinateReader, Shape};
use crate::io::sdo::{Element, ElementKind, SegmentInterpretation};
use crate::scalar::*;

/// Materializes the shape of every element.
///
/// Shorthand rings (rectangles and circles) are expanded, compound elements are linked from
/// their parts, and skipped elements (element type 0 and oriented point vectors) produce no
/// shape.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ShapeAssembler<'a> {
    reader: OrdinateReader<'a>,
}

impl<'a> ShapeAssembler<'a> {
    pub(crate) fn new(reader: OrdinateReader<'a>) -> Self {
        Self { reader }
    }

    pub(crate) fn assemble(
        &self,
        mut elements: impl Iterator<Item = Result<Element>>,
    ) -> Result<Vec<Shape>> {
        let mut shapes = Vec::new();
        while let Some(element) = elements.next() {
            let element = element?;
            let shape = match element.kind() {
                ElementKind::Unknown => {
                    debug!(index = element.index(), "skipping element of unknown type");
                    continue;
                }
                ElementKind::OrientedPoint => {
                    debug!(index = element.index(), "skipping oriented point vector");
                    continue;
                }
                ElementKind::Points(n) => self.points(&element, n)?,
                ElementKind::Line(interpretation) => {
                    Shape::Line(self.line(&element, interpretation)?)
                }
                ElementKind::Ring(role, interpretation) => Shape::Ring {
                    role,
                    ring: self.ring(&element, interpretation)?,
                    index: element.index(),
                },
                ElementKind::Compound { role, parts } => {
                    let parts = elements.by_ref().take(parts).collect::<Result<Vec<_>>>()?;
                    let curve = self.compound(&element, &parts, role.is_some())?;
                    match role {
                        Some(role) => Shape::Ring {
                            role,
                            ring: Curve::CompoundCurve(curve),
                            index: element.index(),
                        },
                        None => Shape::Line(Curve::CompoundCurve(curve)),
                    }
                }
            };
            trace!(
                index = element.index(),
                etype = element.etype(),
                interpretation = element.interpretation(),
                "assembled element"
            );
            shapes.push(shape);
        }
        Ok(shapes)
    }

    fn points(&self, element: &Element, n: usize) -> Result<Shape> {
        let coords = self.reader.read_span(element)?;
        if coords.len() != n {
            return Err(FormatError::ElementPointCount {
                index: element.index(),
                expected: n,
                found: coords.len(),
            }
            .into());
        }
        match coords.as_slice() {
            [coord] => Ok(Shape::Point(*coord)),
            _ => Ok(Shape::Cluster(coords)),
        }
    }

    fn line(&self, element: &Element, interpretation: SegmentInterpretation) -> Result<Curve> {
        let coords = self.reader.read_span(element)?;
        segment_curve(element, interpretation, coords)
    }

    fn ring(&self, element: &Element, interpretation: SegmentInterpretation) -> Result<Curve> {
        let coords = self.reader.read_span(element)?;
        let ring = match interpretation {
            SegmentInterpretation::Straight => {
                min_coords(element, &coords, 4)?;
                segment_curve(element, interpretation, coords)?
            }
            SegmentInterpretation::Arcs => segment_curve(element, interpretation, coords)?,
            SegmentInterpretation::Rectangle => {
                let [lower, upper] = exact_coords::<2>(element, coords)?;
                Curve::LineString(expand_rectangle(&lower, &upper))
            }
            SegmentInterpretation::Circle => {
                let [a, b, c] = exact_coords::<3>(element, coords)?;
                Curve::CircularString(expand_circle(element, &a, &b, &c)?)
            }
        };
        if !ring.is_closed() {
            return Err(FormatError::UnclosedRing {
                index: element.index(),
            }
            .into());
        }
        Ok(ring)
    }

    /// Link the parts of a compound element.
    ///
    /// The vertex shared by two consecutive parts is stored once, as the first coordinate of the
    /// later part, so every part but the last also takes the first coordinate of its successor.
    fn compound(&self, header: &Element, parts: &[Element], is_ring: bool) -> Result<CompoundCurve> {
        let discontinuity = |element: &Element| FormatError::CompoundPartDiscontinuity {
            index: element.index(),
        };

        if let Some(first) = parts.first() {
            if first.span().start() != header.span().start() {
                return Err(discontinuity(first).into());
            }
        }

        let mut segments = Vec::with_capacity(parts.len());
        for (i, part) in parts.iter().enumerate() {
            let interpretation = match part.kind() {
                ElementKind::Line(interpretation) => interpretation,
                _ => return Err(part.unsupported().into()),
            };
            let mut coords = self.reader.read_span(part)?;
            if let Some(next) = parts.get(i + 1) {
                coords.push(self.reader.read_first(next)?);
            }
            let segment = match segment_curve(part, interpretation, coords)? {
                Curve::LineString(g) => CurveSegment::LineString(g),
                Curve::CircularString(g) => CurveSegment::CircularString(g),
                Curve::CompoundCurve(_) => return Err(part.unsupported().into()),
            };
            segments.push(segment);
        }

        // Linking makes parts meet exactly unless the shared vertex is NaN.
        if let Some(i) = first_discontinuity(&segments) {
            return Err(discontinuity(&parts[i]).into());
        }
        let curve = CompoundCurve::try_new(segments)?;
        if is_ring && !curve.is_closed() {
            return Err(discontinuity(header).into());
        }
        Ok(curve)
    }
}

/// A straight or circular curve through `coords`.
fn segment_curve(
    element: &Element,
    interpretation: SegmentInterpretation,
    coords: Vec<Coord>,
) -> Result<Curve> {
    match interpretation {
        SegmentInterpretation::Straight => {
            min_coords(element, &coords, 2)?;
            Ok(Curve::LineString(LineString::new(coords)))
        }
        SegmentInterpretation::Arcs => {
            if !is_valid_arc_point_count(coords.len()) || coords.is_empty() {
                return Err(FormatError::InvalidArcPointCount {
                    index: element.index(),
                    count: coords.len(),
                }
                .into());
            }
            Ok(Curve::CircularString(CircularString::try_new(coords)?))
        }
        SegmentInterpretation::Rectangle | SegmentInterpretation::Circle => {
            Err(element.unsupported().into())
        }
    }
}

fn min_coords(element: &Element, coords: &[Coord], min: usize) -> Result<()> {
    if coords.len() < min {
        return Err(FormatError::ElementPointCount {
            index: element.index(),
            expected: min,
            found: coords.len(),
        }
        .into());
    }
    Ok(())
}

fn exact_coords<const N: usize>(element: &Element, coords: Vec<Coord>) -> Result<[Coord; N]> {
    let found = coords.len();
    coords.try_into().map_err(|_| {
        FormatError::ElementPointCount {
            index: element.index(),
            expected: N,
            found,
        }
        .into()
    })
}

/// The closed ring `(x1 y1, x2 y1, x2 y2, x1 y2, x1 y1)` of an axis-aligned rectangle given by
/// two opposite corners. Synthesized corners take `z` and `m` from the first corner.
fn expand_rectangle(first: &Coord, second: &Coord) -> LineString {
    let corner = |x, y| Coord { x, y, ..*first };
    LineString::new(vec![
        *first,
        corner(second.x, first.y),
        *second,
        corner(first.x, second.y),
        *first,
    ])
}

/// The closed circular string `A, B, C, D, A` through three points on a circle.
///
/// The first arc runs through `A, B, C`. `D` is the midpoint of the arc from `C` back to `A`
/// that continues in the same direction, which keeps two whole arcs.
fn expand_circle(element: &Element, a: &Coord, b: &Coord, c: &Coord) -> Result<CircularString> {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d == 0.0 {
        return Err(FormatError::DegenerateCircle {
            index: element.index(),
        }
        .into());
    }

    let sq = |p: &Coord| p.x * p.x + p.y * p.y;
    let center_x = (sq(a) * (b.y - c.y) + sq(b) * (c.y - a.y) + sq(c) * (a.y - b.y)) / d;
    let center_y = (sq(a) * (c.x - b.x) + sq(b) * (a.x - c.x) + sq(c) * (b.x - a.x)) / d;
    let radius = (a.x - center_x).hypot(a.y - center_y);

    let theta_a = (a.y - center_y).atan2(a.x - center_x);
    let theta_c = (c.y - center_y).atan2(c.x - center_x);
    let cross = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
    let theta_d = if cross > 0.0 {
        theta_c + (theta_a - theta_c).rem_euclid(TAU) / 2.0
    } else {
        theta_c - (theta_c - theta_a).rem_euclid(TAU) / 2.0
    };

    let closing_mid = Coord {
        x: center_x + radius * theta_d.cos(),
        y: center_y + radius * theta_d.sin(),
        ..*a
    };
    CircularString::try_new(vec![*a, *b, *c, closing_mid, *a])
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;
    use crate::datatypes::CoordLayout;
    use crate::error::SdoError;
    use crate::io::sdo::{ElementWalker, RingRole};

    fn assemble(elem_info: &[i32], ordinates: &[f64]) -> Result<Vec<Shape>> {
        let layout = CoordLayout::new(2, None, None);
        let walker = ElementWalker::try_new(elem_info, ordinates.len(), layout)?;
        ShapeAssembler::new(OrdinateReader::new(ordinates, layout, 2)).assemble(walker)
    }

    fn format_error(result: Result<Vec<Shape>>) -> FormatError {
        match result {
            Err(SdoError::Format(err)) => err,
            other => panic!("expected a format error, got {other:?}"),
        }
    }

    #[test]
    fn rectangle_corner_order() {
        let shapes = assemble(&[1, 1003, 3], &[40., 40., 20., 20.]).unwrap();
        let Shape::Ring { role, ring, .. } = &shapes[0] else {
            panic!("expected a ring");
        };
        assert_eq!(*role, RingRole::Exterior);
        let xy: Vec<_> = ring.coords().iter().map(Coord::x_y).collect();
        assert_eq!(
            xy,
            vec![(40., 40.), (20., 40.), (20., 20.), (40., 20.), (40., 40.)]
        );
    }

    #[test]
    fn rectangle_keeps_first_corner_z() {
        let first = Coord::new(0., 0.).with_z(7.);
        let second = Coord::new(2., 1.).with_z(9.);
        let ring = expand_rectangle(&first, &second);
        assert_eq!(ring.coords()[1], Coord::new(2., 0.).with_z(7.));
        assert_eq!(ring.coords()[2], second);
        assert_eq!(ring.coords()[3], Coord::new(0., 1.).with_z(7.));
    }

    #[test]
    fn circle_expands_to_two_arcs() {
        let shapes = assemble(&[1, 1003, 4], &[1., 0., 0., 1., -1., 0.]).unwrap();
        let Shape::Ring {
            ring: Curve::CircularString(cs),
            ..
        } = &shapes[0]
        else {
            panic!("expected a circular ring");
        };
        assert_eq!(cs.num_points(), 5);
        assert!(cs.is_closed());
        let d = cs.coords()[3];
        assert_relative_eq!(d.x, 0., epsilon = 1e-12);
        assert_relative_eq!(d.y, -1., epsilon = 1e-12);
    }

    #[test]
    fn clockwise_circle() {
        let shapes = assemble(&[1, 1003, 4], &[-1., 0., 0., 1., 1., 0.]).unwrap();
        let Shape::Ring { ring, .. } = &shapes[0] else {
            panic!("expected a ring");
        };
        let d = ring.coords()[3];
        assert_relative_eq!(d.x, 0., epsilon = 1e-12);
        assert_relative_eq!(d.y, -1., epsilon = 1e-12);
    }

    #[test]
    fn degenerate_circle() {
        let err = format_error(assemble(&[1, 1003, 4], &[0., 0., 1., 1., 2., 2.]));
        assert_eq!(err, FormatError::DegenerateCircle { index: 0 });
    }

    #[test]
    fn compound_line_shares_vertices() {
        let shapes = assemble(
            &[1, 4, 2, 1, 2, 1, 3, 2, 2],
            &[10., 10., 10., 14., 6., 10., 14., 10.],
        )
        .unwrap();
        let Shape::Line(Curve::CompoundCurve(cc)) = &shapes[0] else {
            panic!("expected a compound line");
        };
        assert_eq!(cc, &crate::test::compoundcurve::cc0());
    }

    #[test]
    fn compound_ring_must_close() {
        let open = assemble(
            &[1, 1005, 2, 1, 2, 1, 3, 2, 2],
            &[10., 10., 10., 14., 6., 10., 14., 10.],
        );
        assert_eq!(
            format_error(open),
            FormatError::CompoundPartDiscontinuity { index: 0 }
        );

        let closed = assemble(
            &[1, 1005, 2, 1, 2, 1, 5, 2, 2],
            &[6., 10., 10., 10., 14., 10., 10., 6., 6., 10.],
        )
        .unwrap();
        assert!(matches!(
            &closed[0],
            Shape::Ring {
                role: RingRole::Exterior,
                ring: Curve::CompoundCurve(_),
                ..
            }
        ));
    }

    #[test]
    fn compound_first_part_at_header() {
        let err = format_error(assemble(
            &[1, 4, 2, 3, 2, 1, 5, 2, 1],
            &[0., 0., 1., 1., 2., 2., 3., 3.],
        ));
        assert_eq!(err, FormatError::CompoundPartDiscontinuity { index: 1 });
    }

    #[test]
    fn compound_part_must_be_line() {
        let err = format_error(assemble(&[1, 4, 1, 1, 1, 1], &[0., 0.]));
        assert!(matches!(err, FormatError::UnsupportedElement { index: 1, .. }));
    }

    #[test]
    fn arc_point_count() {
        let err = format_error(assemble(&[1, 2, 2], &[0., 0., 1., 1., 2., 0., 3., 1.]));
        assert_eq!(err, FormatError::InvalidArcPointCount { index: 0, count: 4 });
    }

    #[test]
    fn point_counts() {
        let err = format_error(assemble(&[1, 1, 3], &[0., 0., 1., 1.]));
        assert_eq!(
            err,
            FormatError::ElementPointCount {
                index: 0,
                expected: 3,
                found: 2
            }
        );
        let err = format_error(assemble(&[1, 1003, 3], &[0., 0., 1., 1., 2., 2.]));
        assert!(matches!(err, FormatError::ElementPointCount { expected: 2, .. }));
    }

    #[test]
    fn unclosed_ring() {
        let err = format_error(assemble(&[1, 1003, 1], &[0., 0., 1., 0., 1., 1., 0., 1.]));
        assert_eq!(err, FormatError::UnclosedRing { index: 0 });
    }

    #[test]
    fn collapsed_rings() {
        let collapsed: [&[f64]; 3] = [&[5., 5.], &[5., 5., 5., 5.], &[0., 0., 1., 0., 0., 0.]];
        for ordinates in collapsed {
            let err = format_error(assemble(&[1, 1003, 1], ordinates));
            assert_eq!(
                err,
                FormatError::ElementPointCount {
                    index: 0,
                    expected: 4,
                    found: ordinates.len() / 2
                }
            );
        }
    }

    #[test]
    fn single_vertex_line() {
        let err = format_error(assemble(&[1, 2, 1], &[5., 5.]));
        assert_eq!(
            err,
            FormatError::ElementPointCount {
                index: 0,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn single_vertex_compound_part() {
        // The last part gets no shared vertex appended, so one coordinate is too few.
        let err = format_error(assemble(
            &[1, 4, 2, 1, 2, 1, 5, 2, 1],
            &[0., 0., 1., 1., 2., 2.],
        ));
        assert_eq!(
            err,
            FormatError::ElementPointCount {
                index: 2,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn compound_nan_vertex_is_disconnected() {
        let err = format_error(assemble(
            &[1, 4, 2, 1, 2, 1, 3, 2, 1],
            &[0., 0., f64::NAN, f64::NAN, 1., 1.],
        ));
        assert_eq!(err, FormatError::CompoundPartDiscontinuity { index: 2 });
    }

    #[test]
    fn skipped_elements() {
        let shapes = assemble(&[1, 1, 1, 3, 1, 0, 5, 0, 1], &[1., 2., 0., 1., 9., 9.]).unwrap();
        assert_eq!(shapes, vec![Shape::Point(Coord::new(1., 2.))]);
    }
}
