use crate::scalar::{CircularString, CompoundCurve, Coord, CurveSegment, LineString};

/// A straight segment going north, then a half circle from (10, 14) through (6, 10) to (14, 10).
pub(crate) fn cc0() -> CompoundCurve {
    CompoundCurve::try_new(vec![
        CurveSegment::LineString(LineString::new(vec![
            Coord::new(10., 10.),
            Coord::new(10., 14.),
        ])),
        CurveSegment::CircularString(
            CircularString::try_new(vec![
                Coord::new(10., 14.),
                Coord::new(6., 10.),
                Coord::new(14., 10.),
            ])
            .unwrap(),
        ),
    ])
    .unwrap()
}
