use itertools::Itertools;

use crate::error::{Result, SdoError};
use crate::scalar::{CircularString, Coord, LineString};

/// One segment of a [`CompoundCurve`].
#[derive(Debug, Clone, PartialEq)]
pub enum CurveSegment {
    LineString(LineString),
    CircularString(CircularString),
}

impl CurveSegment {
    pub fn coords(&self) -> &[Coord] {
        match self {
            CurveSegment::LineString(g) => g.coords(),
            CurveSegment::CircularString(g) => g.coords(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.coords().is_empty()
    }

    pub fn start(&self) -> Option<&Coord> {
        self.coords().first()
    }

    pub fn end(&self) -> Option<&Coord> {
        self.coords().last()
    }
}

/// A curve made of straight and circular segments joined end to end.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundCurve {
    segments: Vec<CurveSegment>,
}

impl CompoundCurve {
    /// Construct a compound curve from its segments.
    ///
    /// Every segment must be non-empty and must start where the previous one ends.
    pub fn try_new(segments: Vec<CurveSegment>) -> Result<Self> {
        if let Some(i) = segments.iter().position(|s| s.is_empty()) {
            return Err(SdoError::InvalidArgument(format!(
                "CompoundCurve segment {i} is empty"
            )));
        }
        if let Some(i) = first_discontinuity(&segments) {
            return Err(SdoError::InvalidArgument(format!(
                "CompoundCurve segment {i} does not start at the end of segment {}",
                i - 1
            )));
        }
        Ok(Self { segments })
    }

    pub(crate) fn new_unchecked(segments: Vec<CurveSegment>) -> Self {
        debug_assert!(first_discontinuity(&segments).is_none());
        Self { segments }
    }

    pub fn empty() -> Self {
        Self { segments: vec![] }
    }

    pub fn segments(&self) -> &[CurveSegment] {
        &self.segments
    }

    pub fn num_segments(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// All vertices, with each shared vertex between two segments listed once.
    pub fn coords(&self) -> Vec<Coord> {
        let mut out: Vec<Coord> = Vec::new();
        for (i, segment) in self.segments.iter().enumerate() {
            let skip = usize::from(i > 0);
            out.extend(segment.coords().iter().skip(skip).copied());
        }
        out
    }

    pub fn start(&self) -> Option<&Coord> {
        self.segments.first().and_then(|s| s.start())
    }

    pub fn end(&self) -> Option<&Coord> {
        self.segments.last().and_then(|s| s.end())
    }

    pub fn is_closed(&self) -> bool {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => start.equals_2d(end),
            _ => false,
        }
    }
}

/// Index of the first segment that does not start at the end of its predecessor.
pub(crate) fn first_discontinuity(segments: &[CurveSegment]) -> Option<usize> {
    segments
        .iter()
        .tuple_windows()
        .position(|(a, b)| match (a.end(), b.start()) {
            (Some(end), Some(start)) => !end.equals_2d(start),
            _ => true,
        })
        .map(|i| i + 1)
}

/// Any one-dimensional geometry: the type of polygon rings and decoded lines.
#[derive(Debug, Clone, PartialEq)]
pub enum Curve {
    LineString(LineString),
    CircularString(CircularString),
    CompoundCurve(CompoundCurve),
}

impl Curve {
    pub fn coords(&self) -> Vec<Coord> {
        match self {
            Curve::LineString(g) => g.coords().to_vec(),
            Curve::CircularString(g) => g.coords().to_vec(),
            Curve::CompoundCurve(g) => g.coords(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Curve::LineString(g) => g.is_empty(),
            Curve::CircularString(g) => g.is_empty(),
            Curve::CompoundCurve(g) => g.is_empty(),
        }
    }

    pub fn is_closed(&self) -> bool {
        match self {
            Curve::LineString(g) => g.is_closed(),
            Curve::CircularString(g) => g.is_closed(),
            Curve::CompoundCurve(g) => g.is_closed(),
        }
    }
}

impl Default for Curve {
    fn default() -> Self {
        Curve::LineString(LineString::default())
    }
}

impl From<LineString> for Curve {
    fn from(value: LineString) -> Self {
        Curve::LineString(value)
    }
}

impl From<CircularString> for Curve {
    fn from(value: CircularString) -> Self {
        Curve::CircularString(value)
    }
}

impl From<CompoundCurve> for Curve {
    fn from(value: CompoundCurve) -> Self {
        Curve::CompoundCurve(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::compoundcurve::cc0;

    #[test]
    fn shared_vertices_listed_once() {
        let cc = cc0();
        assert_eq!(cc.num_segments(), 2);
        assert_eq!(
            cc.coords(),
            vec![
                Coord::new(10., 10.),
                Coord::new(10., 14.),
                Coord::new(6., 10.),
                Coord::new(14., 10.),
            ]
        );
        assert!(!cc.is_closed());
    }

    #[test]
    fn rejects_gap_between_segments() {
        let a = CurveSegment::LineString(LineString::new(vec![
            Coord::new(0., 0.),
            Coord::new(1., 0.),
        ]));
        let b = CurveSegment::LineString(LineString::new(vec![
            Coord::new(2., 0.),
            Coord::new(3., 0.),
        ]));
        assert_eq!(first_discontinuity(&[a.clone(), b.clone()]), Some(1));
        assert!(matches!(
            CompoundCurve::try_new(vec![a, b]),
            Err(SdoError::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_empty_segment() {
        let empty = CurveSegment::CircularString(CircularString::empty());
        assert!(CompoundCurve::try_new(vec![empty]).is_err());
    }
}
