use std::iter::FusedIterator;

use crate::datatypes::CoordLayout;
use crate::error::{FormatError, Result};
use crate::io::sdo::{ElementType, SegmentInterpretation};

/// A half-open range of 0-based positions in the ordinate array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrdinateSpan {
    start: usize,
    end: usize,
}

impl OrdinateSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of ordinates in the span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Whether a ring bounds a polygon from the outside or is a hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingRole {
    Exterior,
    Interior,
}

/// What an element describes, from its element type and interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Element type 0, ignored by the reader.
    Unknown,
    /// Orientation vector of an oriented point, ignored by the reader.
    OrientedPoint,
    /// A point (`n == 1`) or a cluster of `n` points.
    Points(usize),
    Line(SegmentInterpretation),
    Ring(RingRole, SegmentInterpretation),
    /// A header followed by `parts` line descriptors; `role` is set for compound rings.
    Compound {
        role: Option<RingRole>,
        parts: usize,
    },
}

/// One resolved element descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    index: usize,
    offset: i32,
    etype: i32,
    interpretation: i32,
    kind: ElementKind,
    span: OrdinateSpan,
}

impl Element {
    /// 0-based position of the triplet in the element info array.
    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based ordinate offset, as stored.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn etype(&self) -> i32 {
        self.etype
    }

    pub fn interpretation(&self) -> i32 {
        self.interpretation
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn span(&self) -> OrdinateSpan {
        self.span
    }

    pub fn ring_role(&self) -> Option<RingRole> {
        match self.kind {
            ElementKind::Ring(role, _) => Some(role),
            ElementKind::Compound { role, .. } => role,
            _ => None,
        }
    }

    pub(crate) fn unsupported(&self) -> FormatError {
        FormatError::UnsupportedElement {
            index: self.index,
            etype: self.etype,
            interpretation: self.interpretation,
        }
    }
}

/// Descriptors covered by the compound header currently being walked.
#[derive(Debug, Clone, Copy)]
struct CompoundRun {
    first: usize,
    last: usize,
    end: usize,
}

/// A lazy, single pass iterator over the descriptors of an element info array.
///
/// Each descriptor is resolved into an [`Element`] with its ordinate span:
///
/// - a plain element runs to the start of the next descriptor, or to the end of the ordinates;
/// - a compound header with `P` parts runs to the start of the descriptor after its parts;
/// - the last part of a compound element ends where its header ends.
///
/// Offsets must increase from one descriptor to the next. The first part of a compound element
/// is the only descriptor allowed to repeat the offset of its predecessor (the header). The
/// iterator stops after the first error.
///
/// A walker cannot be copied to restart a walk halfway:
///
/// ```compile_fail
/// use sdo_geometry::io::sdo::{ElementWalker, SdoTypeCode};
///
/// let layout = SdoTypeCode::resolve(2002).unwrap().layout();
/// let mut walker = ElementWalker::try_new(&[1, 2, 1, 5, 2, 1], 8, layout).unwrap();
/// walker.next();
/// let _restart = walker.clone();
/// ```
#[derive(Debug)]
pub struct ElementWalker<'a> {
    elem_info: &'a [i32],
    num_ordinates: usize,
    layout: CoordLayout,
    index: usize,
    compound: Option<CompoundRun>,
    failed: bool,
}

impl<'a> ElementWalker<'a> {
    pub fn try_new(elem_info: &'a [i32], num_ordinates: usize, layout: CoordLayout) -> Result<Self> {
        if elem_info.len() % 3 != 0 {
            return Err(FormatError::TruncatedDescriptor {
                len: elem_info.len(),
                expected: elem_info.len().next_multiple_of(3),
            }
            .into());
        }
        if num_ordinates % layout.stride() != 0 {
            return Err(FormatError::DescriptorOffsetOutOfRange {
                index: 0,
                offset: elem_info.first().copied().unwrap_or(1),
                reason: "ordinate array length is not a multiple of the coordinate size",
            }
            .into());
        }
        Ok(Self {
            elem_info,
            num_ordinates,
            layout,
            index: 0,
            compound: None,
            failed: false,
        })
    }

    pub fn num_descriptors(&self) -> usize {
        self.elem_info.len() / 3
    }

    fn triplet(&self, index: usize) -> (i32, i32, i32) {
        let i = index * 3;
        (self.elem_info[i], self.elem_info[i + 1], self.elem_info[i + 2])
    }

    /// 0-based ordinate position of descriptor `index`.
    fn ordinate_start(&self, index: usize) -> Result<usize> {
        let offset = self.triplet(index).0;
        let out_of_range = |reason| FormatError::DescriptorOffsetOutOfRange {
            index,
            offset,
            reason,
        };
        if offset < 1 {
            return Err(out_of_range("offsets start at 1").into());
        }
        let start = (offset - 1) as usize;
        if start % self.layout.stride() != 0 {
            return Err(out_of_range("offset is not at the start of a coordinate").into());
        }
        if start >= self.num_ordinates {
            return Err(out_of_range("offset is past the end of the ordinate array").into());
        }
        Ok(start)
    }

    /// End of a span that stops at descriptor `next`, or at the end of the ordinates.
    fn span_end(&self, start: usize, next: usize) -> Result<usize> {
        if next >= self.num_descriptors() {
            return Ok(self.num_ordinates);
        }
        let end = self.ordinate_start(next)?;
        if end <= start {
            return Err(FormatError::DescriptorOffsetOutOfRange {
                index: next,
                offset: self.triplet(next).0,
                reason: "offsets must increase",
            }
            .into());
        }
        Ok(end)
    }

    fn resolve_kind(&self, index: usize, etype: i32, interpretation: i32) -> Result<ElementKind> {
        let unsupported = || FormatError::UnsupportedElement {
            index,
            etype,
            interpretation,
        };
        let element_type = ElementType::try_from(etype).map_err(|_| unsupported())?;
        let segments = || SegmentInterpretation::try_from(interpretation).map_err(|_| unsupported());

        let kind = match element_type {
            ElementType::Unknown => ElementKind::Unknown,
            ElementType::Point => match interpretation {
                0 => ElementKind::OrientedPoint,
                n if n > 0 => ElementKind::Points(n as usize),
                _ => return Err(unsupported().into()),
            },
            ElementType::Line => match segments()? {
                s @ (SegmentInterpretation::Straight | SegmentInterpretation::Arcs) => {
                    ElementKind::Line(s)
                }
                _ => return Err(unsupported().into()),
            },
            ElementType::ExteriorRing => ElementKind::Ring(RingRole::Exterior, segments()?),
            ElementType::InteriorRing => ElementKind::Ring(RingRole::Interior, segments()?),
            ElementType::CompoundLine
            | ElementType::CompoundExteriorRing
            | ElementType::CompoundInteriorRing => {
                if interpretation < 1 || self.compound.is_some() {
                    return Err(unsupported().into());
                }
                let role = match element_type {
                    ElementType::CompoundExteriorRing => Some(RingRole::Exterior),
                    ElementType::CompoundInteriorRing => Some(RingRole::Interior),
                    _ => None,
                };
                ElementKind::Compound {
                    role,
                    parts: interpretation as usize,
                }
            }
        };
        Ok(kind)
    }

    fn next_element(&mut self) -> Result<Element> {
        let index = self.index;
        let (offset, etype, interpretation) = self.triplet(index);
        let start = self.ordinate_start(index)?;

        if index > 0 {
            let previous = self.triplet(index - 1).0;
            let first_part = self.compound.is_some_and(|run| run.first == index);
            if offset < previous || (offset == previous && !first_part) {
                return Err(FormatError::DescriptorOffsetOutOfRange {
                    index,
                    offset,
                    reason: "offsets must increase",
                }
                .into());
            }
        }

        let kind = self.resolve_kind(index, etype, interpretation)?;

        let end = match (kind, self.compound) {
            (ElementKind::Compound { parts, .. }, _) => {
                let after = index + parts + 1;
                if after > self.num_descriptors() {
                    return Err(FormatError::TruncatedDescriptor {
                        len: self.elem_info.len(),
                        expected: after * 3,
                    }
                    .into());
                }
                let end = self.span_end(start, after)?;
                self.compound = Some(CompoundRun {
                    first: index + 1,
                    last: index + parts,
                    end,
                });
                end
            }
            (_, Some(run)) if run.last == index => {
                self.compound = None;
                run.end
            }
            _ => self.span_end(start, index + 1)?,
        };

        self.index += 1;
        Ok(Element {
            index,
            offset,
            etype,
            interpretation,
            kind,
            span: OrdinateSpan::new(start, end),
        })
    }
}

impl Iterator for ElementWalker<'_> {
    type Item = Result<Element>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.index >= self.num_descriptors() {
            return None;
        }
        let result = self.next_element();
        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }
}

impl FusedIterator for ElementWalker<'_> {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::SdoError;

    fn xy() -> CoordLayout {
        CoordLayout::new(2, None, None)
    }

    fn walk(elem_info: &[i32], num_ordinates: usize) -> Result<Vec<Element>> {
        ElementWalker::try_new(elem_info, num_ordinates, xy())?.collect()
    }

    fn spans(elements: &[Element]) -> Vec<(usize, usize)> {
        elements
            .iter()
            .map(|e| (e.span().start(), e.span().end()))
            .collect()
    }

    #[test]
    fn plain_spans() {
        let elements = walk(&[1, 1003, 3, 5, 2003, 3, 9, 1003, 3], 12).unwrap();
        assert_eq!(spans(&elements), vec![(0, 4), (4, 8), (8, 12)]);
        assert_eq!(
            elements[1].kind(),
            ElementKind::Ring(RingRole::Interior, SegmentInterpretation::Rectangle)
        );
        assert_eq!(elements[2].ring_role(), Some(RingRole::Exterior));
    }

    #[test]
    fn compound_spans() {
        // compound line of a straight part and an arc part, then a point
        let elements = walk(&[1, 4, 2, 1, 2, 1, 3, 2, 2, 9, 1, 1], 10).unwrap();
        assert_eq!(spans(&elements), vec![(0, 8), (0, 2), (2, 8), (8, 10)]);
        assert_eq!(
            elements[0].kind(),
            ElementKind::Compound {
                role: None,
                parts: 2
            }
        );
    }

    #[test]
    fn compound_ring_role() {
        let elements = walk(&[1, 1005, 2, 1, 2, 1, 5, 2, 2], 12).unwrap();
        assert_eq!(elements[0].ring_role(), Some(RingRole::Exterior));
        assert_eq!(spans(&elements), vec![(0, 12), (0, 4), (4, 12)]);
    }

    #[test]
    fn truncated() {
        assert!(matches!(
            walk(&[1, 2], 4),
            Err(SdoError::Format(FormatError::TruncatedDescriptor { len: 2, expected: 3 }))
        ));
        assert!(matches!(
            walk(&[1, 4, 3, 1, 2, 1, 3, 2, 2], 10),
            Err(SdoError::Format(FormatError::TruncatedDescriptor { len: 9, expected: 12 }))
        ));
    }

    #[test]
    fn offsets_must_increase() {
        let err = walk(&[5, 2, 1, 1, 2, 1], 8).unwrap_err();
        assert!(matches!(
            err,
            SdoError::Format(FormatError::DescriptorOffsetOutOfRange { .. })
        ));
        let err = walk(&[1, 2, 1, 1, 2, 1], 8).unwrap_err();
        assert!(matches!(
            err,
            SdoError::Format(FormatError::DescriptorOffsetOutOfRange { index: 1, .. })
        ));
    }

    #[test]
    fn offset_out_of_range() {
        for elem_info in [[0, 1, 1], [2, 1, 1], [9, 1, 1]] {
            let err = walk(&elem_info, 4).unwrap_err();
            assert!(
                matches!(
                    err,
                    SdoError::Format(FormatError::DescriptorOffsetOutOfRange { index: 0, .. })
                ),
                "{elem_info:?}"
            );
        }
        assert!(walk(&[1, 1, 1], 3).is_err());
    }

    #[test]
    fn unsupported_pairs() {
        for elem_info in [[1, 3, 1], [1, 2, 3], [1, 1003, 5], [1, 1, -1], [1, 4, 0]] {
            let err = walk(&elem_info, 4).unwrap_err();
            assert!(
                matches!(
                    err,
                    SdoError::Format(FormatError::UnsupportedElement { index: 0, .. })
                ),
                "{elem_info:?}"
            );
        }
    }

    #[test]
    fn fused_after_error() {
        let mut walker = ElementWalker::try_new(&[1, 2, 1, 5, 3, 1, 7, 2, 1], 8, xy()).unwrap();
        assert!(walker.next().unwrap().is_ok());
        assert!(walker.next().unwrap().is_err());
        assert!(walker.next().is_none());
    }

    #[test]
    fn skipped_kinds_resolve() {
        let elements = walk(&[1, 1, 1, 3, 1, 0, 5, 0, 7], 6).unwrap();
        assert_eq!(elements[0].kind(), ElementKind::Points(1));
        assert_eq!(elements[1].kind(), ElementKind::OrientedPoint);
        assert_eq!(elements[2].kind(), ElementKind::Unknown);
    }
}
