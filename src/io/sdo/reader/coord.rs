use crate::datatypes::CoordLayout;
use crate::error::{FormatError, Result};
use crate::io::sdo::{apply_dimension_limit, Element};
use crate::scalar::Coord;

/// Reads coordinates out of the flat ordinate array.
///
/// Every coordinate is truncated to the reader's dimension limit.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OrdinateReader<'a> {
    ordinates: &'a [f64],
    layout: CoordLayout,
    max_dim: usize,
}

impl<'a> OrdinateReader<'a> {
    pub(crate) fn new(ordinates: &'a [f64], layout: CoordLayout, max_dim: usize) -> Self {
        Self {
            ordinates,
            layout,
            max_dim,
        }
    }

    fn coord(&self, ordinates: &[f64]) -> Coord {
        let mut coord = Coord::new(ordinates[0], ordinates[1]);
        coord.z = self.layout.z_index().map(|i| ordinates[i]);
        coord.m = self.layout.m_index().map(|i| ordinates[i]);
        apply_dimension_limit(&coord, self.max_dim)
    }

    /// All coordinates of the element's span.
    pub(crate) fn read_span(&self, element: &Element) -> Result<Vec<Coord>> {
        let span = element.span();
        let ordinates = self
            .ordinates
            .get(span.start()..span.end())
            .ok_or_else(|| out_of_range(element))?;
        Ok(ordinates
            .chunks_exact(self.layout.stride())
            .map(|chunk| self.coord(chunk))
            .collect())
    }

    /// The first coordinate of the element's span.
    pub(crate) fn read_first(&self, element: &Element) -> Result<Coord> {
        let start = element.span().start();
        let ordinates = self
            .ordinates
            .get(start..start + self.layout.stride())
            .ok_or_else(|| out_of_range(element))?;
        Ok(self.coord(ordinates))
    }
}

fn out_of_range(element: &Element) -> FormatError {
    FormatError::DescriptorOffsetOutOfRange {
        index: element.index(),
        offset: element.offset(),
        reason: "element reads past the end of the ordinate array",
    }
}
