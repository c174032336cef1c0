//! Coordinate dimension and ordinate layout definitions.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The dimension of a decoded coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Two-dimensional.
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Dimension {
    pub(crate) fn from_flags(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Dimension::XY,
            (true, false) => Dimension::XYZ,
            (false, true) => Dimension::XYM,
            (true, true) => Dimension::XYZM,
        }
    }

    /// Returns the number of dimensions.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
            Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    pub fn has_z(&self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    pub fn has_m(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::XY => write!(f, "XY"),
            Dimension::XYZ => write!(f, "XYZ"),
            Dimension::XYM => write!(f, "XYM"),
            Dimension::XYZM => write!(f, "XYZM"),
        }
    }
}

/// Where each ordinate of one coordinate sits inside the flat ordinate array.
///
/// `x` and `y` are always the first two ordinates of a stride.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordLayout {
    stride: usize,
    z_index: Option<usize>,
    m_index: Option<usize>,
}

impl CoordLayout {
    pub(crate) fn new(stride: usize, z_index: Option<usize>, m_index: Option<usize>) -> Self {
        Self {
            stride,
            z_index,
            m_index,
        }
    }

    /// Number of ordinates per coordinate.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Position of the z ordinate within a stride, if any.
    pub fn z_index(&self) -> Option<usize> {
        self.z_index
    }

    /// Position of the measure ordinate within a stride, if any.
    pub fn m_index(&self) -> Option<usize> {
        self.m_index
    }

    pub fn dimension(&self) -> Dimension {
        Dimension::from_flags(self.z_index.is_some(), self.m_index.is_some())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dimension_sizes() {
        assert_eq!(Dimension::XY.size(), 2);
        assert_eq!(Dimension::XYZ.size(), 3);
        assert_eq!(Dimension::XYM.size(), 3);
        assert_eq!(Dimension::XYZM.size(), 4);
    }

    #[test]
    fn layout_dimension() {
        assert_eq!(CoordLayout::new(2, None, None).dimension(), Dimension::XY);
        assert_eq!(CoordLayout::new(3, None, Some(2)).dimension(), Dimension::XYM);
        assert_eq!(
            CoordLayout::new(4, Some(3), Some(2)).dimension(),
            Dimension::XYZM
        );
        assert_eq!(Dimension::XYZM.to_string(), "XYZM");
    }
}
