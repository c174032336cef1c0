use crate::scalar::{Curve, LineString};

/// A polygon bounded by one exterior ring and zero or more interior rings (holes).
///
/// Rings are [`Curve`]s, so a ring may be straight, circular or compound.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    exterior: Curve,
    interiors: Vec<Curve>,
}

impl Polygon {
    pub fn new(exterior: impl Into<Curve>, interiors: Vec<Curve>) -> Self {
        Self {
            exterior: exterior.into(),
            interiors,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn exterior(&self) -> &Curve {
        &self.exterior
    }

    pub fn interiors(&self) -> &[Curve] {
        &self.interiors
    }

    pub fn num_interiors(&self) -> usize {
        self.interiors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }

    /// Exterior ring followed by the interior rings.
    pub fn rings(&self) -> impl Iterator<Item = &Curve> + '_ {
        std::iter::once(&self.exterior).chain(self.interiors.iter())
    }
}

impl From<geo::Polygon> for Polygon {
    fn from(value: geo::Polygon) -> Self {
        let (exterior, interiors) = value.into_inner();
        Polygon::new(
            LineString::from(exterior),
            interiors
                .into_iter()
                .map(|ring| Curve::LineString(ring.into()))
                .collect(),
        )
    }
}
