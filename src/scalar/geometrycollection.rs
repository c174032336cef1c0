use crate::scalar::Geometry;

/// An ordered, heterogeneous collection of geometries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
}

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self { geometries }
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.iter().all(Geometry::is_empty)
    }
}

impl From<geo::GeometryCollection> for GeometryCollection {
    fn from(value: geo::GeometryCollection) -> Self {
        GeometryCollection::new(value.0.into_iter().map(Geometry::from).collect())
    }
}
