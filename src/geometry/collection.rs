use crate::geometry::{sequence_geometry, Geometry};

sequence_geometry!(
    /// A heterogeneous collection of geometries, possibly including nested collections.
    GeometryCollection,
    geometries: Geometry
);

impl GeometryCollection {
    /// The greatest nesting depth of collections below and including this one.
    pub fn depth(&self) -> usize {
        1 + self
            .geometries
            .iter()
            .map(|geom| match geom {
                Geometry::GeometryCollection(child) => child.depth(),
                _ => 0,
            })
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::Dimension;
    use crate::geometry::{Coord, Point};

    #[test]
    fn nested_depth() {
        let point: Geometry = Point::from_coord(Coord::xy(1., 1.)).into();
        let inner = GeometryCollection::from(vec![point.clone()]);
        let outer = GeometryCollection::from(vec![point, inner.into()]);
        assert_eq!(outer.depth(), 2);
        assert_eq!(GeometryCollection::empty(Dimension::XY).depth(), 1);
    }
}
