use crate::datatypes::Dimension;
use crate::geometry::{Geometry, GeometryCollection, LineString};
use crate::test::{line_string, point};

pub(crate) fn gc0() -> GeometryCollection {
    vec![
        Geometry::from(point::p0()),
        Geometry::from(line_string::ls0()),
    ]
    .into()
}

/// A collection holding an empty collection and a collection of line strings.
pub(crate) fn nested() -> GeometryCollection {
    vec![
        Geometry::from(GeometryCollection::empty(Dimension::XY)),
        Geometry::from(GeometryCollection::from(vec![Geometry::from(
            line_string::ls1(),
        )])),
        Geometry::from(LineString::empty(Dimension::XY)),
    ]
    .into()
}
