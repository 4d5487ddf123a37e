use crate::datatypes::Dimension;
use crate::geometry::{Coord, MultiPoint, Point};

pub(crate) fn mp0() -> MultiPoint {
    vec![
        Point::from_coord(Coord::xy(0., 1.)),
        Point::from_coord(Coord::xy(2., 3.)),
    ]
    .into()
}

pub(crate) fn mp_with_empty() -> MultiPoint {
    MultiPoint::new(
        Dimension::XYZ,
        vec![
            Point::from_coord(Coord::xyz(1., 2., 3.)),
            Point::empty(Dimension::XYZ),
        ],
    )
}
