use crate::datatypes::Dimension;
use crate::geometry::{Coord, Point};

pub(crate) fn p0() -> Point {
    Point::from_coord(Coord::xy(0., 1.))
}

pub(crate) fn p_zm() -> Point {
    Point::from_coord(Coord::xyzm(1., 2., 3., 4.))
}

pub(crate) fn empty_z() -> Point {
    Point::empty(Dimension::XYZ)
}
