use crate::geometry::{Coord, LineString};

pub(crate) fn ls0() -> LineString {
    vec![Coord::xy(0., 0.), Coord::xy(1., 1.)].into()
}

pub(crate) fn ls1() -> LineString {
    vec![Coord::xy(3., 4.), Coord::xy(5., 6.)].into()
}

pub(crate) fn ls_z() -> LineString {
    vec![Coord::xyz(1., 1., 1.), Coord::xyz(2., 2., 2.)].into()
}

pub(crate) fn ls_m() -> LineString {
    vec![
        Coord::xym(0., 0., 10.),
        Coord::xym(1.5, -2.25, 11.),
        Coord::xym(3., 0.125, 12.),
    ]
    .into()
}
