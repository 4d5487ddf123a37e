use crate::geometry::{
    Coord, LineString, MultiSurface, PolyhedralSurface, Surface, Tin, Triangle,
};
use crate::test::{curve, polygon};

pub(crate) fn triangle() -> Triangle {
    let ring: LineString = vec![
        Coord::xyz(0., 0., 0.),
        Coord::xyz(1., 0., 0.),
        Coord::xyz(0., 1., 1.),
        Coord::xyz(0., 0., 0.),
    ]
    .into();
    vec![ring].into()
}

pub(crate) fn tin() -> Tin {
    let second: LineString = vec![
        Coord::xyz(1., 0., 0.),
        Coord::xyz(1., 1., 2.),
        Coord::xyz(0., 1., 1.),
        Coord::xyz(1., 0., 0.),
    ]
    .into();
    vec![triangle(), vec![second].into()].into()
}

pub(crate) fn polyhedral_surface() -> PolyhedralSurface {
    vec![polygon::square_z(), polygon::square_z()].into()
}

pub(crate) fn multi_surface() -> MultiSurface {
    vec![
        Surface::from(polygon::unit_square()),
        Surface::from(curve::curve_polygon()),
    ]
    .into()
}
