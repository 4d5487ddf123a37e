use crate::geometry::{Coord, LineString, Polygon};

fn ring(coords: &[(f64, f64)]) -> LineString {
    coords.iter().map(|&(x, y)| Coord::xy(x, y)).collect::<Vec<_>>().into()
}

/// A 10x10 square with a triangular hole.
pub(crate) fn with_hole() -> Polygon {
    vec![
        ring(&[(0., 0.), (10., 0.), (10., 10.), (0., 10.), (0., 0.)]),
        ring(&[(2., 2.), (4., 2.), (4., 4.), (2., 2.)]),
    ]
    .into()
}

pub(crate) fn unit_square() -> Polygon {
    vec![ring(&[(0., 0.), (1., 0.), (1., 1.), (0., 1.), (0., 0.)])].into()
}

pub(crate) fn square_z() -> Polygon {
    let exterior: LineString = vec![
        Coord::xyz(0., 0., 5.),
        Coord::xyz(1., 0., 5.),
        Coord::xyz(1., 1., 5.),
        Coord::xyz(0., 1., 5.),
        Coord::xyz(0., 0., 5.),
    ]
    .into();
    vec![exterior].into()
}
