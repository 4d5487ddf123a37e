use crate::geometry::{
    CircularString, CompoundCurve, Coord, Curve, CurvePolygon, LineString, MultiCurve,
};

pub(crate) fn arc() -> CircularString {
    vec![Coord::xy(0., 0.), Coord::xy(1., 1.), Coord::xy(2., 0.)].into()
}

/// An arc followed by a straight segment back to the start.
pub(crate) fn compound() -> CompoundCurve {
    let back: LineString = vec![Coord::xy(2., 0.), Coord::xy(0., 0.)].into();
    vec![arc().into(), back.into()].into()
}

pub(crate) fn curve_polygon() -> CurvePolygon {
    let hole: CircularString = vec![
        Coord::xy(0.5, 0.25),
        Coord::xy(1., 0.5),
        Coord::xy(1.5, 0.25),
        Coord::xy(1., 0.),
        Coord::xy(0.5, 0.25),
    ]
    .into();
    vec![Curve::from(compound()), Curve::from(hole)].into()
}

pub(crate) fn multi_curve() -> MultiCurve {
    let line: LineString = vec![Coord::xy(5., 5.), Coord::xy(6., 6.)].into();
    vec![Curve::from(line), Curve::from(arc()), Curve::from(compound())].into()
}
