pub(crate) mod collection;
pub(crate) mod curve;
pub(crate) mod line_string;
pub(crate) mod multi_point;
pub(crate) mod point;
pub(crate) mod polygon;
pub(crate) mod surface;

use crate::datatypes::{Dimension, GeometryType};
use crate::geometry::{Curve, Geometry, MultiLineString, MultiPolygon};

/// One non-empty sample of every geometry type, followed by every empty geometry in every
/// dimension.
pub(crate) fn all_geometries() -> Vec<Geometry> {
    let mut geometries: Vec<Geometry> = vec![
        point::p0().into(),
        point::p_zm().into(),
        line_string::ls0().into(),
        line_string::ls_z().into(),
        line_string::ls_m().into(),
        polygon::with_hole().into(),
        polygon::square_z().into(),
        multi_point::mp0().into(),
        multi_point::mp_with_empty().into(),
        MultiLineString::from(vec![
            Curve::from(line_string::ls0()),
            Curve::from(curve::arc()),
            Curve::from(curve::compound()),
        ])
        .into(),
        MultiPolygon::from(vec![polygon::with_hole(), polygon::unit_square()]).into(),
        collection::gc0().into(),
        collection::nested().into(),
        curve::arc().into(),
        curve::compound().into(),
        curve::curve_polygon().into(),
        curve::multi_curve().into(),
        surface::multi_surface().into(),
        surface::polyhedral_surface().into(),
        surface::tin().into(),
        surface::triangle().into(),
    ];
    for dim in [
        Dimension::XY,
        Dimension::XYZ,
        Dimension::XYM,
        Dimension::XYZM,
    ] {
        for typ in GeometryType::ALL {
            geometries.push(Geometry::empty(typ, dim));
        }
    }
    geometries
}
