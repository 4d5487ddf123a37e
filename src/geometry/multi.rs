use crate::datatypes::{Dimension, GeometryType};
use crate::geometry::{
    sequence_geometry, Curve, CurvePolygon, Dimensional, Geometry, Point, Polygon,
    PolyhedralSurface, Tin, Triangle,
};

sequence_geometry!(
    /// A collection of points. Individual members may be empty.
    MultiPoint,
    points: Point
);

sequence_geometry!(
    /// A collection of line strings. Members may also be circular strings or compound
    /// curves.
    MultiLineString,
    curves: Curve
);

sequence_geometry!(MultiPolygon, polygons: Polygon);

sequence_geometry!(
    /// A collection of curves of any curve kind.
    MultiCurve,
    curves: Curve
);

sequence_geometry!(
    /// A collection of surfaces of any surface kind.
    MultiSurface,
    surfaces: Surface
);

/// A member of a [`MultiSurface`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Surface {
    Polygon(Polygon),
    CurvePolygon(CurvePolygon),
    PolyhedralSurface(PolyhedralSurface),
    Tin(Tin),
    Triangle(Triangle),
}

impl Surface {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Surface::Polygon(_) => GeometryType::Polygon,
            Surface::CurvePolygon(_) => GeometryType::CurvePolygon,
            Surface::PolyhedralSurface(_) => GeometryType::PolyhedralSurface,
            Surface::Tin(_) => GeometryType::Tin,
            Surface::Triangle(_) => GeometryType::Triangle,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Surface::Polygon(g) => g.is_empty(),
            Surface::CurvePolygon(g) => g.is_empty(),
            Surface::PolyhedralSurface(g) => g.is_empty(),
            Surface::Tin(g) => g.is_empty(),
            Surface::Triangle(g) => g.is_empty(),
        }
    }
}

impl Dimensional for Surface {
    fn dim(&self) -> Dimension {
        match self {
            Surface::Polygon(g) => g.dim(),
            Surface::CurvePolygon(g) => g.dim(),
            Surface::PolyhedralSurface(g) => g.dim(),
            Surface::Tin(g) => g.dim(),
            Surface::Triangle(g) => g.dim(),
        }
    }
}

impl From<Polygon> for Surface {
    fn from(value: Polygon) -> Self {
        Surface::Polygon(value)
    }
}

impl From<CurvePolygon> for Surface {
    fn from(value: CurvePolygon) -> Self {
        Surface::CurvePolygon(value)
    }
}

impl From<PolyhedralSurface> for Surface {
    fn from(value: PolyhedralSurface) -> Self {
        Surface::PolyhedralSurface(value)
    }
}

impl From<Tin> for Surface {
    fn from(value: Tin) -> Self {
        Surface::Tin(value)
    }
}

impl From<Triangle> for Surface {
    fn from(value: Triangle) -> Self {
        Surface::Triangle(value)
    }
}

impl From<Surface> for Geometry {
    fn from(value: Surface) -> Self {
        match value {
            Surface::Polygon(g) => g.into(),
            Surface::CurvePolygon(g) => g.into(),
            Surface::PolyhedralSurface(g) => g.into(),
            Surface::Tin(g) => g.into(),
            Surface::Triangle(g) => g.into(),
        }
    }
}
