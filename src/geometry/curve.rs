use crate::datatypes::{Dimension, GeometryType};
use crate::geometry::{sequence_geometry, Coord, Dimensional, Geometry};

sequence_geometry!(
    /// A sequence of coordinates joined by straight segments.
    LineString,
    coords: Coord
);

impl LineString {
    /// Whether the first and last coordinates are equal. Empty line strings are not closed.
    pub fn is_closed(&self) -> bool {
        match (self.coords.first(), self.coords.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }
}

sequence_geometry!(
    /// A sequence of circular arcs, each defined by three coordinates where consecutive arcs
    /// share an end point. A non-empty circular string has an odd number of coordinates, at
    /// least three.
    CircularString,
    coords: Coord
);

sequence_geometry!(
    /// A connected sequence of line string and circular string segments.
    CompoundCurve,
    segments: Segment
);

/// A component of a [`CompoundCurve`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    LineString(LineString),
    CircularString(CircularString),
}

impl Segment {
    pub fn coords(&self) -> &[Coord] {
        match self {
            Segment::LineString(g) => g.coords(),
            Segment::CircularString(g) => g.coords(),
        }
    }

    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Segment::LineString(_) => GeometryType::LineString,
            Segment::CircularString(_) => GeometryType::CircularString,
        }
    }
}

impl Dimensional for Segment {
    fn dim(&self) -> Dimension {
        match self {
            Segment::LineString(g) => g.dim(),
            Segment::CircularString(g) => g.dim(),
        }
    }
}

impl From<LineString> for Segment {
    fn from(value: LineString) -> Self {
        Segment::LineString(value)
    }
}

impl From<CircularString> for Segment {
    fn from(value: CircularString) -> Self {
        Segment::CircularString(value)
    }
}

impl From<Segment> for Geometry {
    fn from(value: Segment) -> Self {
        match value {
            Segment::LineString(g) => g.into(),
            Segment::CircularString(g) => g.into(),
        }
    }
}

/// A member of a [`MultiCurve`](crate::geometry::MultiCurve) or a ring of a
/// [`CurvePolygon`](crate::geometry::CurvePolygon).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Curve {
    LineString(LineString),
    CircularString(CircularString),
    CompoundCurve(CompoundCurve),
}

impl Curve {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Curve::LineString(_) => GeometryType::LineString,
            Curve::CircularString(_) => GeometryType::CircularString,
            Curve::CompoundCurve(_) => GeometryType::CompoundCurve,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Curve::LineString(g) => g.is_empty(),
            Curve::CircularString(g) => g.is_empty(),
            Curve::CompoundCurve(g) => g.is_empty(),
        }
    }
}

impl Dimensional for Curve {
    fn dim(&self) -> Dimension {
        match self {
            Curve::LineString(g) => g.dim(),
            Curve::CircularString(g) => g.dim(),
            Curve::CompoundCurve(g) => g.dim(),
        }
    }
}

impl From<LineString> for Curve {
    fn from(value: LineString) -> Self {
        Curve::LineString(value)
    }
}

impl From<CircularString> for Curve {
    fn from(value: CircularString) -> Self {
        Curve::CircularString(value)
    }
}

impl From<CompoundCurve> for Curve {
    fn from(value: CompoundCurve) -> Self {
        Curve::CompoundCurve(value)
    }
}

impl From<Curve> for Geometry {
    fn from(value: Curve) -> Self {
        match value {
            Curve::LineString(g) => g.into(),
            Curve::CircularString(g) => g.into(),
            Curve::CompoundCurve(g) => g.into(),
        }
    }
}
