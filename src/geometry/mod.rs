//! The in-memory simple-features geometry model read and written by this crate.
//!
//! Every geometry stores its own [`Dimension`], so that empty geometries keep their
//! dimensionality (`POINT Z EMPTY`). Constructors do not validate; structural problems are
//! reported by the writer as [`WktError::InvalidGeometry`].

mod collection;
mod coord;
mod curve;
mod multi;
mod point;
mod polygon;
pub(crate) mod rules;

pub use collection::GeometryCollection;
pub use coord::Coord;
pub use curve::{CircularString, CompoundCurve, Curve, LineString, Segment};
pub use multi::{MultiCurve, MultiLineString, MultiPoint, MultiPolygon, MultiSurface, Surface};
pub use point::Point;
pub use polygon::{CurvePolygon, PolyhedralSurface, Polygon, Tin, Triangle};

use crate::datatypes::{Dimension, GeometryType};
use crate::error::WktError;

/// Anything with a coordinate dimension.
pub trait Dimensional {
    fn dim(&self) -> Dimension;
}

impl Dimensional for Coord {
    fn dim(&self) -> Dimension {
        Coord::dim(self)
    }
}

/// A concrete geometry struct that corresponds to exactly one [`GeometryType`].
pub trait TypedGeometry: TryFrom<Geometry, Error = WktError> + Into<Geometry> {
    const GEOMETRY_TYPE: GeometryType;
}

/// A geometry of any kind.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
    CircularString(CircularString),
    CompoundCurve(CompoundCurve),
    CurvePolygon(CurvePolygon),
    MultiCurve(MultiCurve),
    MultiSurface(MultiSurface),
    PolyhedralSurface(PolyhedralSurface),
    Tin(Tin),
    Triangle(Triangle),
}

impl Geometry {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
            Geometry::CircularString(_) => GeometryType::CircularString,
            Geometry::CompoundCurve(_) => GeometryType::CompoundCurve,
            Geometry::CurvePolygon(_) => GeometryType::CurvePolygon,
            Geometry::MultiCurve(_) => GeometryType::MultiCurve,
            Geometry::MultiSurface(_) => GeometryType::MultiSurface,
            Geometry::PolyhedralSurface(_) => GeometryType::PolyhedralSurface,
            Geometry::Tin(_) => GeometryType::Tin,
            Geometry::Triangle(_) => GeometryType::Triangle,
        }
    }

    pub fn dim(&self) -> Dimension {
        match self {
            Geometry::Point(g) => g.dim(),
            Geometry::LineString(g) => g.dim(),
            Geometry::Polygon(g) => g.dim(),
            Geometry::MultiPoint(g) => g.dim(),
            Geometry::MultiLineString(g) => g.dim(),
            Geometry::MultiPolygon(g) => g.dim(),
            Geometry::GeometryCollection(g) => g.dim(),
            Geometry::CircularString(g) => g.dim(),
            Geometry::CompoundCurve(g) => g.dim(),
            Geometry::CurvePolygon(g) => g.dim(),
            Geometry::MultiCurve(g) => g.dim(),
            Geometry::MultiSurface(g) => g.dim(),
            Geometry::PolyhedralSurface(g) => g.dim(),
            Geometry::Tin(g) => g.dim(),
            Geometry::Triangle(g) => g.dim(),
        }
    }

    /// Whether this geometry has no coordinates or children, i.e. is written as `EMPTY`.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(g) => g.is_empty(),
            Geometry::LineString(g) => g.is_empty(),
            Geometry::Polygon(g) => g.is_empty(),
            Geometry::MultiPoint(g) => g.is_empty(),
            Geometry::MultiLineString(g) => g.is_empty(),
            Geometry::MultiPolygon(g) => g.is_empty(),
            Geometry::GeometryCollection(g) => g.is_empty(),
            Geometry::CircularString(g) => g.is_empty(),
            Geometry::CompoundCurve(g) => g.is_empty(),
            Geometry::CurvePolygon(g) => g.is_empty(),
            Geometry::MultiCurve(g) => g.is_empty(),
            Geometry::MultiSurface(g) => g.is_empty(),
            Geometry::PolyhedralSurface(g) => g.is_empty(),
            Geometry::Tin(g) => g.is_empty(),
            Geometry::Triangle(g) => g.is_empty(),
        }
    }

    /// An empty geometry of the given type and dimension.
    pub fn empty(geometry_type: GeometryType, dim: Dimension) -> Self {
        match geometry_type {
            GeometryType::Point => Point::empty(dim).into(),
            GeometryType::LineString => LineString::empty(dim).into(),
            GeometryType::Polygon => Polygon::empty(dim).into(),
            GeometryType::MultiPoint => MultiPoint::empty(dim).into(),
            GeometryType::MultiLineString => MultiLineString::empty(dim).into(),
            GeometryType::MultiPolygon => MultiPolygon::empty(dim).into(),
            GeometryType::GeometryCollection => GeometryCollection::empty(dim).into(),
            GeometryType::CircularString => CircularString::empty(dim).into(),
            GeometryType::CompoundCurve => CompoundCurve::empty(dim).into(),
            GeometryType::CurvePolygon => CurvePolygon::empty(dim).into(),
            GeometryType::MultiCurve => MultiCurve::empty(dim).into(),
            GeometryType::MultiSurface => MultiSurface::empty(dim).into(),
            GeometryType::PolyhedralSurface => PolyhedralSurface::empty(dim).into(),
            GeometryType::Tin => Tin::empty(dim).into(),
            GeometryType::Triangle => Triangle::empty(dim).into(),
        }
    }
}

impl Dimensional for Geometry {
    fn dim(&self) -> Dimension {
        Geometry::dim(self)
    }
}

/// A root geometry together with its optional spatial reference identifier.
///
/// This is the value behind `SRID=4326;POINT (1.0 1.0)`. Nested geometries never carry an
/// SRID of their own.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wkt {
    pub srid: Option<i32>,
    pub geometry: Geometry,
}

impl Wkt {
    pub fn new(geometry: Geometry, srid: Option<i32>) -> Self {
        Self { srid, geometry }
    }
}

impl From<Geometry> for Wkt {
    fn from(geometry: Geometry) -> Self {
        Self {
            srid: None,
            geometry,
        }
    }
}

/// Implements the conversions between a concrete geometry struct and [`Geometry`].
macro_rules! impl_geometry_conversions {
    ($name:ident) => {
        impl From<$name> for crate::geometry::Geometry {
            fn from(value: $name) -> Self {
                crate::geometry::Geometry::$name(value)
            }
        }

        impl TryFrom<crate::geometry::Geometry> for $name {
            type Error = crate::error::WktError;

            fn try_from(value: crate::geometry::Geometry) -> std::result::Result<Self, Self::Error> {
                match value {
                    crate::geometry::Geometry::$name(geom) => Ok(geom),
                    other => Err(crate::error::WktError::IncorrectGeometryType {
                        expected: crate::datatypes::GeometryType::$name.keyword().into(),
                        found: other.geometry_type(),
                        position: 0,
                    }),
                }
            }
        }

        impl crate::geometry::TypedGeometry for $name {
            const GEOMETRY_TYPE: crate::datatypes::GeometryType =
                crate::datatypes::GeometryType::$name;
        }

        impl crate::geometry::Dimensional for $name {
            fn dim(&self) -> crate::datatypes::Dimension {
                self.dim
            }
        }
    };
}

/// Declares a geometry struct that owns a list of children of a single item type.
macro_rules! sequence_geometry {
    ($(#[$meta:meta])* $name:ident, $field:ident: $item:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            dim: crate::datatypes::Dimension,
            $field: Vec<$item>,
        }

        impl $name {
            pub fn new(dim: crate::datatypes::Dimension, $field: Vec<$item>) -> Self {
                Self { dim, $field }
            }

            pub fn empty(dim: crate::datatypes::Dimension) -> Self {
                Self::new(dim, Vec::new())
            }

            pub fn dim(&self) -> crate::datatypes::Dimension {
                self.dim
            }

            pub fn $field(&self) -> &[$item] {
                &self.$field
            }

            pub fn len(&self) -> usize {
                self.$field.len()
            }

            pub fn is_empty(&self) -> bool {
                self.$field.is_empty()
            }

            pub fn push(&mut self, item: $item) {
                self.$field.push(item);
            }

            pub fn into_inner(self) -> Vec<$item> {
                self.$field
            }
        }

        impl From<Vec<$item>> for $name {
            /// Takes the dimension from the first item, [`Dimension::XY`] when there is none.
            fn from(value: Vec<$item>) -> Self {
                let dim = value.first().map(crate::geometry::Dimensional::dim).unwrap_or_default();
                Self::new(dim, value)
            }
        }

        crate::geometry::impl_geometry_conversions!($name);
    };
}

pub(crate) use impl_geometry_conversions;
pub(crate) use sequence_geometry;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_for_every_type() {
        for typ in GeometryType::ALL {
            let geom = Geometry::empty(typ, Dimension::XYM);
            assert_eq!(geom.geometry_type(), typ);
            assert_eq!(geom.dim(), Dimension::XYM);
            assert!(geom.is_empty());
        }
    }

    #[test]
    fn try_from_wrong_type() {
        let geom: Geometry = Point::from_coord(Coord::xy(1., 2.)).into();
        let err = LineString::try_from(geom).unwrap_err();
        assert!(matches!(
            err,
            WktError::IncorrectGeometryType {
                found: GeometryType::Point,
                ..
            }
        ));
    }

    #[test]
    fn dimension_inferred_from_first_item() {
        let line: LineString = vec![Coord::xyz(0., 0., 1.), Coord::xyz(1., 1., 1.)].into();
        assert_eq!(line.dim(), Dimension::XYZ);

        let empty: MultiPolygon = Vec::new().into();
        assert_eq!(empty.dim(), Dimension::XY);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_json_round_trip() {
        for geometry in crate::test::all_geometries() {
            let json = serde_json::to_string(&geometry).unwrap();
            let back: Geometry = serde_json::from_str(&json).unwrap();
            assert_eq!(back, geometry);
        }
    }
}
