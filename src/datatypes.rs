//! Geometry type and dimension definitions.

use std::fmt::Display;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::WktError;

/// The dimension of a geometry and of every coordinate it directly contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    /// Two-dimensional.
    #[default]
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Dimension {
    /// Construct from the presence of Z and M values.
    pub fn from_flags(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Dimension::XY,
            (true, false) => Dimension::XYZ,
            (false, true) => Dimension::XYM,
            (true, true) => Dimension::XYZM,
        }
    }

    /// Returns the number of dimensions.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
            Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    pub fn has_z(&self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    pub fn has_m(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }

    /// The keyword suffix written after a geometry type, empty for [`Dimension::XY`].
    pub fn wkt_suffix(&self) -> &'static str {
        match self {
            Dimension::XY => "",
            Dimension::XYZ => "Z",
            Dimension::XYM => "M",
            Dimension::XYZM => "ZM",
        }
    }

    /// Parse a keyword suffix. Matching is case-insensitive.
    pub fn from_wkt_suffix(suffix: &str) -> Option<Self> {
        if suffix.eq_ignore_ascii_case("Z") {
            Some(Dimension::XYZ)
        } else if suffix.eq_ignore_ascii_case("M") {
            Some(Dimension::XYM)
        } else if suffix.eq_ignore_ascii_case("ZM") {
            Some(Dimension::XYZM)
        } else {
            None
        }
    }

    fn iso_offset(&self) -> u32 {
        match self {
            Dimension::XY => 0,
            Dimension::XYZ => 1000,
            Dimension::XYM => 2000,
            Dimension::XYZM => 3000,
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::XY => write!(f, "XY"),
            Dimension::XYZ => write!(f, "XYZ"),
            Dimension::XYM => write!(f, "XYM"),
            Dimension::XYZM => write!(f, "XYZM"),
        }
    }
}

/// The kind of a simple-features geometry.
///
/// The discriminants are the ISO 13249-3 / OGC 06-103r4 two-dimensional type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum GeometryType {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
    CircularString = 8,
    CompoundCurve = 9,
    CurvePolygon = 10,
    MultiCurve = 11,
    MultiSurface = 12,
    PolyhedralSurface = 15,
    Tin = 16,
    Triangle = 17,
}

impl GeometryType {
    /// Every geometry type, in code order.
    pub const ALL: [GeometryType; 15] = [
        GeometryType::Point,
        GeometryType::LineString,
        GeometryType::Polygon,
        GeometryType::MultiPoint,
        GeometryType::MultiLineString,
        GeometryType::MultiPolygon,
        GeometryType::GeometryCollection,
        GeometryType::CircularString,
        GeometryType::CompoundCurve,
        GeometryType::CurvePolygon,
        GeometryType::MultiCurve,
        GeometryType::MultiSurface,
        GeometryType::PolyhedralSurface,
        GeometryType::Tin,
        GeometryType::Triangle,
    ];

    /// The upper-case WKT keyword of this type.
    pub fn keyword(&self) -> &'static str {
        match self {
            GeometryType::Point => "POINT",
            GeometryType::LineString => "LINESTRING",
            GeometryType::Polygon => "POLYGON",
            GeometryType::MultiPoint => "MULTIPOINT",
            GeometryType::MultiLineString => "MULTILINESTRING",
            GeometryType::MultiPolygon => "MULTIPOLYGON",
            GeometryType::GeometryCollection => "GEOMETRYCOLLECTION",
            GeometryType::CircularString => "CIRCULARSTRING",
            GeometryType::CompoundCurve => "COMPOUNDCURVE",
            GeometryType::CurvePolygon => "CURVEPOLYGON",
            GeometryType::MultiCurve => "MULTICURVE",
            GeometryType::MultiSurface => "MULTISURFACE",
            GeometryType::PolyhedralSurface => "POLYHEDRALSURFACE",
            GeometryType::Tin => "TIN",
            GeometryType::Triangle => "TRIANGLE",
        }
    }

    /// The ISO type code for this type combined with a dimension, e.g. 1003 for `POLYGON Z`.
    pub fn iso_code(&self, dim: Dimension) -> u32 {
        u32::from(*self) + dim.iso_offset()
    }

    /// Split an ISO type code into its type and dimension.
    pub fn from_iso_code(code: u32) -> Option<(GeometryType, Dimension)> {
        let dim = match code / 1000 {
            0 => Dimension::XY,
            1 => Dimension::XYZ,
            2 => Dimension::XYM,
            3 => Dimension::XYZM,
            _ => return None,
        };
        let typ = GeometryType::try_from(code % 1000).ok()?;
        Some((typ, dim))
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

impl TryFrom<&str> for GeometryType {
    type Error = WktError;

    /// Resolve a bare keyword such as `"MultiPolygon"`, ignoring case.
    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        match crate::io::wkt::reader::type_info::lookup_keyword(value) {
            Some(typ) => Ok(typ),
            None => Err(WktError::UnknownGeometryType {
                keyword: value.to_string(),
                position: 0,
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dimension_flags() {
        let dims = [
            Dimension::XY,
            Dimension::XYZ,
            Dimension::XYM,
            Dimension::XYZM,
        ];
        for dim in dims {
            assert_eq!(Dimension::from_flags(dim.has_z(), dim.has_m()), dim);
        }
        assert_eq!(Dimension::XYM.size(), 3);
        assert_eq!(Dimension::XYZM.size(), 4);
    }

    #[test]
    fn suffixes() {
        assert_eq!(Dimension::from_wkt_suffix("zm"), Some(Dimension::XYZM));
        assert_eq!(Dimension::from_wkt_suffix("M"), Some(Dimension::XYM));
        assert_eq!(Dimension::from_wkt_suffix("MZ"), None);
        assert_eq!(Dimension::XYZ.wkt_suffix(), "Z");
        assert_eq!(Dimension::XY.wkt_suffix(), "");
    }

    #[test]
    fn iso_codes() {
        assert_eq!(GeometryType::Polygon.iso_code(Dimension::XYZ), 1003);
        assert_eq!(GeometryType::Triangle.iso_code(Dimension::XYZM), 3017);
        assert_eq!(
            GeometryType::from_iso_code(2011),
            Some((GeometryType::MultiCurve, Dimension::XYM))
        );
        assert_eq!(GeometryType::from_iso_code(13), None);
        assert_eq!(GeometryType::from_iso_code(4001), None);

        for typ in GeometryType::ALL {
            assert_eq!(
                GeometryType::from_iso_code(typ.iso_code(Dimension::XYZ)),
                Some((typ, Dimension::XYZ))
            );
        }
    }

    #[test]
    fn keyword_lookup() {
        assert_eq!(
            GeometryType::try_from("MultiPolygon").unwrap(),
            GeometryType::MultiPolygon
        );
        assert!(GeometryType::try_from("Curve").is_err());
    }
}
