//! Resolution of geometry keywords to a geometry type and dimension.

use phf::phf_map;

use crate::datatypes::{Dimension, GeometryType};
use crate::error::{Result, WktError};

/// Upper-case base keywords.
static GEOMETRY_KEYWORDS: phf::Map<&'static str, GeometryType> = phf_map! {
    "POINT" => GeometryType::Point,
    "LINESTRING" => GeometryType::LineString,
    "POLYGON" => GeometryType::Polygon,
    "MULTIPOINT" => GeometryType::MultiPoint,
    "MULTILINESTRING" => GeometryType::MultiLineString,
    "MULTIPOLYGON" => GeometryType::MultiPolygon,
    "GEOMETRYCOLLECTION" => GeometryType::GeometryCollection,
    "CIRCULARSTRING" => GeometryType::CircularString,
    "COMPOUNDCURVE" => GeometryType::CompoundCurve,
    "CURVEPOLYGON" => GeometryType::CurvePolygon,
    "MULTICURVE" => GeometryType::MultiCurve,
    "MULTISURFACE" => GeometryType::MultiSurface,
    "POLYHEDRALSURFACE" => GeometryType::PolyhedralSurface,
    "TIN" => GeometryType::Tin,
    "TRIANGLE" => GeometryType::Triangle,
};

/// Length of `GEOMETRYCOLLECTION`, the longest keyword.
const MAX_KEYWORD_LEN: usize = 18;

/// A geometry type together with the dimension declared by its keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryTypeInfo {
    pub geometry_type: GeometryType,
    pub dim: Dimension,
    /// Whether the dimension was written explicitly, as in `POINT Z` or `POINTZ`.
    pub explicit_dim: bool,
}

impl GeometryTypeInfo {
    pub fn new(geometry_type: GeometryType, dim: Dimension) -> Self {
        Self {
            geometry_type,
            dim,
            explicit_dim: dim != Dimension::XY,
        }
    }
}

/// Look up a bare keyword without any dimension suffix, ignoring case.
pub fn lookup_keyword(word: &str) -> Option<GeometryType> {
    if word.len() > MAX_KEYWORD_LEN {
        return None;
    }
    GEOMETRY_KEYWORDS
        .get(word.to_ascii_uppercase().as_str())
        .copied()
}

/// Resolve a keyword, which may carry a joined dimension suffix (`POLYGONZM`).
///
/// `position` is only used for the error.
pub fn resolve(word: &str, position: usize) -> Result<GeometryTypeInfo> {
    if let Some(geometry_type) = lookup_keyword(word) {
        return Ok(GeometryTypeInfo {
            geometry_type,
            dim: Dimension::XY,
            explicit_dim: false,
        });
    }

    for suffix in ["ZM", "Z", "M"] {
        let Some(base_len) = word.len().checked_sub(suffix.len()) else {
            continue;
        };
        if !word.is_char_boundary(base_len) {
            continue;
        }
        let (base, tail) = word.split_at(base_len);
        if !tail.eq_ignore_ascii_case(suffix) {
            continue;
        }
        if let (Some(geometry_type), Some(dim)) =
            (lookup_keyword(base), Dimension::from_wkt_suffix(tail))
        {
            return Ok(GeometryTypeInfo {
                geometry_type,
                dim,
                explicit_dim: true,
            });
        }
    }

    Err(WktError::UnknownGeometryType {
        keyword: word.to_string(),
        position,
    })
}

/// Apply a separate suffix word (`Z`, `M` or `ZM`) to a resolved base keyword.
///
/// Returns `None` if `suffix` is not a dimension suffix, or the keyword already had one.
pub fn resolve_suffix(info: GeometryTypeInfo, suffix: &str) -> Option<GeometryTypeInfo> {
    if info.explicit_dim {
        return None;
    }
    let dim = Dimension::from_wkt_suffix(suffix)?;
    Some(GeometryTypeInfo {
        geometry_type: info.geometry_type,
        dim,
        explicit_dim: true,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn base_keywords_any_case() {
        for typ in GeometryType::ALL {
            let info = resolve(&typ.keyword().to_lowercase(), 0).unwrap();
            assert_eq!(info.geometry_type, typ);
            assert_eq!(info.dim, Dimension::XY);
            assert!(!info.explicit_dim);
        }
    }

    #[test]
    fn joined_suffixes() {
        let info = resolve("PolygonZM", 0).unwrap();
        assert_eq!(info.geometry_type, GeometryType::Polygon);
        assert_eq!(info.dim, Dimension::XYZM);

        let info = resolve("tinz", 0).unwrap();
        assert_eq!(info.geometry_type, GeometryType::Tin);
        assert_eq!(info.dim, Dimension::XYZ);

        let info = resolve("MULTIPOINTM", 0).unwrap();
        assert_eq!(info.dim, Dimension::XYM);
    }

    #[test]
    fn separate_suffix() {
        let info = resolve("LINESTRING", 0).unwrap();
        let info = resolve_suffix(info, "z").unwrap();
        assert_eq!(info.dim, Dimension::XYZ);
        assert!(resolve_suffix(info, "M").is_none());

        let info = resolve("POINT", 0).unwrap();
        assert!(resolve_suffix(info, "Q").is_none());
    }

    #[test]
    fn unknown_keyword() {
        assert_eq!(
            resolve("CURVE", 4),
            Err(WktError::UnknownGeometryType {
                keyword: "CURVE".to_string(),
                position: 4
            })
        );
        assert!(resolve("POINTMZ", 0).is_err());
        assert!(resolve("Z", 0).is_err());
        assert!(lookup_keyword("GEOMETRYCOLLECTIONGEOMETRYCOLLECTION").is_none());
    }
}
