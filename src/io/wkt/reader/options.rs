use crate::datatypes::GeometryType;
use crate::geometry::Geometry;

/// The default limit on how deeply tagged geometries may nest.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options for [`WktReader`](super::WktReader).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderOptions {
    /// How many tagged geometries may be nested inside each other, counting the root.
    ///
    /// `GEOMETRYCOLLECTION (POINT (1 1))` has a depth of 2.
    pub max_depth: usize,
}

impl ReaderOptions {
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Decides which geometries the reader keeps.
///
/// The filter sees the root geometry with no containing type, then every component together
/// with the type of the geometry that contains it: the members of multi geometries and
/// collections, polygon and triangle rings, compound curve segments, curve polygon rings,
/// surface patches, and each coordinate of a line string or circular string as a [`Point`].
/// Rejected components are left out of their parent.
///
/// Structural rules such as ring closure are checked against the text before filtering, so a
/// filtered geometry may break them.
///
/// [`Point`]: crate::geometry::Point
pub trait GeometryFilter {
    fn filter(&self, containing_type: Option<GeometryType>, geometry: &Geometry) -> bool;
}

impl<F> GeometryFilter for F
where
    F: Fn(Option<GeometryType>, &Geometry) -> bool,
{
    fn filter(&self, containing_type: Option<GeometryType>, geometry: &Geometry) -> bool {
        self(containing_type, geometry)
    }
}
