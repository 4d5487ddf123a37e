use crate::io::wkt::reader::DEFAULT_MAX_DEPTH;

/// How the members of a multi point are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MultiPointStyle {
    /// `MULTIPOINT ((1.0 2.0), (3.0 4.0))`
    #[default]
    Parenthesized,

    /// `MULTIPOINT (1.0 2.0, 3.0 4.0)`, as accepted by older readers.
    Bare,
}

/// Options for [`WktWriter`](super::WktWriter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WriterOptions {
    pub multi_point: MultiPointStyle,

    /// How many tagged geometries may be nested inside each other, counting the root. Matches
    /// [`ReaderOptions::max_depth`](crate::io::wkt::reader::ReaderOptions::max_depth).
    pub max_depth: usize,
}

impl WriterOptions {
    pub fn with_multi_point(self, multi_point: MultiPointStyle) -> Self {
        Self {
            multi_point,
            ..self
        }
    }

    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            multi_point: MultiPointStyle::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
