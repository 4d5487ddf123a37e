use crate::datatypes::Dimension;
use crate::geometry::{impl_geometry_conversions, Coord};

/// A single position, or an empty point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    dim: Dimension,
    coord: Option<Coord>,
}

impl Point {
    pub fn new(dim: Dimension, coord: Option<Coord>) -> Self {
        Self { dim, coord }
    }

    /// A point whose dimension is taken from `coord`.
    pub fn from_coord(coord: Coord) -> Self {
        Self::new(coord.dim(), Some(coord))
    }

    pub fn empty(dim: Dimension) -> Self {
        Self::new(dim, None)
    }

    pub fn dim(&self) -> Dimension {
        self.dim
    }

    pub fn coord(&self) -> Option<&Coord> {
        self.coord.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.coord.is_none()
    }
}

impl From<Coord> for Point {
    fn from(value: Coord) -> Self {
        Self::from_coord(value)
    }
}

impl_geometry_conversions!(Point);
