use crate::datatypes::Dimension;

/// A single coordinate tuple.
///
/// The dimension of a coordinate is derived from which of `z` and `m` are present.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub m: Option<f64>,
}

impl Coord {
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: None,
        }
    }

    pub fn xym(x: f64, y: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: Some(m),
        }
    }

    pub fn xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: Some(m),
        }
    }

    /// Build a coordinate from its components in `x y [z] [m]` order.
    ///
    /// Returns `None` when `values` does not have exactly `dim.size()` entries.
    pub fn from_slice(dim: Dimension, values: &[f64]) -> Option<Self> {
        match (dim, values) {
            (Dimension::XY, [x, y]) => Some(Self::xy(*x, *y)),
            (Dimension::XYZ, [x, y, z]) => Some(Self::xyz(*x, *y, *z)),
            (Dimension::XYM, [x, y, m]) => Some(Self::xym(*x, *y, *m)),
            (Dimension::XYZM, [x, y, z, m]) => Some(Self::xyzm(*x, *y, *z, *m)),
            _ => None,
        }
    }

    pub fn dim(&self) -> Dimension {
        Dimension::from_flags(self.z.is_some(), self.m.is_some())
    }

    /// The components of this coordinate in `x y [z] [m]` order.
    pub fn values(&self) -> impl Iterator<Item = f64> {
        [Some(self.x), Some(self.y), self.z, self.m]
            .into_iter()
            .flatten()
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self::xy(x, y)
    }
}

impl From<[f64; 2]> for Coord {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::xy(x, y)
    }
}

impl From<[f64; 3]> for Coord {
    /// The third value is treated as Z.
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::xyz(x, y, z)
    }
}

impl From<[f64; 4]> for Coord {
    fn from([x, y, z, m]: [f64; 4]) -> Self {
        Self::xyzm(x, y, z, m)
    }
}
