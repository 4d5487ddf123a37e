//! Text encoding of geometries, and conversion to and from [`geo`](::geo) types.

pub mod geo;
pub mod wkt;
