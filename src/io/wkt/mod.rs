//! Read and write geometries as [Well-Known Text](https://en.wikipedia.org/wiki/Well-known_text_representation_of_geometry).
//!
//! ```
//! use simple_features_wkt::io::wkt::{read_wkt, write_wkt};
//!
//! let wkt = read_wkt("SRID=4326;linestring z (1 1 1, 2 2 2)").unwrap();
//! assert_eq!(
//!     write_wkt(&wkt).unwrap(),
//!     "SRID=4326;LINESTRING Z (1.0 1.0 1.0, 2.0 2.0 2.0)"
//! );
//! ```

pub mod reader;
pub mod writer;

pub use reader::{
    read_filtered, read_geometry, read_geometry_as, read_geometry_type, read_wkt, GeometryFilter,
    GeometryTypeInfo, ReaderOptions, WktReader, DEFAULT_MAX_DEPTH,
};
pub use writer::{
    write_geometry, write_geometry_with_srid, write_wkt, MultiPointStyle, WktWriter,
    WriterOptions,
};

use std::fmt;
use std::str::FromStr;

use crate::error::WktError;
use crate::geometry::{Geometry, Wkt};

/// Canonical WKT.
///
/// Formatting fails for a geometry the writer rejects; use [`write_geometry`] to see why.
impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WktWriter::new(f)
            .write_geometry(self)
            .map_err(|_| fmt::Error)
    }
}

impl fmt::Display for Wkt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        WktWriter::new(f).write_wkt(self).map_err(|_| fmt::Error)
    }
}

impl FromStr for Geometry {
    type Err = WktError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_geometry(s)
    }
}

impl FromStr for Wkt {
    type Err = WktError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_wkt(s)
    }
}

#[cfg(test)]
mod test;
