//! A reader and writer for the [Well-Known Text](https://www.ogc.org/standard/sfa/) encoding of
//! simple-features geometries, covering the linear, curved, and surface types together with
//! `Z`, `M`, and `ZM` dimensions and an optional `SRID=<n>;` prefix.
//!
//! ```
//! use simple_features_wkt::{read_geometry, write_geometry, Dimension};
//!
//! let geometry = read_geometry("POINT Z (1 2 3)").unwrap();
//! assert_eq!(geometry.dim(), Dimension::XYZ);
//! assert_eq!(write_geometry(&geometry).unwrap(), "POINT Z (1.0 2.0 3.0)");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use datatypes::{Dimension, GeometryType};
pub use error::{Result, WktError};
pub use geometry::{Geometry, Wkt};
pub use io::wkt::{read_geometry, read_wkt, write_geometry, write_wkt};

pub mod datatypes;
pub mod error;
pub mod geometry;
pub mod io;
#[cfg(test)]
pub(crate) mod test;
