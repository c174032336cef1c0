//! A decoder for Oracle Spatial `SDO_GEOMETRY` values, plus a geometry model with circular arcs
//! and algorithms implemented on it.
//!
//! [`io::sdo::SdoReader`] turns the type code, element info and ordinate arrays of an
//! `SDO_GEOMETRY` into a [`scalar::Geometry`]. Arc elements become
//! [`scalar::CircularString`]s, and compound elements become [`scalar::CompoundCurve`]s, so
//! curves survive decoding without being densified.
//!
//! ```
//! use sdo_geometry::algorithm::geo::EuclideanLength;
//! use sdo_geometry::io::sdo::{from_sdo, SdoGeometry};
//!
//! let geom = SdoGeometry::new(2002, &[1, 2, 2], &[0., 0., 3., 4., 6., 0.]);
//! let arc = from_sdo(&geom).unwrap();
//! assert_eq!(arc.geometry_type(), "CircularString");
//! assert_eq!(arc.euclidean_length(), 10.);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use error::{FormatError, Result, SdoError};

pub mod algorithm;
pub mod datatypes;
pub mod error;
pub mod io;
pub mod scalar;
#[cfg(test)]
pub(crate) mod test;
