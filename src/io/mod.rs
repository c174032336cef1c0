//! Reading Oracle `SDO_GEOMETRY` values and interoperability with the `geo` crate.

pub mod geo;
pub mod sdo;
