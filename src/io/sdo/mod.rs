//! A reader for Oracle Spatial `SDO_GEOMETRY` values.
//!
//! An `SDO_GEOMETRY` is made of a type code (`SDO_GTYPE`), an optional inline point
//! (`SDO_POINT`), an element info array (`SDO_ELEM_INFO`) of `(offset, etype, interpretation)`
//! triplets and a flat ordinate array (`SDO_ORDINATES`). Decoding runs in four steps: the type
//! code is resolved into a coordinate layout, the element info array is walked into
//! [`Element`]s, every element is assembled into a shape, and the shapes are grouped into a
//! [`Geometry`][crate::scalar::Geometry] of the declared kind.

mod api;
mod common;
pub(crate) mod element;
pub(crate) mod gtype;
pub(crate) mod reader;

pub use api::{from_sdo, SdoGeometry, SdoPoint, SdoReader, SdoReaderOptions};
pub use common::{ElementType, SdoGeometryKind, SegmentInterpretation};
pub use element::{Element, ElementKind, ElementWalker, OrdinateSpan, RingRole};
pub use gtype::{apply_dimension_limit, SdoTypeCode};
