use crate::datatypes::{CoordLayout, Dimension};
use crate::error::{FormatError, Result};
use crate::io::sdo::SdoGeometryKind;
use crate::scalar::Coord;

/// A resolved `SDO_GTYPE`.
///
/// The type code is written as the decimal digits `D L TT`: the number of ordinates per
/// coordinate `D` (2 to 4), the position of the measure ordinate `L` (0 when there is none) and
/// the geometry kind `TT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SdoTypeCode {
    gtype: i32,
    dimension: usize,
    measure_position: Option<usize>,
    kind: SdoGeometryKind,
}

impl SdoTypeCode {
    pub fn resolve(gtype: i32) -> Result<Self> {
        let bad = |reason| FormatError::BadTypeCode { gtype, reason };

        if gtype < 0 {
            return Err(bad("type code is negative").into());
        }

        let kind = SdoGeometryKind::try_from(gtype % 100)
            .map_err(|_| bad("geometry kind must be between 01 and 07"))?;

        let dimension = (gtype / 1000) as usize;
        if !(2..=4).contains(&dimension) {
            return Err(bad("dimension must be 2, 3 or 4").into());
        }

        let measure_position = match ((gtype / 100) % 10) as usize {
            0 => None,
            l if (3..=dimension).contains(&l) => Some(l),
            _ => return Err(bad("measure position must be 0 or between 3 and the dimension").into()),
        };

        Ok(Self {
            gtype,
            dimension,
            measure_position,
            kind,
        })
    }

    pub fn gtype(&self) -> i32 {
        self.gtype
    }

    pub fn kind(&self) -> SdoGeometryKind {
        self.kind
    }

    /// Number of ordinates per coordinate in the ordinate array.
    pub fn num_ordinates(&self) -> usize {
        self.dimension
    }

    /// 1-based position of the measure ordinate, if any.
    pub fn measure_position(&self) -> Option<usize> {
        self.measure_position
    }

    /// Where `z` and `m` sit in each coordinate of the ordinate array.
    ///
    /// A three-ordinate type code stores `x, y, z` unless the measure position is 3. A
    /// four-ordinate type code stores `x, y, z, m`, or `x, y, m, z` when the measure position
    /// is 3.
    pub fn layout(&self) -> CoordLayout {
        match (self.dimension, self.measure_position) {
            (3, None) => CoordLayout::new(3, Some(2), None),
            (3, Some(_)) => CoordLayout::new(3, None, Some(2)),
            (4, Some(3)) => CoordLayout::new(4, Some(3), Some(2)),
            (4, _) => CoordLayout::new(4, Some(2), Some(3)),
            _ => CoordLayout::new(2, None, None),
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.layout().dimension()
    }
}

/// Truncate a coordinate to at most `max_dim` ordinates.
///
/// `x` and `y` are always kept, followed by `z` and then `m` while they are present and the limit
/// is not reached. A limit above the number of ordinates of `coord` keeps it unchanged.
pub fn apply_dimension_limit(coord: &Coord, max_dim: usize) -> Coord {
    coord.limit_dimension(max_dim)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::SdoError;

    #[test]
    fn resolve_digits() {
        let tc = SdoTypeCode::resolve(4302).unwrap();
        assert_eq!(tc.kind(), SdoGeometryKind::Line);
        assert_eq!(tc.num_ordinates(), 4);
        assert_eq!(tc.measure_position(), Some(3));
        assert_eq!(tc.dimension(), Dimension::XYZM);

        let tc = SdoTypeCode::resolve(2007).unwrap();
        assert_eq!(tc.kind(), SdoGeometryKind::MultiPolygon);
        assert_eq!(tc.dimension(), Dimension::XY);
    }

    #[test]
    fn layouts() {
        let layout = |gtype| SdoTypeCode::resolve(gtype).unwrap().layout();
        assert_eq!(layout(2001), CoordLayout::new(2, None, None));
        assert_eq!(layout(3001), CoordLayout::new(3, Some(2), None));
        assert_eq!(layout(3302), CoordLayout::new(3, None, Some(2)));
        assert_eq!(layout(4002), CoordLayout::new(4, Some(2), Some(3)));
        assert_eq!(layout(4402), CoordLayout::new(4, Some(2), Some(3)));
        assert_eq!(layout(4302), CoordLayout::new(4, Some(3), Some(2)));
    }

    #[test]
    fn bad_type_codes() {
        for gtype in [-2001, 2000, 2008, 2099, 1001, 5001, 2301, 3401, 4501, 3201] {
            let err = SdoTypeCode::resolve(gtype).unwrap_err();
            assert!(
                matches!(
                    err,
                    SdoError::Format(FormatError::BadTypeCode { gtype: g, .. }) if g == gtype
                ),
                "{gtype}"
            );
        }
    }

    #[test]
    fn dimension_limit() {
        let c = Coord::new(50., 50.).with_z(100.).with_m(200.);
        assert_eq!(apply_dimension_limit(&c, 3), Coord::new(50., 50.).with_z(100.));
        assert_eq!(apply_dimension_limit(&Coord::new(1., 2.), 4), Coord::new(1., 2.));
    }
}
