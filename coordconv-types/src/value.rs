//! See [`CoordinateValue`].

use serde::Serialize;

use crate::coordinate_type::CoordinateType;
use crate::dd::CoordinateDd;
use crate::ddm::CoordinateDdm;
use crate::dms::CoordinateDms;
use crate::gars::CoordinateGars;
use crate::grid::GridReference;
use crate::utm::CoordinateUtm;

/// A validated coordinate in one of the supported notations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum CoordinateValue {
    /// Decimal degrees.
    Dd(CoordinateDd),
    /// Degrees and decimal minutes.
    Ddm(CoordinateDdm),
    /// Degrees, minutes and seconds.
    Dms(CoordinateDms),
    /// GARS cell.
    Gars(CoordinateGars),
    /// MGRS grid reference.
    Mgrs(GridReference),
    /// USNG grid reference.
    Usng(GridReference),
    /// UTM coordinate.
    Utm(CoordinateUtm),
}

impl CoordinateValue {
    /// Notation of the value.
    pub fn coordinate_type(&self) -> CoordinateType {
        match self {
            CoordinateValue::Dd(_) => CoordinateType::Dd,
            CoordinateValue::Ddm(_) => CoordinateType::Ddm,
            CoordinateValue::Dms(_) => CoordinateType::Dms,
            CoordinateValue::Gars(_) => CoordinateType::Gars,
            CoordinateValue::Mgrs(_) => CoordinateType::Mgrs,
            CoordinateValue::Usng(_) => CoordinateType::Usng,
            CoordinateValue::Utm(_) => CoordinateType::Utm,
        }
    }

    /// Geographic position of the value. Grid and projected notations return `None`, since getting
    /// their position requires a reprojection.
    pub fn to_dd(&self) -> Option<CoordinateDd> {
        match self {
            CoordinateValue::Dd(v) => Some(*v),
            CoordinateValue::Ddm(v) => Some((*v).into()),
            CoordinateValue::Dms(v) => Some((*v).into()),
            CoordinateValue::Gars(v) => Some((*v).into()),
            CoordinateValue::Mgrs(_) | CoordinateValue::Usng(_) | CoordinateValue::Utm(_) => None,
        }
    }

    /// Grid reference of MGRS and USNG values.
    pub fn grid_reference(&self) -> Option<&GridReference> {
        match self {
            CoordinateValue::Mgrs(v) | CoordinateValue::Usng(v) => Some(v),
            _ => None,
        }
    }
}

impl From<CoordinateDd> for CoordinateValue {
    fn from(value: CoordinateDd) -> Self {
        Self::Dd(value)
    }
}

impl From<CoordinateDdm> for CoordinateValue {
    fn from(value: CoordinateDdm) -> Self {
        Self::Ddm(value)
    }
}

impl From<CoordinateDms> for CoordinateValue {
    fn from(value: CoordinateDms) -> Self {
        Self::Dms(value)
    }
}

impl From<CoordinateGars> for CoordinateValue {
    fn from(value: CoordinateGars) -> Self {
        Self::Gars(value)
    }
}

impl From<CoordinateUtm> for CoordinateValue {
    fn from(value: CoordinateUtm) -> Self {
        Self::Utm(value)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::geo::GeoPoint;
    use crate::grid::{GridZone, SquareId};

    #[test]
    fn geographic_values_have_position() {
        let gars = CoordinateGars::new(221, "LW", 3, 7).unwrap();
        let dd = CoordinateValue::from(gars).to_dd().unwrap();
        assert_abs_diff_eq!(dd.lat(), 40.041_666_667, epsilon = 1e-9);
        assert_eq!(
            CoordinateValue::from(gars).coordinate_type(),
            CoordinateType::Gars
        );

        let reference = GridReference::new(
            GridZone::new(19, 'T').unwrap(),
            SquareId::new('D', 'E').unwrap(),
            14639,
            28236,
        )
        .unwrap();
        assert_eq!(CoordinateValue::Usng(reference).to_dd(), None);
        assert_eq!(
            CoordinateValue::Mgrs(reference).grid_reference(),
            Some(&reference)
        );
    }
}
