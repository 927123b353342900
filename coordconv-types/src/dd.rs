use serde::Serialize;

use crate::error::CoordinateError;
use crate::geo::GeoPoint;
use crate::hemisphere::{Axis, Hemisphere};

/// Decimal degrees coordinate. Negative latitude is south, negative longitude is west.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoordinateDd {
    lat: f64,
    lon: f64,
}

impl CoordinateDd {
    /// Creates a new coordinate, checking that both values are in range.
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordinateError> {
        Ok(Self {
            lat: Axis::Latitude.check_degrees(lat)?,
            lon: Axis::Longitude.check_degrees(lon)?,
        })
    }

    pub(crate) fn new_unchecked(lat: f64, lon: f64) -> Self {
        debug_assert!(lat.abs() <= 90.0 && lon.abs() <= 180.0);
        Self { lat, lon }
    }

    /// Copies the position of any geo point.
    pub fn from_point(point: &impl GeoPoint) -> Result<Self, CoordinateError> {
        Self::new(point.lat(), point.lon())
    }

    /// Signed value of the given axis.
    pub fn value(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Latitude => self.lat,
            Axis::Longitude => self.lon,
        }
    }

    /// Hemisphere of the given axis.
    pub fn hemisphere(&self, axis: Axis) -> Hemisphere {
        Hemisphere::of_value(axis, self.value(axis))
    }
}

impl GeoPoint for CoordinateDd {
    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn range_is_checked() {
        assert!(CoordinateDd::new(70.49, -40.32).is_ok());
        assert_matches!(
            CoordinateDd::new(91.0, 0.0),
            Err(CoordinateError::OutOfRange {
                field: "latitude",
                ..
            })
        );
        assert_matches!(
            CoordinateDd::new(0.0, -180.01),
            Err(CoordinateError::OutOfRange {
                field: "longitude",
                ..
            })
        );
    }

    #[test]
    fn hemispheres() {
        let dd = CoordinateDd::new(-12.0, 40.0).unwrap();
        assert_eq!(dd.hemisphere(Axis::Latitude), Hemisphere::South);
        assert_eq!(dd.hemisphere(Axis::Longitude), Hemisphere::East);
    }
}
