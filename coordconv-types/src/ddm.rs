use serde::Serialize;

use crate::dd::CoordinateDd;
use crate::error::{out_of_range, CoordinateError};
use crate::geo::GeoPoint;
use crate::hemisphere::{Axis, Hemisphere};

/// Angle in whole degrees and decimal minutes with a hemisphere letter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DdmAngle {
    degrees: u16,
    minutes: f64,
    hemisphere: Hemisphere,
}

impl DdmAngle {
    /// Creates a new angle. Minutes must be in `[0, 60)`, and the angle must not exceed the maximum
    /// of the hemisphere's axis.
    pub fn new(
        degrees: u16,
        minutes: f64,
        hemisphere: Hemisphere,
    ) -> Result<Self, CoordinateError> {
        let max = hemisphere.axis().max_degrees();
        if !(minutes.is_finite() && (0.0..60.0).contains(&minutes)) {
            return Err(out_of_range("minutes", minutes));
        }

        let degrees_f = f64::from(degrees);
        if degrees_f > max || (degrees_f == max && minutes > 0.0) {
            return Err(out_of_range("degrees", degrees_f + minutes / 60.0));
        }

        Ok(Self {
            degrees,
            minutes,
            hemisphere,
        })
    }

    /// Splits signed decimal degrees into degrees and minutes.
    pub fn from_decimal(axis: Axis, value: f64) -> Result<Self, CoordinateError> {
        Ok(Self::split(axis, axis.check_degrees(value)?))
    }

    fn split(axis: Axis, value: f64) -> Self {
        let abs = value.abs();
        let degrees = abs.trunc();

        Self {
            degrees: degrees as u16,
            minutes: (abs - degrees) * 60.0,
            hemisphere: Hemisphere::of_value(axis, value),
        }
    }

    /// Signed decimal degrees.
    pub fn to_decimal(&self) -> f64 {
        self.hemisphere.signum() * (f64::from(self.degrees) + self.minutes / 60.0)
    }

    /// Whole degrees.
    pub fn degrees(&self) -> u16 {
        self.degrees
    }

    /// Decimal minutes.
    pub fn minutes(&self) -> f64 {
        self.minutes
    }

    /// Hemisphere letter.
    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }
}

/// Degrees and decimal minutes coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoordinateDdm {
    lat: DdmAngle,
    lon: DdmAngle,
}

impl CoordinateDdm {
    /// Creates a new coordinate. The angles must carry a latitude and a longitude hemisphere
    /// respectively.
    pub fn new(lat: DdmAngle, lon: DdmAngle) -> Result<Self, CoordinateError> {
        check_axis(Axis::Latitude, lat.hemisphere)?;
        check_axis(Axis::Longitude, lon.hemisphere)?;
        Ok(Self { lat, lon })
    }

    /// Angle of the given axis.
    pub fn angle(&self, axis: Axis) -> &DdmAngle {
        match axis {
            Axis::Latitude => &self.lat,
            Axis::Longitude => &self.lon,
        }
    }
}

pub(crate) fn check_axis(axis: Axis, hemisphere: Hemisphere) -> Result<(), CoordinateError> {
    if hemisphere.axis() == axis {
        Ok(())
    } else {
        Err(CoordinateError::InvalidHemisphere(hemisphere.letter()))
    }
}

impl GeoPoint for CoordinateDdm {
    fn lat(&self) -> f64 {
        self.lat.to_decimal()
    }

    fn lon(&self) -> f64 {
        self.lon.to_decimal()
    }
}

impl From<CoordinateDd> for CoordinateDdm {
    fn from(value: CoordinateDd) -> Self {
        Self {
            lat: DdmAngle::split(Axis::Latitude, value.lat()),
            lon: DdmAngle::split(Axis::Longitude, value.lon()),
        }
    }
}

impl From<CoordinateDdm> for CoordinateDd {
    fn from(value: CoordinateDdm) -> Self {
        CoordinateDd::new_unchecked(value.lat(), value.lon())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn angle_range() {
        assert!(DdmAngle::new(70, 49.12, Hemisphere::North).is_ok());
        assert!(DdmAngle::new(70, 60.0, Hemisphere::North).is_err());
        assert!(DdmAngle::new(70, -0.5, Hemisphere::North).is_err());
        assert!(DdmAngle::new(90, 0.0, Hemisphere::South).is_ok());
        assert!(DdmAngle::new(90, 0.1, Hemisphere::South).is_err());
        assert!(DdmAngle::new(120, 0.0, Hemisphere::East).is_ok());
        assert!(DdmAngle::new(120, 0.0, Hemisphere::North).is_err());
    }

    #[test]
    fn axis_is_checked() {
        let n = DdmAngle::new(10, 0.0, Hemisphere::North).unwrap();
        let e = DdmAngle::new(10, 0.0, Hemisphere::East).unwrap();
        assert!(CoordinateDdm::new(n, e).is_ok());
        assert_eq!(
            CoordinateDdm::new(e, n),
            Err(CoordinateError::InvalidHemisphere('E'))
        );
    }

    #[test]
    fn decimal_conversion() {
        let dd = CoordinateDd::new(-70.5, 40.25).unwrap();
        let ddm = CoordinateDdm::from(dd);
        assert_eq!(ddm.angle(Axis::Latitude).degrees(), 70);
        assert_abs_diff_eq!(ddm.angle(Axis::Latitude).minutes(), 30.0, epsilon = 1e-9);
        assert_eq!(ddm.angle(Axis::Latitude).hemisphere(), Hemisphere::South);
        assert_abs_diff_eq!(ddm.angle(Axis::Longitude).minutes(), 15.0, epsilon = 1e-9);

        let back = CoordinateDd::from(ddm);
        assert_abs_diff_eq!(back.lat(), -70.5, epsilon = 1e-12);
        assert_abs_diff_eq!(back.lon(), 40.25, epsilon = 1e-12);
    }
}
