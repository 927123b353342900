use serde::Serialize;

use crate::dd::CoordinateDd;
use crate::ddm::check_axis;
use crate::error::{out_of_range, CoordinateError};
use crate::geo::GeoPoint;
use crate::hemisphere::{Axis, Hemisphere};

/// Angle in whole degrees, whole minutes and decimal seconds with a hemisphere letter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DmsAngle {
    degrees: u16,
    minutes: u8,
    seconds: f64,
    hemisphere: Hemisphere,
}

impl DmsAngle {
    /// Creates a new angle. Minutes must be in `[0, 59]`, seconds in `[0, 60)`, and the angle must not
    /// exceed the maximum of the hemisphere's axis.
    pub fn new(
        degrees: u16,
        minutes: u8,
        seconds: f64,
        hemisphere: Hemisphere,
    ) -> Result<Self, CoordinateError> {
        if minutes >= 60 {
            return Err(out_of_range("minutes", minutes));
        }

        if !(seconds.is_finite() && (0.0..60.0).contains(&seconds)) {
            return Err(out_of_range("seconds", seconds));
        }

        let max = hemisphere.axis().max_degrees();
        let degrees_f = f64::from(degrees);
        if degrees_f > max || (degrees_f == max && (minutes > 0 || seconds > 0.0)) {
            return Err(out_of_range(
                "degrees",
                degrees_f + f64::from(minutes) / 60.0 + seconds / 3600.0,
            ));
        }

        Ok(Self {
            degrees,
            minutes,
            seconds,
            hemisphere,
        })
    }

    /// Splits signed decimal degrees into degrees, minutes and seconds.
    pub fn from_decimal(axis: Axis, value: f64) -> Result<Self, CoordinateError> {
        Ok(Self::split(axis, axis.check_degrees(value)?))
    }

    fn split(axis: Axis, value: f64) -> Self {
        let total_seconds = value.abs() * 3600.0;
        let degrees = (total_seconds / 3600.0).floor();
        let remainder = total_seconds - degrees * 3600.0;
        let minutes = (remainder / 60.0).floor().min(59.0);
        let seconds = (remainder - minutes * 60.0).clamp(0.0, 60.0 - 1e-9);

        Self {
            degrees: degrees as u16,
            minutes: minutes as u8,
            seconds,
            hemisphere: Hemisphere::of_value(axis, value),
        }
    }

    /// Signed decimal degrees.
    pub fn to_decimal(&self) -> f64 {
        self.hemisphere.signum()
            * (f64::from(self.degrees) + f64::from(self.minutes) / 60.0 + self.seconds / 3600.0)
    }

    /// Whole degrees.
    pub fn degrees(&self) -> u16 {
        self.degrees
    }

    /// Whole minutes.
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Decimal seconds.
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Hemisphere letter.
    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }
}

/// Degrees, minutes and seconds coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoordinateDms {
    lat: DmsAngle,
    lon: DmsAngle,
}

impl CoordinateDms {
    /// Creates a new coordinate. The angles must carry a latitude and a longitude hemisphere
    /// respectively.
    pub fn new(lat: DmsAngle, lon: DmsAngle) -> Result<Self, CoordinateError> {
        check_axis(Axis::Latitude, lat.hemisphere)?;
        check_axis(Axis::Longitude, lon.hemisphere)?;
        Ok(Self { lat, lon })
    }

    /// Angle of the given axis.
    pub fn angle(&self, axis: Axis) -> &DmsAngle {
        match axis {
            Axis::Latitude => &self.lat,
            Axis::Longitude => &self.lon,
        }
    }
}

impl GeoPoint for CoordinateDms {
    fn lat(&self) -> f64 {
        self.lat.to_decimal()
    }

    fn lon(&self) -> f64 {
        self.lon.to_decimal()
    }
}

impl From<CoordinateDd> for CoordinateDms {
    fn from(value: CoordinateDd) -> Self {
        Self {
            lat: DmsAngle::split(Axis::Latitude, value.lat()),
            lon: DmsAngle::split(Axis::Longitude, value.lon()),
        }
    }
}

impl From<CoordinateDms> for CoordinateDd {
    fn from(value: CoordinateDms) -> Self {
        CoordinateDd::new_unchecked(value.lat(), value.lon())
    }
}
