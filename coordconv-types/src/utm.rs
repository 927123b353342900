use serde::Serialize;

use crate::error::{out_of_range, CoordinateError};
use crate::hemisphere::Hemisphere;

const MAX_EASTING: f64 = 1_000_000.0;
const MAX_NORTHING: f64 = 10_000_000.0;

/// Universal Transverse Mercator coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoordinateUtm {
    zone: u8,
    hemisphere: Hemisphere,
    easting: f64,
    northing: f64,
}

impl CoordinateUtm {
    /// Creates a new coordinate. The zone must be in `1..=60`, the hemisphere north or south, the
    /// easting in `(0, 1000000)` m and the northing in `[0, 10000000]` m.
    pub fn new(
        zone: u8,
        hemisphere: Hemisphere,
        easting: f64,
        northing: f64,
    ) -> Result<Self, CoordinateError> {
        if !(1..=60).contains(&zone) {
            return Err(out_of_range("zone", zone));
        }

        if !matches!(hemisphere, Hemisphere::North | Hemisphere::South) {
            return Err(CoordinateError::InvalidHemisphere(hemisphere.letter()));
        }

        if !(easting.is_finite() && easting > 0.0 && easting < MAX_EASTING) {
            return Err(out_of_range("easting", easting));
        }

        if !(northing.is_finite() && (0.0..=MAX_NORTHING).contains(&northing)) {
            return Err(out_of_range("northing", northing));
        }

        Ok(Self {
            zone,
            hemisphere,
            easting,
            northing,
        })
    }

    /// Zone number.
    pub fn zone(&self) -> u8 {
        self.zone
    }

    /// North or south.
    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    /// Easting in metres.
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Northing in metres.
    pub fn northing(&self) -> f64 {
        self.northing
    }
}
