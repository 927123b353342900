//! [`Hemisphere`] letters and the [`Axis`] they belong to.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::{out_of_range, CoordinateError};

/// Geographic axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// North-south position.
    Latitude,
    /// East-west position.
    Longitude,
}

impl Axis {
    /// Largest absolute value of the axis in degrees.
    pub fn max_degrees(&self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }

    /// The other axis.
    pub fn other(&self) -> Axis {
        match self {
            Axis::Latitude => Axis::Longitude,
            Axis::Longitude => Axis::Latitude,
        }
    }

    /// Field name used in errors.
    pub fn name(&self) -> &'static str {
        match self {
            Axis::Latitude => "latitude",
            Axis::Longitude => "longitude",
        }
    }

    /// Checks that the signed decimal degrees value lies on the axis.
    pub fn check_degrees(&self, value: f64) -> Result<f64, CoordinateError> {
        if value.is_finite() && value.abs() <= self.max_degrees() {
            Ok(value)
        } else {
            Err(out_of_range(self.name(), value))
        }
    }
}

/// Hemisphere letter of a geographic coordinate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hemisphere {
    /// `N`
    North,
    /// `S`
    South,
    /// `E`
    East,
    /// `W`
    West,
}

impl Hemisphere {
    /// Hemisphere for the upper-case letter `N`, `S`, `E` or `W`.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            'E' => Some(Self::East),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// Hemisphere of a signed decimal degrees value on the given axis. Zero is north/east.
    pub fn of_value(axis: Axis, value: f64) -> Self {
        match (axis, value.is_sign_negative() && value != 0.0) {
            (Axis::Latitude, false) => Self::North,
            (Axis::Latitude, true) => Self::South,
            (Axis::Longitude, false) => Self::East,
            (Axis::Longitude, true) => Self::West,
        }
    }

    /// Upper-case letter.
    pub fn letter(&self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }

    /// Axis the hemisphere belongs to.
    pub fn axis(&self) -> Axis {
        match self {
            Self::North | Self::South => Axis::Latitude,
            Self::East | Self::West => Axis::Longitude,
        }
    }

    /// South and west are negative.
    pub fn is_negative(&self) -> bool {
        matches!(self, Self::South | Self::West)
    }

    /// `-1.0` for negative hemispheres, `1.0` otherwise.
    pub fn signum(&self) -> f64 {
        if self.is_negative() {
            -1.0
        } else {
            1.0
        }
    }
}

impl Display for Hemisphere {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hemisphere_of_value() {
        assert_eq!(Hemisphere::of_value(Axis::Latitude, 10.0), Hemisphere::North);
        assert_eq!(Hemisphere::of_value(Axis::Latitude, -0.0), Hemisphere::North);
        assert_eq!(Hemisphere::of_value(Axis::Longitude, -3.5), Hemisphere::West);
        assert_eq!(Hemisphere::West.axis(), Axis::Longitude);
        assert_eq!(Hemisphere::from_letter('s'), None);
    }

    #[test]
    fn axis_range() {
        assert!(Axis::Latitude.check_degrees(-90.0).is_ok());
        assert!(Axis::Latitude.check_degrees(90.5).is_err());
        assert!(Axis::Longitude.check_degrees(180.0).is_ok());
        assert!(Axis::Longitude.check_degrees(f64::NAN).is_err());
    }
}
