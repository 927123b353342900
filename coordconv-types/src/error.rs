//! Error type used by the crate.

use thiserror::Error;

/// Error returned when a coordinate value cannot be constructed from the given parts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    /// Numeric field is outside of the legal range of its coordinate system.
    #[error("{field} value {value} is out of range")]
    OutOfRange {
        /// Name of the field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// Letter is not allowed at this position of a grid or cell designator.
    #[error("invalid {field} letter '{letter}'")]
    InvalidLetter {
        /// Name of the field.
        field: &'static str,
        /// Rejected letter.
        letter: char,
    },
    /// Hemisphere does not belong to the axis it is used for.
    #[error("hemisphere '{0}' cannot be used here")]
    InvalidHemisphere(char),
}

pub(crate) fn out_of_range(field: &'static str, value: impl Into<f64>) -> CoordinateError {
    CoordinateError::OutOfRange {
        field,
        value: value.into(),
    }
}
