//! Error types used by the crate.

use coordconv_types::CoordinateType;
use thiserror::Error;

use crate::format::Field;

/// Broken format template. These errors point at the template, not at the coordinate data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A letter that is not a directive of the template's notation is used with a number pattern.
    #[error("unknown directive '{letter}' at position {position} of a {coordinate_type} template")]
    UnknownDirective {
        /// The offending letter.
        letter: char,
        /// Character position of the letter in the template.
        position: usize,
        /// Notation the template was compiled for.
        coordinate_type: CoordinateType,
    },
    /// The template references a field the formatted value does not have.
    #[error("{coordinate_type} value has no {field:?} field")]
    FieldMismatch {
        /// The referenced field.
        field: Field,
        /// Notation of the formatted value.
        coordinate_type: CoordinateType,
    },
    /// Templates cannot be compiled for this coordinate type.
    #[error("coordinate type {0} has no format grammar")]
    UnsupportedType(CoordinateType),
}

/// Error converting a coordinate from one notation into another.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The input text is not a coordinate in any known notation.
    #[error("'{0}' is not a valid coordinate")]
    InvalidInput(String),
    /// Converting between these notations needs a reprojection, which is not done by this crate.
    #[error("cannot convert {from} coordinate into {to}")]
    NotConvertible {
        /// Source notation.
        from: CoordinateType,
        /// Target notation.
        to: CoordinateType,
    },
    /// The target template is broken.
    #[error(transparent)]
    Format(#[from] FormatError),
}
