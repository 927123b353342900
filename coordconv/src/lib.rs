//! Coordconv reads coordinates written by people in the common notations (decimal degrees, degrees
//! and minutes, degrees minutes and seconds, GARS, MGRS, USNG and UTM) and writes them back through
//! user defined format templates.
//!
//! # Quick start
//!
//! ```
//! use coordconv::{CoordinateConverter, ConverterConfig, CoordinateType};
//!
//! let converter = CoordinateConverter::new(ConverterConfig::default());
//!
//! let value = converter.parse("70.49N, 40.32W").unwrap();
//! assert_eq!(value.coordinate_type(), CoordinateType::Dd);
//! assert_eq!(converter.format_with(&value, "Y-0.000 X-0.000").unwrap(), "70.490 -40.320");
//! ```
//!
//! # Main components
//!
//! * [`parse`] contains a grammar for every notation. Parsing text is not always unambiguous: a
//!   pair of numbers without hemisphere letters can be latitude first or longitude first, and a
//!   grid reference is both a valid MGRS and USNG reference. All readings are returned as
//!   [`Candidate`]s and
//! * [`AmbiguityResolver`] picks one of them, either by asking an [`AmbiguityListener`] or by the
//!   preferred notation of the configuration.
//! * [`format`] compiles templates like `A0° B0' C0.0"N X0° Y0' Z0.0"E` and renders values with
//!   them.
//!
//! [`CoordinateConverter`] puts these together according to a [`ConverterConfig`].
//!
//! Value types live in the [`coordconv_types`] crate and are reexported here.

mod ambiguity;
mod config;
mod converter;
pub mod error;
pub mod format;
pub mod parse;

pub use ambiguity::{AmbiguityListener, AmbiguityResolver, AmbiguousEventArgs, Resolution};
pub use config::{ConverterConfig, OutputCoordinate};
pub use converter::{convert_value, CoordinateConverter};
pub use coordconv_types::{
    Axis, CoordinateDd, CoordinateDdm, CoordinateDms, CoordinateGars, CoordinateType,
    CoordinateUtm, CoordinateValue, DdmAngle, DmsAngle, GeoPoint, GridReference, GridZone,
    Hemisphere, SquareId,
};
pub use error::{ConvertError, FormatError};
pub use parse::{AxisOrder, Candidate, ParseOutcome};

// Reexport coordconv_types
pub use coordconv_types;
