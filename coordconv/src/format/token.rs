//! Compiled representation of a format template.

use coordconv_types::{Axis, CoordinateType};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Value field a directive renders.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Field {
    /// Decimal degrees latitude.
    Latitude,
    /// Decimal degrees longitude.
    Longitude,
    /// Hemisphere letter of an axis. UTM uses the latitude hemisphere.
    Hemisphere(Axis),
    /// Degrees of a DDM or DMS angle.
    Degrees(Axis),
    /// Minutes of a DDM or DMS angle.
    Minutes(Axis),
    /// Seconds of a DMS angle.
    Seconds(Axis),
    /// GARS longitude band number.
    LongitudeBand,
    /// GARS latitude band letters.
    LatitudeBand,
    /// GARS quadrant.
    Quadrant,
    /// GARS keypad cell.
    Keypad,
    /// Zone number, followed by the band letter for grid references.
    Zone,
    /// 100 km square letters.
    Square,
    /// Grid or UTM easting.
    Easting,
    /// Grid or UTM northing.
    Northing,
}

impl Field {
    /// Field of the given directive letter in templates of the given type.
    pub fn for_letter(coordinate_type: CoordinateType, letter: char) -> Option<Field> {
        use CoordinateType as T;
        let field = match (coordinate_type, letter) {
            (T::Dd | T::Ddm | T::Dms, 'N' | 'S') => Field::Hemisphere(Axis::Latitude),
            (T::Dd | T::Ddm | T::Dms, 'E' | 'W') => Field::Hemisphere(Axis::Longitude),
            (T::Dd, 'Y') => Field::Latitude,
            (T::Dd, 'X') => Field::Longitude,
            (T::Ddm | T::Dms, 'A') => Field::Degrees(Axis::Latitude),
            (T::Ddm | T::Dms, 'B') => Field::Minutes(Axis::Latitude),
            (T::Dms, 'C') => Field::Seconds(Axis::Latitude),
            (T::Ddm | T::Dms, 'X') => Field::Degrees(Axis::Longitude),
            (T::Ddm | T::Dms, 'Y') => Field::Minutes(Axis::Longitude),
            (T::Dms, 'Z') => Field::Seconds(Axis::Longitude),
            (T::Gars, 'X') => Field::LongitudeBand,
            (T::Gars, 'Y') => Field::LatitudeBand,
            (T::Gars, 'Q') => Field::Quadrant,
            (T::Gars, 'K') => Field::Keypad,
            (T::Mgrs | T::Usng | T::Utm, 'Z') => Field::Zone,
            (T::Mgrs | T::Usng, 'S') => Field::Square,
            (T::Mgrs | T::Usng | T::Utm, 'X') => Field::Easting,
            (T::Mgrs | T::Usng | T::Utm, 'Y') => Field::Northing,
            (T::Utm, 'H') => Field::Hemisphere(Axis::Latitude),
            _ => return None,
        };

        Some(field)
    }

    /// Numeric fields accept a number pattern after the directive letter.
    pub fn is_numeric(&self) -> bool {
        !matches!(
            self,
            Field::Hemisphere(_) | Field::LatitudeBand | Field::Square
        )
    }
}

/// How the sign of a numeric field is printed.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SignMode {
    /// Only the magnitude is printed; the hemisphere letter carries the sign.
    #[default]
    Magnitude,
    /// `-` for negative values (pattern prefix `-`).
    Negative,
    /// `+` or `-` (pattern prefix `+`).
    Always,
}

/// Number layout of a numeric directive, e.g. `0.0#` or `+000`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumberPattern {
    /// Sign printing.
    pub sign: SignMode,
    /// Minimum number of integer digits, padded with zeros.
    pub width: usize,
    /// Number of decimals always printed.
    pub min_precision: usize,
    /// Largest number of decimals printed. Trailing zeros beyond `min_precision` are trimmed.
    pub max_precision: usize,
}

impl NumberPattern {
    /// Largest supported number of decimals.
    pub const MAX_PRECISION: usize = 9;
}

impl Default for NumberPattern {
    /// Pattern of a bare directive: no padding and up to six optional decimals.
    fn default() -> Self {
        Self {
            sign: SignMode::Magnitude,
            width: 0,
            min_precision: 0,
            max_precision: 6,
        }
    }
}

/// A directive of a compiled template.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldDirective {
    /// Rendered field.
    pub field: Field,
    /// Number layout. Ignored by text fields.
    pub pattern: NumberPattern,
}

/// Element of a compiled template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormatToken {
    /// Text emitted verbatim.
    Literal(String),
    /// Field rendered from the value.
    Field(FieldDirective),
}

/// Template compiled for a coordinate type. See [`compile`](super::compile).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompiledFormat {
    pub(crate) coordinate_type: CoordinateType,
    pub(crate) tokens: Vec<FormatToken>,
}

impl CompiledFormat {
    /// Type the template was compiled for.
    pub fn coordinate_type(&self) -> CoordinateType {
        self.coordinate_type
    }

    /// Tokens in output order.
    pub fn tokens(&self) -> &[FormatToken] {
        &self.tokens
    }

    /// Directives in output order.
    pub fn directives(&self) -> impl Iterator<Item = &FieldDirective> {
        self.tokens.iter().filter_map(|token| match token {
            FormatToken::Field(directive) => Some(directive),
            FormatToken::Literal(_) => None,
        })
    }
}
