use coordconv_types::CoordinateType;

use super::token::{CompiledFormat, Field, FieldDirective, FormatToken, NumberPattern, SignMode};
use crate::error::FormatError;

/// Compiles a format template for values of the given type.
///
/// The template is a mix of literal text and directive letters (see [`Field::for_letter`]).
/// Numeric directives may be followed by a number pattern: an optional sign (`+` or `-`), a run of
/// `0` (padded digit) and `#` (optional digit), and optionally `.` with another run, where `0`
/// is a mandatory and `#` an optional decimal. `\t` is a tab, `\` followed by any other character
/// emits that character as text.
///
/// ```
/// use coordconv::format::{compile, format};
/// use coordconv::{CoordinateDd, CoordinateType};
///
/// let template = compile(CoordinateType::Dd, "Y0.0#N X0.0#E").unwrap();
/// let value = CoordinateDd::new(70.49, -40.32).unwrap().into();
/// assert_eq!(format(&value, &template).unwrap(), "70.49N 40.32W");
/// ```
pub fn compile(
    coordinate_type: CoordinateType,
    template: &str,
) -> Result<CompiledFormat, FormatError> {
    if !coordinate_type.is_concrete() {
        return Err(FormatError::UnsupportedType(coordinate_type));
    }

    let chars: Vec<char> = template.chars().collect();
    let mut tokens = vec![];
    let mut literal = String::new();
    let mut position = 0;

    while position < chars.len() {
        let c = chars[position];

        if c == '\\' {
            match chars.get(position + 1) {
                Some('t') => literal.push('\t'),
                Some(&escaped) => literal.push(escaped),
                None => literal.push('\\'),
            }
            position += 2;
            continue;
        }

        if c.is_ascii_uppercase() {
            let rest = &chars[position + 1..];
            match Field::for_letter(coordinate_type, c) {
                Some(field) => {
                    let (pattern, consumed) = if field.is_numeric() {
                        read_pattern(rest).unwrap_or((NumberPattern::default(), 0))
                    } else {
                        (NumberPattern::default(), 0)
                    };

                    if !literal.is_empty() {
                        tokens.push(FormatToken::Literal(std::mem::take(&mut literal)));
                    }
                    tokens.push(FormatToken::Field(FieldDirective { field, pattern }));
                    position += 1 + consumed;
                    continue;
                }
                None if read_pattern(rest).is_some() => {
                    return Err(FormatError::UnknownDirective {
                        letter: c,
                        position,
                        coordinate_type,
                    });
                }
                None => {}
            }
        }

        literal.push(c);
        position += 1;
    }

    if !literal.is_empty() {
        tokens.push(FormatToken::Literal(literal));
    }

    log::trace!("Compiled {coordinate_type} template '{template}' into {tokens:?}");

    Ok(CompiledFormat {
        coordinate_type,
        tokens,
    })
}

fn is_digit_placeholder(c: Option<&char>) -> bool {
    matches!(c, Some('0' | '#'))
}

/// Reads a number pattern at the start of `chars`. Returns the pattern and the number of characters
/// it takes, or `None` if `chars` does not start with a pattern.
fn read_pattern(chars: &[char]) -> Option<(NumberPattern, usize)> {
    let mut pattern = NumberPattern {
        sign: SignMode::Magnitude,
        width: 0,
        min_precision: 0,
        max_precision: 0,
    };

    let mut position = 0;
    match chars.first() {
        Some('+') => pattern.sign = SignMode::Always,
        Some('-') => pattern.sign = SignMode::Negative,
        _ => {}
    }
    if pattern.sign != SignMode::Magnitude {
        position += 1;
    }

    if !is_digit_placeholder(chars.get(position)) {
        return None;
    }

    while is_digit_placeholder(chars.get(position)) {
        if chars[position] == '0' {
            pattern.width += 1;
        }
        position += 1;
    }

    if chars.get(position) == Some(&'.') && is_digit_placeholder(chars.get(position + 1)) {
        position += 1;
        while is_digit_placeholder(chars.get(position)) {
            if chars[position] == '0' {
                pattern.min_precision += 1;
            }
            pattern.max_precision += 1;
            position += 1;
        }
    }

    pattern.max_precision = pattern.max_precision.min(NumberPattern::MAX_PRECISION);
    pattern.min_precision = pattern.min_precision.min(pattern.max_precision);

    Some((pattern, position))
}
