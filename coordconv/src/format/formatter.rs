use coordconv_types::grid::MAX_PRECISION as MAX_GRID_PRECISION;
use coordconv_types::{Axis, CoordinateValue, DdmAngle, DmsAngle, GeoPoint};

use super::token::{CompiledFormat, Field, FieldDirective, FormatToken, NumberPattern, SignMode};
use crate::error::FormatError;

/// Renders the value through a compiled template.
///
/// Numbers are rounded half away from zero at the precision of their directive. For DDM and DMS
/// values the deepest angle component the template shows for an axis receives the fractional part,
/// and rounding carries into the larger components, so `59.96"` printed with one decimal becomes
/// the next minute.
///
/// A bare `X` or `Y` directive prints an MGRS or USNG offset at the precision the reference was
/// given with, so `4QFJ8562` formats back to `8562`. A directive with a pattern prints metres.
///
/// Fails with [`FormatError::FieldMismatch`] if the template references a field the value does not
/// have.
pub fn format(value: &CoordinateValue, compiled: &CompiledFormat) -> Result<String, FormatError> {
    let plans = [
        AnglePlan::for_axis(value, compiled, Axis::Latitude),
        AnglePlan::for_axis(value, compiled, Axis::Longitude),
    ];

    let mut out = String::new();
    for token in compiled.tokens() {
        match token {
            FormatToken::Literal(text) => out.push_str(text),
            FormatToken::Field(directive) => render_field(value, directive, &plans, &mut out)?,
        }
    }

    Ok(out)
}

fn render_field(
    value: &CoordinateValue,
    directive: &FieldDirective,
    plans: &[Option<AnglePlan>; 2],
    out: &mut String,
) -> Result<(), FormatError> {
    let pattern = &directive.pattern;
    let mismatch = || FormatError::FieldMismatch {
        field: directive.field,
        coordinate_type: value.coordinate_type(),
    };

    match (value, directive.field) {
        (CoordinateValue::Dd(v), Field::Latitude) => write_decimal(out, v.lat(), pattern),
        (CoordinateValue::Dd(v), Field::Longitude) => write_decimal(out, v.lon(), pattern),
        (CoordinateValue::Dd(v), Field::Hemisphere(axis)) => out.push(v.hemisphere(axis).letter()),
        (CoordinateValue::Ddm(v), Field::Hemisphere(axis)) => {
            out.push(v.angle(axis).hemisphere().letter())
        }
        (CoordinateValue::Dms(v), Field::Hemisphere(axis)) => {
            out.push(v.angle(axis).hemisphere().letter())
        }
        (CoordinateValue::Ddm(_), Field::Degrees(axis) | Field::Minutes(axis))
        | (
            CoordinateValue::Dms(_),
            Field::Degrees(axis) | Field::Minutes(axis) | Field::Seconds(axis),
        ) => {
            let depth = Depth::of(directive.field).ok_or_else(mismatch)?;
            let plan = plans[axis_index(axis)].as_ref().ok_or_else(mismatch)?;
            plan.write(out, depth, pattern);
        }
        (CoordinateValue::Gars(v), Field::LongitudeBand) => {
            write_integer(out, u64::from(v.lon_band()), pattern)
        }
        (CoordinateValue::Gars(v), Field::LatitudeBand) => out.push_str(&v.lat_band()),
        (CoordinateValue::Gars(v), Field::Quadrant) => {
            write_integer(out, u64::from(v.quadrant()), pattern)
        }
        (CoordinateValue::Gars(v), Field::Keypad) => {
            write_integer(out, u64::from(v.key()), pattern)
        }
        (CoordinateValue::Mgrs(v) | CoordinateValue::Usng(v), Field::Zone) => {
            write_integer(out, u64::from(v.zone().number()), pattern);
            out.push(v.zone().band());
        }
        (CoordinateValue::Mgrs(v) | CoordinateValue::Usng(v), Field::Square) => {
            out.push(v.square().column());
            out.push(v.square().row());
        }
        (CoordinateValue::Mgrs(v) | CoordinateValue::Usng(v), Field::Easting) => {
            write_grid_digits(out, v.easting(), v.precision(), pattern)
        }
        (CoordinateValue::Mgrs(v) | CoordinateValue::Usng(v), Field::Northing) => {
            write_grid_digits(out, v.northing(), v.precision(), pattern)
        }
        (CoordinateValue::Utm(v), Field::Zone) => write_integer(out, u64::from(v.zone()), pattern),
        (CoordinateValue::Utm(v), Field::Hemisphere(Axis::Latitude)) => {
            out.push(v.hemisphere().letter())
        }
        (CoordinateValue::Utm(v), Field::Easting) => write_decimal(out, v.easting(), pattern),
        (CoordinateValue::Utm(v), Field::Northing) => write_decimal(out, v.northing(), pattern),
        _ => return Err(mismatch()),
    }

    Ok(())
}

fn axis_index(axis: Axis) -> usize {
    match axis {
        Axis::Latitude => 0,
        Axis::Longitude => 1,
    }
}

/// Angle component, ordered from the largest unit to the smallest.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Depth {
    Degrees,
    Minutes,
    Seconds,
}

impl Depth {
    fn of(field: Field) -> Option<Depth> {
        match field {
            Field::Degrees(_) => Some(Depth::Degrees),
            Field::Minutes(_) => Some(Depth::Minutes),
            Field::Seconds(_) => Some(Depth::Seconds),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone)]
struct AngleParts {
    degrees: u16,
    minutes: f64,
    seconds: f64,
    negative: bool,
}

impl From<&DdmAngle> for AngleParts {
    fn from(angle: &DdmAngle) -> Self {
        Self {
            degrees: angle.degrees(),
            minutes: angle.minutes(),
            seconds: 0.0,
            negative: angle.hemisphere().is_negative(),
        }
    }
}

impl From<&DmsAngle> for AngleParts {
    fn from(angle: &DmsAngle) -> Self {
        Self {
            degrees: angle.degrees(),
            minutes: f64::from(angle.minutes()),
            seconds: angle.seconds(),
            negative: angle.hemisphere().is_negative(),
        }
    }
}

/// Rounded components of one axis, computed for the deepest component the template shows.
#[derive(Debug, Copy, Clone)]
struct AnglePlan {
    negative: bool,
    depth: Depth,
    precision: usize,
    degrees: u64,
    minutes: u64,
    seconds: u64,
    fraction: u64,
}

impl AnglePlan {
    fn for_axis(value: &CoordinateValue, compiled: &CompiledFormat, axis: Axis) -> Option<Self> {
        let (parts, max_depth) = match value {
            CoordinateValue::Ddm(v) => (AngleParts::from(v.angle(axis)), Depth::Minutes),
            CoordinateValue::Dms(v) => (AngleParts::from(v.angle(axis)), Depth::Seconds),
            _ => return None,
        };

        let mut deepest: Option<(Depth, &NumberPattern)> = None;
        for directive in compiled.directives() {
            let on_axis = matches!(
                directive.field,
                Field::Degrees(a) | Field::Minutes(a) | Field::Seconds(a) if a == axis
            );
            let Some(depth) = Depth::of(directive.field).filter(|d| on_axis && *d <= max_depth)
            else {
                continue;
            };

            if deepest.map_or(true, |(current, _)| depth > current) {
                deepest = Some((depth, &directive.pattern));
            }
        }

        let (depth, pattern) = deepest?;
        Some(Self::new(parts, depth, pattern.max_precision))
    }

    fn new(parts: AngleParts, depth: Depth, precision: usize) -> Self {
        let degrees = f64::from(parts.degrees);
        let total = match depth {
            Depth::Degrees => degrees + parts.minutes / 60.0 + parts.seconds / 3600.0,
            Depth::Minutes => degrees * 60.0 + parts.minutes + parts.seconds / 60.0,
            Depth::Seconds => degrees * 3600.0 + parts.minutes * 60.0 + parts.seconds,
        };

        let scale = scale(precision);
        let scaled = round_scaled(total, precision);
        let whole = scaled / scale;
        let (degrees, minutes, seconds) = match depth {
            Depth::Degrees => (whole, 0, 0),
            Depth::Minutes => (whole / 60, whole % 60, 0),
            Depth::Seconds => (whole / 3600, whole / 60 % 60, whole % 60),
        };

        Self {
            negative: parts.negative && scaled != 0,
            depth,
            precision,
            degrees,
            minutes,
            seconds,
            fraction: scaled % scale,
        }
    }

    fn write(&self, out: &mut String, depth: Depth, pattern: &NumberPattern) {
        let whole = match depth {
            Depth::Degrees => self.degrees,
            Depth::Minutes => self.minutes,
            Depth::Seconds => self.seconds,
        };
        let negative = self.negative && depth == Depth::Degrees;

        if depth == self.depth {
            write_number(out, negative, whole, self.fraction, self.precision, pattern);
        } else {
            write_number(out, negative, whole, 0, 0, pattern);
        }
    }
}

fn scale(precision: usize) -> u64 {
    10u64.pow(precision as u32)
}

/// Rounds `|value| * 10^precision` half away from zero on the 15 significant decimal digits of
/// `value`, so that typed decimals such as `70.445` land on the half they were written as.
fn round_scaled(value: f64, precision: usize) -> u64 {
    let text = format!("{:.14e}", value.abs());
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return 0;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return 0;
    };
    let digits = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u64, |acc, digit| acc * 10 + u64::from(digit - b'0'));

    let shift = exponent - 14 + precision as i32;
    if shift >= 0 {
        return 10u64
            .checked_pow(shift as u32)
            .map_or(u64::MAX, |factor| digits.saturating_mul(factor));
    }

    match 10u64.checked_pow(shift.unsigned_abs()) {
        Some(divisor) => {
            let whole = digits / divisor;
            if (digits % divisor) * 2 >= divisor {
                whole + 1
            } else {
                whole
            }
        }
        None => 0,
    }
}

fn write_decimal(out: &mut String, value: f64, pattern: &NumberPattern) {
    let precision = pattern.max_precision;
    let scaled = round_scaled(value, precision);
    let scale = scale(precision);
    write_number(
        out,
        value < 0.0 && scaled != 0,
        scaled / scale,
        scaled % scale,
        precision,
        pattern,
    );
}

fn write_integer(out: &mut String, value: u64, pattern: &NumberPattern) {
    write_number(out, false, value, 0, 0, pattern);
}

/// A bare directive prints a grid offset with as many digits as the reference was given with.
/// Explicit patterns print metres.
fn write_grid_digits(out: &mut String, metres: u32, precision: u8, pattern: &NumberPattern) {
    if *pattern != NumberPattern::default() {
        write_integer(out, u64::from(metres), pattern);
        return;
    }

    let precision = precision.min(MAX_GRID_PRECISION);
    if precision == 0 {
        return;
    }
    let digits = metres / 10u32.pow(u32::from(MAX_GRID_PRECISION - precision));
    out.push_str(&format!("{digits:0width$}", width = usize::from(precision)));
}

/// Writes `whole.fraction`, where `fraction` has `precision` digits. Trailing zeros of the fraction
/// are trimmed down to the pattern's mandatory decimals.
fn write_number(
    out: &mut String,
    negative: bool,
    whole: u64,
    fraction: u64,
    precision: usize,
    pattern: &NumberPattern,
) {
    match pattern.sign {
        SignMode::Always if negative => out.push('-'),
        SignMode::Always => out.push('+'),
        SignMode::Negative if negative => out.push('-'),
        SignMode::Negative | SignMode::Magnitude => {}
    }

    out.push_str(&format!("{whole:0width$}", width = pattern.width));

    if precision > 0 {
        let digits = format!("{fraction:0precision$}");
        let significant = digits.trim_end_matches('0').len();
        let keep = significant.max(pattern.min_precision.min(precision));
        if keep > 0 {
            out.push('.');
            out.push_str(&digits[..keep]);
        }
    }
}
