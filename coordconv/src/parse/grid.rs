use std::sync::LazyLock;

use coordconv_types::{GridReference, GridZone, SquareId};
use regex::Regex;

use super::{normalize, validate_numeric_match};

static GRID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<zone>[0-9]{1,2})\s*(?P<band>[A-Z])\s*(?P<column>[A-Z])(?P<row>[A-Z])\s*(?:(?P<easting>[0-9]{1,5})\s+(?P<northing>[0-9]{1,5})|(?P<digits>[0-9]{0,10}))$",
    )
    .expect("grid reference pattern is valid")
});

fn letter(text: &str) -> Option<char> {
    text.chars().next()
}

pub(super) fn parse(text: &str) -> Option<GridReference> {
    let text = normalize(text);
    let captures = GRID_PATTERN.captures(&text)?;
    let numeric: &[&str] = match captures.name("digits") {
        Some(digits) if digits.as_str().is_empty() => &["zone"],
        Some(_) => &["zone", "digits"],
        None => &["zone", "easting", "northing"],
    };
    if !validate_numeric_match(&captures, numeric) {
        return None;
    }

    let zone = GridZone::new(captures["zone"].parse().ok()?, letter(&captures["band"])?).ok()?;
    let square = SquareId::new(letter(&captures["column"])?, letter(&captures["row"])?).ok()?;

    let (easting, northing) = match (captures.name("easting"), captures.name("northing")) {
        (Some(easting), Some(northing)) => (easting.as_str(), northing.as_str()),
        _ => {
            let digits = captures.name("digits").map_or("", |m| m.as_str());
            if digits.len() % 2 != 0 {
                return None;
            }
            digits.split_at(digits.len() / 2)
        }
    };

    if easting.len() != northing.len() {
        return None;
    }

    let precision = easting.len() as u8;
    let parse_digits = |digits: &str| -> Option<u32> {
        if digits.is_empty() {
            Some(0)
        } else {
            digits.parse().ok()
        }
    };

    GridReference::with_precision(
        zone,
        square,
        parse_digits(easting)?,
        parse_digits(northing)?,
        precision,
    )
    .ok()
}
