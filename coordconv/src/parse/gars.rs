use std::sync::LazyLock;

use coordconv_types::CoordinateGars;
use regex::Regex;

use super::{normalize, validate_numeric_match};

static GARS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<lon>[0-9]{3})(?P<lat>[A-Z]{2})(?P<quadrant>[1-4])(?P<key>[1-9])$")
        .expect("GARS pattern is valid")
});

pub(super) fn parse(text: &str) -> Option<CoordinateGars> {
    let text: String = normalize(text)
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    let captures = GARS_PATTERN.captures(&text)?;
    if !validate_numeric_match(&captures, &["lon", "quadrant", "key"]) {
        return None;
    }

    CoordinateGars::new(
        captures["lon"].parse().ok()?,
        &captures["lat"],
        captures["quadrant"].parse().ok()?,
        captures["key"].parse().ok()?,
    )
    .ok()
}
