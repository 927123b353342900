use std::sync::LazyLock;

use coordconv_types::{CoordinateUtm, Hemisphere};
use regex::Regex;

use super::{normalize, validate_numeric_match, NUMBER};

static UTM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?P<zone>[0-9]{{1,2}})\s*(?P<hemisphere>[NS])\s*[,;]?\s*(?P<easting>{NUMBER})(?:\s*M?\s*[,;]\s*|\s*M\s*|\s+)(?P<northing>{NUMBER})\s*M?$"
    ))
    .expect("UTM pattern is valid")
});

pub(super) fn parse(text: &str) -> Option<CoordinateUtm> {
    let text = normalize(text);
    let captures = UTM_PATTERN.captures(&text)?;
    if !validate_numeric_match(&captures, &["zone", "easting", "northing"]) {
        return None;
    }

    let hemisphere = Hemisphere::from_letter(captures["hemisphere"].chars().next()?)?;
    CoordinateUtm::new(
        captures["zone"].parse().ok()?,
        hemisphere,
        captures["easting"].parse().ok()?,
        captures["northing"].parse().ok()?,
    )
    .ok()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn utm() {
        let value = parse("19N 414639 4428236").unwrap();
        assert_eq!(value.zone(), 19);
        assert_eq!(value.hemisphere(), Hemisphere::North);
        assert_abs_diff_eq!(value.easting(), 414639.0);
        assert_abs_diff_eq!(value.northing(), 4428236.0);

        assert_eq!(parse("19N 414639m 4428236m"), Some(value));
        assert_eq!(parse("19n 414639M, 4428236M"), Some(value));
        assert_eq!(parse("19N, 414639; 4428236"), Some(value));
        assert_eq!(parse("19 N 414639 4428236"), Some(value));
    }

    #[test]
    fn utm_decimals() {
        let value = parse("5S 500000.25 0.5").unwrap();
        assert_eq!(value.hemisphere(), Hemisphere::South);
        assert_abs_diff_eq!(value.easting(), 500000.25);
        assert_abs_diff_eq!(value.northing(), 0.5);
    }

    #[test]
    fn utm_range() {
        assert_eq!(parse("0N 414639 4428236"), None);
        assert_eq!(parse("61N 414639 4428236"), None);
        assert_eq!(parse("19N 0 4428236"), None);
        assert_eq!(parse("19N 1000000 4428236"), None);
        assert_eq!(parse("19N 414639 10000001"), None);
    }

    #[test]
    fn utm_rejects_band_letters_and_garbage() {
        assert_eq!(parse("19T 414639 4428236"), None);
        assert_eq!(parse("19N 414639"), None);
        assert_eq!(parse("19N 414639 4428236 1"), None);
        assert_eq!(parse("N 414639 4428236"), None);
    }
}
