//! DD, DDM and DMS grammars.

use std::sync::LazyLock;

use coordconv_types::{
    Axis, CoordinateDd, CoordinateDdm, CoordinateDms, CoordinateValue, DdmAngle, DmsAngle,
    Hemisphere,
};
use regex::{Captures, Regex};

use super::{normalize, validate_numeric_match, AxisOrder, Candidate, ParseOutcome, NUMBER};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) enum Notation {
    Dd,
    Ddm,
    Dms,
}

static DD_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| Notation::Dd.compile());
static DDM_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| Notation::Ddm.compile());
static DMS_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| Notation::Dms.compile());

impl Notation {
    /// Pattern of one axis, with group names prefixed by `p`.
    fn axis_body(self, p: &str) -> String {
        match self {
            Notation::Dd => format!(r"(?P<{p}deg>{NUMBER})\s*°?"),
            Notation::Ddm => {
                format!(r"(?P<{p}deg>[0-9]+)(?:\s*[°:]\s*|\s+)(?P<{p}min>{NUMBER})\s*'?")
            }
            Notation::Dms => format!(
                r#"(?P<{p}deg>[0-9]+)(?:\s*[°:]\s*|\s+)(?P<{p}min>[0-9]+)(?:\s*[':]\s*|\s+)(?P<{p}sec>{NUMBER})\s*"?"#
            ),
        }
    }

    /// Hemisphere letters as suffixes (or absent), and hemisphere letters as prefixes.
    fn compile(self) -> [Regex; 2] {
        let a = self.axis_body("a_");
        let b = self.axis_body("b_");

        let suffixed = format!(
            r"^(?P<a_sign>[+-])?\s*{a}\s*(?:(?P<a_hemi>[NSEW])\s*[,;]?\s*|[,;]\s*|\s+)(?P<b_sign>[+-])?\s*{b}\s*(?P<b_hemi>[NSEW])?$"
        );
        let prefixed = format!(
            r"^(?P<a_hemi>[NSEW])\s*(?P<a_sign>[+-])?\s*{a}\s*[,;]?\s*(?P<b_hemi>[NSEW])\s*(?P<b_sign>[+-])?\s*{b}$"
        );

        [
            Regex::new(&suffixed).expect("suffixed geographic pattern is valid"),
            Regex::new(&prefixed).expect("prefixed geographic pattern is valid"),
        ]
    }

    fn patterns(self) -> &'static [Regex; 2] {
        match self {
            Notation::Dd => &DD_PATTERNS,
            Notation::Ddm => &DDM_PATTERNS,
            Notation::Dms => &DMS_PATTERNS,
        }
    }

    fn numeric_groups(self) -> &'static [&'static str] {
        match self {
            Notation::Dd => &["a_deg", "b_deg"],
            Notation::Ddm => &["a_deg", "a_min", "b_deg", "b_min"],
            Notation::Dms => &["a_deg", "a_min", "a_sec", "b_deg", "b_min", "b_sec"],
        }
    }
}

/// Text of one axis as matched by the grammar.
#[derive(Debug)]
struct AxisText<'t> {
    sign: Option<&'t str>,
    hemisphere: Option<Hemisphere>,
    degrees: &'t str,
    minutes: Option<&'t str>,
    seconds: Option<&'t str>,
}

impl<'t> AxisText<'t> {
    fn from_captures(captures: &Captures<'t>, prefix: &str) -> Option<Self> {
        let group = |name: &str| {
            captures
                .name(&format!("{prefix}{name}"))
                .map(|m| m.as_str())
        };

        let hemisphere = match group("hemi") {
            Some(letter) => Some(Hemisphere::from_letter(letter.chars().next()?)?),
            None => None,
        };

        Some(Self {
            sign: group("sign"),
            hemisphere,
            degrees: group("deg")?,
            minutes: group("min"),
            seconds: group("sec"),
        })
    }

    /// Hemisphere of the axis if the text is read as `axis`. Fails if the letter belongs to the
    /// other axis or contradicts the sign.
    fn hemisphere(&self, axis: Axis) -> Option<Hemisphere> {
        let negative = self.sign == Some("-");
        match self.hemisphere {
            Some(hemisphere) if hemisphere.axis() != axis => None,
            Some(hemisphere) if self.sign.is_some() && hemisphere.is_negative() != negative => {
                None
            }
            Some(hemisphere) => Some(hemisphere),
            None => Some(Hemisphere::of_value(axis, if negative { -1.0 } else { 1.0 })),
        }
    }

    fn dd(&self, axis: Axis) -> Option<f64> {
        let hemisphere = self.hemisphere(axis)?;
        Some(self.degrees.parse::<f64>().ok()? * hemisphere.signum())
    }

    fn ddm(&self, axis: Axis) -> Option<DdmAngle> {
        DdmAngle::new(
            self.degrees.parse().ok()?,
            self.minutes?.parse().ok()?,
            self.hemisphere(axis)?,
        )
        .ok()
    }

    fn dms(&self, axis: Axis) -> Option<DmsAngle> {
        DmsAngle::new(
            self.degrees.parse().ok()?,
            self.minutes?.parse().ok()?,
            self.seconds?.parse().ok()?,
            self.hemisphere(axis)?,
        )
        .ok()
    }
}

fn build(notation: Notation, lat: &AxisText, lon: &AxisText) -> Option<CoordinateValue> {
    let value = match notation {
        Notation::Dd => CoordinateDd::new(lat.dd(Axis::Latitude)?, lon.dd(Axis::Longitude)?)
            .ok()?
            .into(),
        Notation::Ddm => CoordinateDdm::new(lat.ddm(Axis::Latitude)?, lon.ddm(Axis::Longitude)?)
            .ok()?
            .into(),
        Notation::Dms => CoordinateDms::new(lat.dms(Axis::Latitude)?, lon.dms(Axis::Longitude)?)
            .ok()?
            .into(),
    };

    Some(value)
}

pub(super) fn parse(notation: Notation, text: &str) -> Option<ParseOutcome> {
    let text = normalize(text);
    let captures = notation
        .patterns()
        .iter()
        .find_map(|pattern| pattern.captures(&text))?;

    if !validate_numeric_match(&captures, notation.numeric_groups()) {
        return None;
    }

    let first = AxisText::from_captures(&captures, "a_")?;
    let second = AxisText::from_captures(&captures, "b_")?;

    let orders: &[AxisOrder] = match (
        first.hemisphere.map(|h| h.axis()),
        second.hemisphere.map(|h| h.axis()),
    ) {
        (Some(a), Some(b)) if a == b => return None,
        (Some(Axis::Latitude), _) | (_, Some(Axis::Longitude)) => &[AxisOrder::LatitudeFirst],
        (Some(Axis::Longitude), _) | (_, Some(Axis::Latitude)) => &[AxisOrder::LongitudeFirst],
        (None, None) => &[AxisOrder::LatitudeFirst, AxisOrder::LongitudeFirst],
    };

    let candidates = orders
        .iter()
        .filter_map(|&order| {
            let (lat, lon) = match order {
                AxisOrder::LatitudeFirst => (&first, &second),
                AxisOrder::LongitudeFirst => (&second, &first),
            };

            build(notation, lat, lon).map(|value| Candidate {
                value,
                axis_order: Some(order),
            })
        })
        .collect();

    ParseOutcome::from_candidates(candidates)
}
