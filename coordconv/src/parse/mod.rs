//! Parsing of free text into coordinate values.
//!
//! Every notation has its own grammar. Input is [normalized](normalize) first, so parsing is
//! case-insensitive and accepts the common typographic variants of the degree, minute and second
//! symbols. A failed parse is `None`, parsing never panics on any input.
//!
//! Geographic notations written without hemisphere letters can be read in both axis orders. If both
//! readings are valid coordinates the outcome is [`ParseOutcome::Ambiguous`] and the caller decides
//! (see [`AmbiguityResolver`](crate::AmbiguityResolver)).

use coordconv_types::{CoordinateType, CoordinateValue};
use regex::Captures;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod gars;
mod geographic;
mod grid;
mod utm;

use geographic::Notation;

/// Regex fragment of an unsigned decimal number.
const NUMBER: &str = r"[0-9]+(?:\.[0-9]*)?|\.[0-9]+";

/// Order in which the two axes were read from the text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AxisOrder {
    /// Latitude first, then longitude.
    LatitudeFirst,
    /// Longitude first, then latitude.
    LongitudeFirst,
}

/// One possible reading of the input text.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Candidate {
    /// The parsed value.
    pub value: CoordinateValue,
    /// Axis order this reading assumes. `None` if the text was unambiguous about it or the
    /// notation has no axis order.
    pub axis_order: Option<AxisOrder>,
}

impl Candidate {
    /// Creates a candidate without axis order.
    pub fn new(value: CoordinateValue) -> Self {
        Self {
            value,
            axis_order: None,
        }
    }

    /// Notation of the candidate.
    pub fn coordinate_type(&self) -> CoordinateType {
        self.value.coordinate_type()
    }
}

/// Result of a successful parse.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// The text has exactly one reading.
    Parsed(CoordinateValue),
    /// The text has several valid readings, listed latitude first.
    Ambiguous(Vec<Candidate>),
}

impl ParseOutcome {
    pub(crate) fn from_candidates(mut candidates: Vec<Candidate>) -> Option<Self> {
        match candidates.len() {
            0 => None,
            1 => candidates.pop().map(|candidate| Self::Parsed(candidate.value)),
            _ => Some(Self::Ambiguous(candidates)),
        }
    }

    /// Returns true if the text has more than one reading.
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous(_))
    }

    /// All readings of the text.
    pub fn into_candidates(self) -> Vec<Candidate> {
        match self {
            Self::Parsed(value) => vec![Candidate::new(value)],
            Self::Ambiguous(candidates) => candidates,
        }
    }
}

/// Parses the text in the given notation. `Default` and `Unknown` have no grammar and never parse.
pub fn try_parse(coordinate_type: CoordinateType, text: &str) -> Option<ParseOutcome> {
    let outcome = match coordinate_type {
        CoordinateType::Dd => parse_dd(text),
        CoordinateType::Ddm => parse_ddm(text),
        CoordinateType::Dms => parse_dms(text),
        CoordinateType::Gars => parse_gars(text),
        CoordinateType::Mgrs => parse_mgrs(text),
        CoordinateType::Usng => parse_usng(text),
        CoordinateType::Utm => parse_utm(text),
        CoordinateType::Default | CoordinateType::Unknown => None,
    };

    log::trace!("Parsing '{text}' as {coordinate_type}: {outcome:?}");
    outcome
}

/// Tries every notation and returns all readings of the text, in the order DD, DDM, DMS, GARS,
/// MGRS, USNG, UTM.
pub fn detect(text: &str) -> Vec<Candidate> {
    let candidates: Vec<Candidate> = CoordinateType::CONCRETE
        .into_iter()
        .filter_map(|coordinate_type| try_parse(coordinate_type, text))
        .flat_map(ParseOutcome::into_candidates)
        .collect();

    log::debug!("Detected {} candidate(s) for '{text}'", candidates.len());
    candidates
}

/// Parses decimal degrees, e.g. `70.49N 40.32W`, `-40.32, 70.49` or `N70.49 W40.32`.
pub fn parse_dd(text: &str) -> Option<ParseOutcome> {
    geographic::parse(Notation::Dd, text)
}

/// Parses degrees and decimal minutes, e.g. `70° 49.12'N 40° 18.32'W` or `70:49.12 -40:18.32`.
pub fn parse_ddm(text: &str) -> Option<ParseOutcome> {
    geographic::parse(Notation::Ddm, text)
}

/// Parses degrees, minutes and seconds, e.g. `40°26'46"N,79°58'56"W` or `40 26 46 N 79 58 56 W`.
pub fn parse_dms(text: &str) -> Option<ParseOutcome> {
    geographic::parse(Notation::Dms, text)
}

/// Parses a GARS cell, e.g. `221LW37` or `221-LW-37`.
pub fn parse_gars(text: &str) -> Option<ParseOutcome> {
    gars::parse(text).map(|value| ParseOutcome::Parsed(value.into()))
}

/// Parses an MGRS grid reference, e.g. `19TDE1463928236` or `19T DE 146 282`.
pub fn parse_mgrs(text: &str) -> Option<ParseOutcome> {
    grid::parse(text).map(|reference| ParseOutcome::Parsed(CoordinateValue::Mgrs(reference)))
}

/// Parses a USNG grid reference. Accepts the same syntax as [`parse_mgrs`].
pub fn parse_usng(text: &str) -> Option<ParseOutcome> {
    grid::parse(text).map(|reference| ParseOutcome::Parsed(CoordinateValue::Usng(reference)))
}

/// Parses a UTM coordinate, e.g. `19N 414639 4428236` or `19N 414639m, 4428236m`.
pub fn parse_utm(text: &str) -> Option<ParseOutcome> {
    utm::parse(text).map(|value| ParseOutcome::Parsed(value.into()))
}

/// Trims and upper-cases the text and replaces typographic variants of `°`, `'` and `"` with the
/// plain symbols. Two apostrophes become a `"`.
pub fn normalize(text: &str) -> String {
    text.trim()
        .chars()
        .map(|c| match c {
            'º' | '˚' => '°',
            '′' | '’' => '\'',
            '″' | '”' => '"',
            c => c,
        })
        .collect::<String>()
        .to_uppercase()
        .replace("''", "\"")
}

/// Checks that every required group of the match is present and is a number.
pub fn validate_numeric_match(captures: &Captures<'_>, required: &[&str]) -> bool {
    required.iter().all(|name| {
        captures
            .name(name)
            .is_some_and(|group| group.as_str().parse::<f64>().is_ok())
    })
}
