//! See [`CoordinateType`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Coordinate notation. Selects the grammar used to parse text and the shape of the value.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CoordinateType {
    /// No explicit preference.
    #[default]
    Default,
    /// Decimal degrees.
    #[serde(rename = "DD")]
    Dd,
    /// Degrees and decimal minutes.
    #[serde(rename = "DDM")]
    Ddm,
    /// Degrees, minutes and seconds.
    #[serde(rename = "DMS")]
    Dms,
    /// Global Area Reference System.
    #[serde(rename = "GARS")]
    Gars,
    /// Military Grid Reference System.
    #[serde(rename = "MGRS")]
    Mgrs,
    /// Notation that could not be recognized.
    Unknown,
    /// U.S. National Grid.
    #[serde(rename = "USNG")]
    Usng,
    /// Universal Transverse Mercator.
    #[serde(rename = "UTM")]
    Utm,
}

impl CoordinateType {
    /// All types that have a grammar, in the order text detection tries them.
    pub const CONCRETE: [CoordinateType; 7] = [
        CoordinateType::Dd,
        CoordinateType::Ddm,
        CoordinateType::Dms,
        CoordinateType::Gars,
        CoordinateType::Mgrs,
        CoordinateType::Usng,
        CoordinateType::Utm,
    ];

    /// Returns true for the types that have a grammar and a value shape.
    pub fn is_concrete(&self) -> bool {
        !matches!(self, CoordinateType::Default | CoordinateType::Unknown)
    }

    /// Returns true for the notations expressed in latitude and longitude.
    pub fn is_geographic(&self) -> bool {
        matches!(
            self,
            CoordinateType::Dd | CoordinateType::Ddm | CoordinateType::Dms | CoordinateType::Gars
        )
    }

    /// Short upper-case name of the notation.
    pub fn name(&self) -> &'static str {
        match self {
            CoordinateType::Default => "Default",
            CoordinateType::Dd => "DD",
            CoordinateType::Ddm => "DDM",
            CoordinateType::Dms => "DMS",
            CoordinateType::Gars => "GARS",
            CoordinateType::Mgrs => "MGRS",
            CoordinateType::Unknown => "Unknown",
            CoordinateType::Usng => "USNG",
            CoordinateType::Utm => "UTM",
        }
    }
}

impl Display for CoordinateType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CoordinateType {
    type Err = ();

    /// Case-insensitive inverse of [`CoordinateType::name`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        [
            CoordinateType::Default,
            CoordinateType::Unknown,
            CoordinateType::Dd,
            CoordinateType::Ddm,
            CoordinateType::Dms,
            CoordinateType::Gars,
            CoordinateType::Mgrs,
            CoordinateType::Usng,
            CoordinateType::Utm,
        ]
        .into_iter()
        .find(|t| t.name().eq_ignore_ascii_case(s))
        .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for t in CoordinateType::CONCRETE {
            assert_eq!(t.name().parse::<CoordinateType>(), Ok(t));
        }

        assert_eq!("mgrs".parse::<CoordinateType>(), Ok(CoordinateType::Mgrs));
        assert_eq!("latlon".parse::<CoordinateType>(), Err(()));
    }

    #[test]
    fn serialization_uses_acronyms() {
        assert_eq!(
            serde_json::to_string(&CoordinateType::Ddm).unwrap(),
            "\"DDM\""
        );
        let t: CoordinateType = serde_json::from_str("\"USNG\"").unwrap();
        assert_eq!(t, CoordinateType::Usng);
    }
}
