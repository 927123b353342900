//! Built-in format presets.

use coordconv_types::CoordinateType;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A format template together with a sample of its output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatPreset {
    /// Text the template produces, shown to users choosing a format.
    pub sample: String,
    /// Format template.
    pub template: String,
}

impl FormatPreset {
    /// Creates a new preset.
    pub fn new(sample: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            sample: sample.into(),
            template: template.into(),
        }
    }
}

const DD: &[(&str, &str)] = &[
    ("70.49N 40.32W", "Y0.0#N X0.0#E"),
    ("70.49N,40.32W", "Y0.0#N,X0.0#E"),
    ("70.49 -40.32", "Y-0.0# X-0.0#"),
    ("N70.49 W40.32", "NY0.0# EX0.0#"),
];

const DDM: &[(&str, &str)] = &[
    ("70° 49.12'N 40° 18.32'W", "A0° B0.0#'N X0° Y0.0#'E"),
    ("70 49.12N 40 18.32W", "A0 B0.0#N X0 Y0.0#E"),
];

const DMS: &[(&str, &str)] = &[
    (
        "70° 49' 23.2\"N 40° 18' 45.4\"W",
        "A0° B0' C0.0\"N X0° Y0' Z0.0\"E",
    ),
    ("40°26'46\"N,79°58'56\"W", "A0°B0'C0\"N,X0°Y0'Z0\"W"),
];

const GARS: &[(&str, &str)] = &[("221LW37", "X#YQK"), ("221-LW-37", "X000-Y-QK")];

const MGRS: &[(&str, &str)] = &[
    ("19TDE1463928236", "ZSXY"),
    ("19T DE 14639 28236", "Z S X Y"),
];

const USNG: &[(&str, &str)] = &[
    ("19T DE 14639 28236", "Z S X Y"),
    ("19TDE1463928236", "ZSXY"),
];

const UTM: &[(&str, &str)] = &[
    ("19N 414639 4428236", "Z#H X0 Y0"),
    ("19N 414639m 4428236m", "Z#H X0m Y0m"),
];

fn table(coordinate_type: CoordinateType) -> &'static [(&'static str, &'static str)] {
    match coordinate_type {
        CoordinateType::Dd => DD,
        CoordinateType::Ddm => DDM,
        CoordinateType::Dms => DMS,
        CoordinateType::Gars => GARS,
        CoordinateType::Mgrs => MGRS,
        CoordinateType::Usng => USNG,
        CoordinateType::Utm => UTM,
        CoordinateType::Default | CoordinateType::Unknown => &[],
    }
}

/// Built-in presets of the type, the default one first. Empty for `Default` and `Unknown`.
pub fn default_presets(coordinate_type: CoordinateType) -> Vec<FormatPreset> {
    table(coordinate_type)
        .iter()
        .map(|(sample, template)| FormatPreset::new(*sample, *template))
        .collect()
}

/// Default template of the type.
pub fn default_template(coordinate_type: CoordinateType) -> Option<&'static str> {
    table(coordinate_type).first().map(|(_, template)| *template)
}

/// Sample output of the default template of the type.
pub fn default_sample(coordinate_type: CoordinateType) -> Option<&'static str> {
    table(coordinate_type).first().map(|(sample, _)| *sample)
}
