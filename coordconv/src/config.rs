//! Configuration of a [`CoordinateConverter`](crate::CoordinateConverter).

use std::collections::BTreeMap;

use coordconv_types::CoordinateType;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::format::{default_presets, default_template, FormatPreset};

/// Named output of [`CoordinateConverter::render_outputs`](crate::CoordinateConverter::render_outputs).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OutputCoordinate {
    /// Display name of the output.
    pub name: String,
    /// Target notation.
    pub coordinate_type: CoordinateType,
    /// Format template. If not set, the configured format of the notation is used.
    #[cfg_attr(feature = "serde", serde(default))]
    pub format: Option<String>,
}

impl OutputCoordinate {
    /// Creates an output that uses the configured format of the notation.
    pub fn new(name: impl Into<String>, coordinate_type: CoordinateType) -> Self {
        Self {
            name: name.into(),
            coordinate_type,
            format: None,
        }
    }

    /// Sets the format template of the output.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

/// Converter settings.
///
/// Missing fields take their default values when deserialized.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConverterConfig {
    /// Preferred notation. Used to format values and to resolve ambiguous input.
    pub coordinate_type: CoordinateType,
    /// Template overriding the default format of `coordinate_type`.
    pub custom_format: Option<String>,
    /// Format presets per notation. The first preset of a notation is its default format.
    pub default_formats: BTreeMap<CoordinateType, Vec<FormatPreset>>,
    /// Whether the ambiguity listener is consulted for ambiguous input.
    pub display_ambiguous_coords_dialog: bool,
    /// Outputs rendered by [`CoordinateConverter::render_outputs`](crate::CoordinateConverter::render_outputs).
    pub outputs: Vec<OutputCoordinate>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            coordinate_type: CoordinateType::Dd,
            custom_format: None,
            default_formats: CoordinateType::CONCRETE
                .into_iter()
                .map(|coordinate_type| (coordinate_type, default_presets(coordinate_type)))
                .collect(),
            display_ambiguous_coords_dialog: true,
            outputs: vec![],
        }
    }
}

impl ConverterConfig {
    /// Sets the preferred notation.
    pub fn with_coordinate_type(mut self, coordinate_type: CoordinateType) -> Self {
        self.coordinate_type = coordinate_type;
        self
    }

    /// Sets the template overriding the default format of the preferred notation.
    pub fn with_custom_format(mut self, format: impl Into<String>) -> Self {
        self.custom_format = Some(format.into());
        self
    }

    /// Enables or disables consulting the ambiguity listener.
    pub fn with_ambiguity_prompt(mut self, display: bool) -> Self {
        self.display_ambiguous_coords_dialog = display;
        self
    }

    /// Adds a named output.
    pub fn with_output(mut self, output: OutputCoordinate) -> Self {
        self.outputs.push(output);
        self
    }

    /// Presets of the notation.
    pub fn presets(&self, coordinate_type: CoordinateType) -> &[FormatPreset] {
        self.default_formats
            .get(&coordinate_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Template used to format values of the notation: the custom format if the notation is the
    /// preferred one and a custom format is set, else the first preset, else the built-in default.
    pub fn format_for(&self, coordinate_type: CoordinateType) -> Option<&str> {
        if coordinate_type == self.coordinate_type {
            if let Some(custom) = &self.custom_format {
                return Some(custom);
            }
        }

        self.presets(coordinate_type)
            .first()
            .map(|preset| preset.template.as_str())
            .or_else(|| default_template(coordinate_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_selection() {
        let config = ConverterConfig::default();
        assert_eq!(config.format_for(CoordinateType::Dd), Some("Y0.0#N X0.0#E"));
        assert_eq!(config.format_for(CoordinateType::Utm), Some("Z#H X0 Y0"));
        assert_eq!(config.format_for(CoordinateType::Unknown), None);

        let config = config
            .with_coordinate_type(CoordinateType::Utm)
            .with_custom_format("Z00H X0.0 Y0.0");
        assert_eq!(config.format_for(CoordinateType::Utm), Some("Z00H X0.0 Y0.0"));
        assert_eq!(config.format_for(CoordinateType::Dd), Some("Y0.0#N X0.0#E"));
    }

    #[test]
    fn presets_override_builtin_defaults() {
        let mut config = ConverterConfig::default();
        config.default_formats.insert(
            CoordinateType::Dd,
            vec![FormatPreset::new("70.49 -40.32", "Y-0.0# X-0.0#")],
        );
        assert_eq!(config.format_for(CoordinateType::Dd), Some("Y-0.0# X-0.0#"));

        config.default_formats.clear();
        assert!(config.presets(CoordinateType::Dd).is_empty());
        assert_eq!(config.format_for(CoordinateType::Dd), Some("Y0.0#N X0.0#E"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialization() {
        let config = ConverterConfig::default()
            .with_coordinate_type(CoordinateType::Mgrs)
            .with_ambiguity_prompt(false)
            .with_output(OutputCoordinate::new("Grid", CoordinateType::Usng).with_format("ZSX0Y0"));

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ConverterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_defaults() {
        let config: ConverterConfig = serde_json::from_str(
            r#"{
                "coordinate_type": "DMS",
                "custom_format": "A0 B0 C0.0 X0 Y0 Z0.0",
                "outputs": [{ "name": "Position", "coordinate_type": "DD" }]
            }"#,
        )
        .unwrap();

        assert_eq!(config.coordinate_type, CoordinateType::Dms);
        assert!(config.display_ambiguous_coords_dialog);
        assert_eq!(config.outputs, vec![OutputCoordinate::new("Position", CoordinateType::Dd)]);
        assert_eq!(
            config.format_for(CoordinateType::Dms),
            Some("A0 B0 C0.0 X0 Y0 Z0.0")
        );
        assert_eq!(config.presets(CoordinateType::Gars).len(), 2);
    }
}
