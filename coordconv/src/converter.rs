use coordconv_types::{
    CoordinateDdm, CoordinateDms, CoordinateGars, CoordinateType, CoordinateValue,
};

use crate::ambiguity::{AmbiguityListener, AmbiguityResolver, Resolution};
use crate::config::ConverterConfig;
use crate::error::{ConvertError, FormatError};
use crate::format::{compile, format};
use crate::parse::{detect, try_parse};

/// Parses, converts and formats coordinates according to a [`ConverterConfig`].
///
/// ```
/// use coordconv::{CoordinateConverter, CoordinateType, ConverterConfig};
///
/// let converter = CoordinateConverter::new(ConverterConfig::default());
/// let dms = converter.convert("40.446111N 79.982222W", CoordinateType::Dms).unwrap();
/// assert_eq!(dms, "40° 26' 46.0\"N 79° 58' 56.0\"W");
/// ```
#[derive(Debug)]
pub struct CoordinateConverter {
    config: ConverterConfig,
    resolver: AmbiguityResolver,
}

impl Default for CoordinateConverter {
    fn default() -> Self {
        Self::new(ConverterConfig::default())
    }
}

impl CoordinateConverter {
    /// Creates a new converter without ambiguity listener.
    pub fn new(config: ConverterConfig) -> Self {
        let resolver = AmbiguityResolver::new(config.coordinate_type)
            .with_prompt(config.display_ambiguous_coords_dialog);
        Self { config, resolver }
    }

    /// Attaches a listener that is consulted for ambiguous input.
    pub fn with_listener(mut self, listener: impl AmbiguityListener + 'static) -> Self {
        self.resolver = self.resolver.with_listener(listener);
        self
    }

    /// Configuration of the converter.
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Parses text in any notation. Ambiguous input is resolved.
    pub fn parse(&self, text: &str) -> Option<CoordinateValue> {
        self.parse_with_resolution(text)
            .map(|resolution| resolution.candidate.value)
    }

    /// Parses text in any notation and reports whether ambiguity was resolved by the listener.
    pub fn parse_with_resolution(&self, text: &str) -> Option<Resolution> {
        self.resolver.resolve(&detect(text))
    }

    /// Parses text in the given notation. Ambiguous input is resolved.
    pub fn parse_as(
        &self,
        coordinate_type: CoordinateType,
        text: &str,
    ) -> Option<CoordinateValue> {
        let candidates = try_parse(coordinate_type, text)?.into_candidates();
        self.resolver
            .resolve(&candidates)
            .map(|resolution| resolution.candidate.value)
    }

    /// Formats the value with the configured format of its notation.
    pub fn format(&self, value: &CoordinateValue) -> Result<String, FormatError> {
        let coordinate_type = value.coordinate_type();
        let template = self
            .config
            .format_for(coordinate_type)
            .ok_or(FormatError::UnsupportedType(coordinate_type))?;
        self.format_with(value, template)
    }

    /// Formats the value with the given template.
    pub fn format_with(
        &self,
        value: &CoordinateValue,
        template: &str,
    ) -> Result<String, FormatError> {
        format(value, &compile(value.coordinate_type(), template)?)
    }

    /// Parses the text, converts it into the target notation and formats it with the configured
    /// format of the target.
    pub fn convert(&self, text: &str, target: CoordinateType) -> Result<String, ConvertError> {
        let value = self
            .parse(text)
            .ok_or_else(|| ConvertError::InvalidInput(text.to_owned()))?;
        let converted = convert_value(&value, target)?;
        Ok(self.format(&converted)?)
    }

    /// Renders the value into every configured output. Each output has its own result, so one
    /// failing output does not hide the others.
    pub fn render_outputs(
        &self,
        value: &CoordinateValue,
    ) -> Vec<(String, Result<String, ConvertError>)> {
        self.config
            .outputs
            .iter()
            .map(|output| {
                let result = convert_value(value, output.coordinate_type).and_then(|converted| {
                    match &output.format {
                        Some(template) => self.format_with(&converted, template),
                        None => self.format(&converted),
                    }
                    .map_err(ConvertError::from)
                });

                if let Err(err) = &result {
                    log::debug!("Output '{}' failed: {err}", output.name);
                }

                (output.name.clone(), result)
            })
            .collect()
    }
}

/// Converts the value into another notation.
///
/// The geographic notations (DD, DDM, DMS, GARS) convert into each other, GARS cells through their
/// centre. MGRS and USNG references convert into each other. Anything else needs a reprojection and
/// fails with [`ConvertError::NotConvertible`].
pub fn convert_value(
    value: &CoordinateValue,
    target: CoordinateType,
) -> Result<CoordinateValue, ConvertError> {
    let from = value.coordinate_type();
    if from == target {
        return Ok(*value);
    }

    let not_convertible = || ConvertError::NotConvertible { from, to: target };

    if target.is_geographic() {
        let dd = value.to_dd().ok_or_else(not_convertible)?;
        return Ok(match target {
            CoordinateType::Ddm => CoordinateDdm::from(dd).into(),
            CoordinateType::Dms => CoordinateDms::from(dd).into(),
            CoordinateType::Gars => CoordinateGars::from(dd).into(),
            _ => dd.into(),
        });
    }

    match (value, target) {
        (CoordinateValue::Mgrs(reference), CoordinateType::Usng) => {
            Ok(CoordinateValue::Usng(*reference))
        }
        (CoordinateValue::Usng(reference), CoordinateType::Mgrs) => {
            Ok(CoordinateValue::Mgrs(*reference))
        }
        _ => Err(not_convertible()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use assert_matches::assert_matches;
    use coordconv_types::CoordinateDd;

    use super::*;
    use crate::ambiguity::AmbiguousEventArgs;
    use crate::config::OutputCoordinate;
    use crate::format::default_presets;

    #[test]
    fn presets_round_trip() {
        let converter = CoordinateConverter::default();
        for coordinate_type in CoordinateType::CONCRETE {
            for preset in default_presets(coordinate_type) {
                let value = converter
                    .parse_as(coordinate_type, &preset.sample)
                    .unwrap_or_else(|| panic!("failed to parse '{}'", preset.sample));
                assert_eq!(value.coordinate_type(), coordinate_type);
                assert_eq!(
                    converter.format_with(&value, &preset.template).unwrap(),
                    preset.sample
                );
            }
        }
    }

    #[test]
    fn parse_and_format() {
        let converter = CoordinateConverter::default();
        let value = converter.parse("70.49N,40.32W").unwrap();
        assert_eq!(
            value,
            CoordinateValue::Dd(CoordinateDd::new(70.49, -40.32).unwrap())
        );
        assert_eq!(converter.format(&value).unwrap(), "70.49N 40.32W");

        assert_eq!(converter.parse("not a coordinate"), None);
    }

    #[test]
    fn custom_format() {
        let converter = CoordinateConverter::new(
            ConverterConfig::default().with_custom_format("Y+0.000, X+0.000"),
        );
        let value = CoordinateDd::new(70.49, -40.32).unwrap().into();
        assert_eq!(converter.format(&value).unwrap(), "+70.490, -40.320");
    }

    #[test]
    fn convert_geographic() {
        let converter = CoordinateConverter::default();
        assert_eq!(
            converter.convert("70.49N 40.32W", CoordinateType::Ddm).unwrap(),
            "70° 29.4'N 40° 19.2'W"
        );
        assert_eq!(
            converter.convert("70.49N 40.32W", CoordinateType::Dms).unwrap(),
            "70° 29' 24.0\"N 40° 19' 12.0\"W"
        );
        assert_eq!(
            converter.convert("40.04N 69.96W", CoordinateType::Gars).unwrap(),
            "221LW37"
        );
        assert_eq!(
            converter.convert("221LW37", CoordinateType::Dd).unwrap(),
            "40.04N 69.96W"
        );
    }

    #[test]
    fn convert_grid() {
        let converter = CoordinateConverter::default();
        assert_eq!(
            converter.convert("19TDE1463928236", CoordinateType::Usng).unwrap(),
            "19T DE 14639 28236"
        );
        assert_eq!(
            converter.convert("19T DE 14639 28236", CoordinateType::Mgrs).unwrap(),
            "19TDE1463928236"
        );
    }

    #[test]
    fn convert_errors() {
        let converter = CoordinateConverter::default();
        assert_matches!(
            converter.convert("hello", CoordinateType::Dd),
            Err(ConvertError::InvalidInput(text)) if text == "hello"
        );
        assert_matches!(
            converter.convert("70.49N 40.32W", CoordinateType::Utm),
            Err(ConvertError::NotConvertible {
                from: CoordinateType::Dd,
                to: CoordinateType::Utm
            })
        );
        assert_matches!(
            converter.convert("19N 414639 4428236", CoordinateType::Mgrs),
            Err(ConvertError::NotConvertible { .. })
        );
        assert_matches!(
            converter.convert("70.49N 40.32W", CoordinateType::Unknown),
            Err(ConvertError::NotConvertible { .. })
        );

        let converter = CoordinateConverter::new(
            ConverterConfig::default()
                .with_coordinate_type(CoordinateType::Dms)
                .with_custom_format("A0 Q0"),
        );
        assert_matches!(
            converter.convert("70.49N 40.32W", CoordinateType::Dms),
            Err(ConvertError::Format(FormatError::UnknownDirective { letter: 'Q', .. }))
        );
    }

    #[test]
    fn preferred_type_resolves_grid_references() {
        let text = "19T DE 14639 28236";

        let converter = CoordinateConverter::new(
            ConverterConfig::default().with_coordinate_type(CoordinateType::Usng),
        );
        assert_matches!(converter.parse(text), Some(CoordinateValue::Usng(_)));

        let converter = CoordinateConverter::new(
            ConverterConfig::default().with_coordinate_type(CoordinateType::Mgrs),
        );
        assert_matches!(converter.parse(text), Some(CoordinateValue::Mgrs(_)));
    }

    #[test]
    fn ambiguous_input_is_stable() {
        let converter = CoordinateConverter::default();
        let first = converter.parse("45.0 45.0").unwrap();
        for _ in 0..3 {
            assert_eq!(converter.parse("45.0 45.0").unwrap(), first);
        }
    }

    #[test]
    fn listener() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let converter = CoordinateConverter::default().with_listener(
            move |args: &mut AmbiguousEventArgs| {
                counter.fetch_add(1, Ordering::SeqCst);
                let index = args
                    .candidates()
                    .iter()
                    .position(|candidate| {
                        candidate.axis_order == Some(crate::parse::AxisOrder::LongitudeFirst)
                    })
                    .unwrap();
                args.select(index);
            },
        );

        let resolution = converter.parse_with_resolution("10.0 20.0").unwrap();
        assert!(resolution.handled);
        assert_eq!(
            resolution.candidate.value,
            CoordinateValue::Dd(CoordinateDd::new(20.0, 10.0).unwrap())
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let resolution = converter.parse_with_resolution("10.0N 20.0E").unwrap();
        assert!(!resolution.handled);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn listener_not_consulted_for_single_position() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let converter = CoordinateConverter::default().with_listener(
            move |args: &mut AmbiguousEventArgs| {
                counter.fetch_add(1, Ordering::SeqCst);
                args.select(0);
            },
        );

        let resolution = converter.parse_with_resolution("19TDE1463928236").unwrap();
        assert!(!resolution.handled);
        assert_eq!(resolution.candidate.coordinate_type(), CoordinateType::Mgrs);

        let resolution = converter.parse_with_resolution("0 0").unwrap();
        assert!(!resolution.handled);
        assert_eq!(
            resolution.candidate.value,
            CoordinateValue::Dd(CoordinateDd::new(0.0, 0.0).unwrap())
        );

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn typed_decimals_round_half_up() {
        let converter = CoordinateConverter::default();
        for (text, expected) in [
            ("70.445N 40.125W", "70.45N 40.13W"),
            ("1.005N 2.675E", "1.01N 2.68E"),
            ("0.285N 1.015E", "0.29N 1.02E"),
        ] {
            let value = converter.parse(text).unwrap();
            assert_eq!(converter.format_with(&value, "Y0.00N X0.00E").unwrap(), expected);
        }
    }

    #[test]
    fn reduced_precision_grid_round_trip() {
        let config = ConverterConfig::default().with_coordinate_type(CoordinateType::Mgrs);
        let converter = CoordinateConverter::new(config);
        for text in ["4QFJ8562", "4QFJ", "17TNE0777086309"] {
            let value = converter.parse(text).unwrap();
            assert_eq!(converter.format(&value).unwrap(), text);
        }

        let value = converter.parse("4Q FJ 856 621").unwrap();
        assert_eq!(
            converter.convert("4Q FJ 856 621", CoordinateType::Usng).unwrap(),
            "4Q FJ 856 621"
        );
        assert_eq!(
            converter.format_with(&value, "Z S X00000 Y00000").unwrap(),
            "4Q FJ 85600 62100"
        );
    }

    #[test]
    fn listener_not_consulted_when_prompt_disabled() {
        let converter =
            CoordinateConverter::new(ConverterConfig::default().with_ambiguity_prompt(false))
                .with_listener(|_: &mut AmbiguousEventArgs| panic!("listener called"));

        let resolution = converter.parse_with_resolution("10.0 20.0").unwrap();
        assert!(!resolution.handled);
    }

    #[test]
    fn outputs() {
        let config = ConverterConfig::default()
            .with_output(OutputCoordinate::new("Decimal", CoordinateType::Dd))
            .with_output(
                OutputCoordinate::new("Minutes", CoordinateType::Ddm).with_format("A0 B0.000N"),
            )
            .with_output(OutputCoordinate::new("Grid", CoordinateType::Mgrs));
        let converter = CoordinateConverter::new(config);

        let value = converter.parse("40.5N 70.25W").unwrap();
        let outputs = converter.render_outputs(&value);
        assert_eq!(outputs.len(), 3);
        assert_eq!(outputs[0], ("Decimal".to_owned(), Ok("40.5N 70.25W".to_owned())));
        assert_eq!(outputs[1], ("Minutes".to_owned(), Ok("40 30.000N".to_owned())));
        assert_matches!(&outputs[2].1, Err(ConvertError::NotConvertible { .. }));
    }
}
