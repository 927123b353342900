//! Format templates.
//!
//! A template such as `A0° B0' C0.0"N X0° Y0' Z0.0"E` is [compiled](compile) once for a coordinate
//! type and then used to [format] any number of values of that type.

mod formatter;
mod grammar;
mod presets;
mod token;

pub use formatter::format;
pub use grammar::compile;
pub use presets::{default_presets, default_sample, default_template, FormatPreset};
pub use token::{CompiledFormat, Field, FieldDirective, FormatToken, NumberPattern, SignMode};
