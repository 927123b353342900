//! Value types for coordinate notations: decimal degrees, degrees and decimal minutes, degrees
//! minutes and seconds, GARS cells, MGRS/USNG grid references and UTM coordinates.
//!
//! Every value is validated at construction, so a value that exists is always in the legal range of
//! its notation. The geographic notations can be converted into each other with `From`
//! implementations:
//!
//! ```
//! use coordconv_types::{Axis, CoordinateDd, CoordinateDms, GeoPoint};
//!
//! let dd = CoordinateDd::new(40.446111, -79.982222).unwrap();
//! let dms = CoordinateDms::from(dd);
//! assert_eq!(dms.angle(Axis::Latitude).degrees(), 40);
//! assert_eq!(dms.angle(Axis::Latitude).minutes(), 26);
//! assert!((dms.lon() - dd.lon()).abs() < 1e-9);
//! ```

mod coordinate_type;
mod dd;
mod ddm;
mod dms;
pub mod error;
pub mod gars;
mod geo;
pub mod grid;
mod hemisphere;
mod utm;
mod value;

pub use coordinate_type::CoordinateType;
pub use dd::CoordinateDd;
pub use ddm::{CoordinateDdm, DdmAngle};
pub use dms::{CoordinateDms, DmsAngle};
pub use error::CoordinateError;
pub use gars::CoordinateGars;
pub use geo::GeoPoint;
pub use grid::{GridReference, GridZone, SquareId};
pub use hemisphere::{Axis, Hemisphere};
pub use utm::CoordinateUtm;
pub use value::CoordinateValue;
