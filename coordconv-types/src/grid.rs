//! Grid references shared by MGRS and USNG.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::error::{out_of_range, CoordinateError};

/// Latitude band letters of the UTM part of the grid (polar UPS bands are not supported).
const BAND_LETTERS: &str = "CDEFGHJKLMNPQRSTUVWX";
/// Column letters of a 100 km square.
const COLUMN_LETTERS: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ";
/// Row letters of a 100 km square.
const ROW_LETTERS: &str = "ABCDEFGHJKLMNPQRSTUV";
/// Largest number of digits per axis, which gives 1 m resolution.
pub const MAX_PRECISION: u8 = 5;

/// Grid zone designator, e.g. `19T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridZone {
    number: u8,
    band: char,
}

impl GridZone {
    /// Creates a new designator from the zone number (`1..=60`) and the upper-case band letter.
    pub fn new(number: u8, band: char) -> Result<Self, CoordinateError> {
        if !(1..=60).contains(&number) {
            return Err(out_of_range("zone", number));
        }

        if !BAND_LETTERS.contains(band) {
            return Err(CoordinateError::InvalidLetter {
                field: "latitude band",
                letter: band,
            });
        }

        Ok(Self { number, band })
    }

    /// Zone number.
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Latitude band letter.
    pub fn band(&self) -> char {
        self.band
    }
}

impl Display for GridZone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.number, self.band)
    }
}

/// 100 km square identifier, e.g. `DE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SquareId {
    column: char,
    row: char,
}

impl SquareId {
    /// Creates a new identifier from upper-case column and row letters.
    pub fn new(column: char, row: char) -> Result<Self, CoordinateError> {
        if !COLUMN_LETTERS.contains(column) {
            return Err(CoordinateError::InvalidLetter {
                field: "square column",
                letter: column,
            });
        }

        if !ROW_LETTERS.contains(row) {
            return Err(CoordinateError::InvalidLetter {
                field: "square row",
                letter: row,
            });
        }

        Ok(Self { column, row })
    }

    /// Column (easting) letter.
    pub fn column(&self) -> char {
        self.column
    }

    /// Row (northing) letter.
    pub fn row(&self) -> char {
        self.row
    }
}

impl Display for SquareId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

/// Position inside a 100 km square. Easting and northing are stored in metres regardless of the
/// number of digits the reference was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridReference {
    zone: GridZone,
    square: SquareId,
    easting: u32,
    northing: u32,
    precision: u8,
}

impl GridReference {
    /// Creates a 1 m precision reference. Easting and northing must be in `0..=99999`.
    pub fn new(
        zone: GridZone,
        square: SquareId,
        easting: u32,
        northing: u32,
    ) -> Result<Self, CoordinateError> {
        Self::with_precision(zone, square, easting, northing, MAX_PRECISION)
    }

    /// Creates a reference from easting and northing written with `precision` digits each, so that
    /// `with_precision(.., 85, 62, 2)` is the same position as `new(.., 85000, 62000)`.
    pub fn with_precision(
        zone: GridZone,
        square: SquareId,
        easting: u32,
        northing: u32,
        precision: u8,
    ) -> Result<Self, CoordinateError> {
        if precision > MAX_PRECISION {
            return Err(out_of_range("precision", precision));
        }

        let limit = 10u32.pow(u32::from(precision));
        if easting >= limit {
            return Err(out_of_range("easting", easting));
        }

        if northing >= limit {
            return Err(out_of_range("northing", northing));
        }

        let scale = 10u32.pow(u32::from(MAX_PRECISION - precision));
        Ok(Self {
            zone,
            square,
            easting: easting * scale,
            northing: northing * scale,
            precision,
        })
    }

    /// Grid zone designator.
    pub fn zone(&self) -> GridZone {
        self.zone
    }

    /// 100 km square.
    pub fn square(&self) -> SquareId {
        self.square
    }

    /// Easting inside the square in metres.
    pub fn easting(&self) -> u32 {
        self.easting
    }

    /// Northing inside the square in metres.
    pub fn northing(&self) -> u32 {
        self.northing
    }

    /// Number of digits per axis the reference was created with.
    pub fn precision(&self) -> u8 {
        self.precision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_validation() {
        assert_eq!(GridZone::new(19, 'T').unwrap().to_string(), "19T");
        assert!(GridZone::new(0, 'T').is_err());
        assert!(GridZone::new(61, 'T').is_err());
        assert!(GridZone::new(19, 'I').is_err());
        assert!(GridZone::new(19, 'A').is_err());
        assert!(GridZone::new(19, 't').is_err());
    }

    #[test]
    fn square_validation() {
        assert_eq!(SquareId::new('D', 'E').unwrap().to_string(), "DE");
        assert!(SquareId::new('Z', 'V').is_ok());
        assert!(SquareId::new('O', 'A').is_err());
        assert!(SquareId::new('A', 'W').is_err());
    }

    #[test]
    fn precision_scaling() {
        let zone = GridZone::new(18, 'T').unwrap();
        let square = SquareId::new('W', 'L').unwrap();
        let reference = GridReference::with_precision(zone, square, 85, 62, 2).unwrap();
        assert_eq!(reference.easting(), 85000);
        assert_eq!(reference.northing(), 62000);
        assert_eq!(reference.precision(), 2);

        assert!(GridReference::with_precision(zone, square, 100, 62, 2).is_err());
        assert!(GridReference::new(zone, square, 100_000, 0).is_err());
        assert!(GridReference::with_precision(zone, square, 0, 0, 6).is_err());

        let square_only = GridReference::with_precision(zone, square, 0, 0, 0).unwrap();
        assert_eq!(square_only.easting(), 0);
    }
}
