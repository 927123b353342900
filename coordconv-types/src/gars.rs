//! Global Area Reference System cells.
//!
//! The globe is divided into 30-minute cells identified by a three digit longitude band (`001` to
//! `720`, eastwards from 180°W) and a two letter latitude band (`AA` to `QZ`, northwards from 90°S,
//! letters `I` and `O` unused). Each cell is split into four 15-minute quadrants numbered
//! `1 2 / 3 4` from the north-west, and each quadrant into nine 5-minute cells numbered like a
//! telephone keypad.

use serde::Serialize;

use crate::dd::CoordinateDd;
use crate::error::{out_of_range, CoordinateError};
use crate::geo::GeoPoint;

const LAT_BAND_LETTERS: &[u8; 24] = b"ABCDEFGHJKLMNPQRSTUVWXYZ";
const LON_BANDS: u16 = 720;
const LAT_BANDS: u16 = 360;
/// Number of 5-minute cells along a 30-minute band.
const SUBDIVISIONS: u32 = 6;
const CELL_DEGREES: f64 = 5.0 / 60.0;

/// GARS 5-minute cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CoordinateGars {
    lon_band: u16,
    lat_band: u16,
    quadrant: u8,
    key: u8,
}

impl CoordinateGars {
    /// Creates a new cell. `lat_band` is the two letter band designator.
    pub fn new(
        lon_band: u16,
        lat_band: &str,
        quadrant: u8,
        key: u8,
    ) -> Result<Self, CoordinateError> {
        if !(1..=LON_BANDS).contains(&lon_band) {
            return Err(out_of_range("longitude band", lon_band));
        }

        let lat_band = parse_lat_band(lat_band)?;

        if !(1..=4).contains(&quadrant) {
            return Err(out_of_range("quadrant", quadrant));
        }

        if !(1..=9).contains(&key) {
            return Err(out_of_range("keypad", key));
        }

        Ok(Self {
            lon_band,
            lat_band,
            quadrant,
            key,
        })
    }

    /// The cell that contains the given position. Points on the north pole or the antimeridian
    /// belong to the last band.
    pub fn from_point(point: &impl GeoPoint) -> Result<Self, CoordinateError> {
        let dd = CoordinateDd::from_point(point)?;
        Ok(Self::from(dd))
    }

    /// Longitude band, `1..=720`.
    pub fn lon_band(&self) -> u16 {
        self.lon_band
    }

    /// Latitude band letters.
    pub fn lat_band(&self) -> String {
        let first = LAT_BAND_LETTERS[usize::from(self.lat_band / 24)];
        let second = LAT_BAND_LETTERS[usize::from(self.lat_band % 24)];
        [char::from(first), char::from(second)].iter().collect()
    }

    /// Zero based index of the latitude band counted from the south pole.
    pub fn lat_band_index(&self) -> u16 {
        self.lat_band
    }

    /// 15-minute quadrant, `1..=4`.
    pub fn quadrant(&self) -> u8 {
        self.quadrant
    }

    /// 5-minute keypad cell, `1..=9`.
    pub fn key(&self) -> u8 {
        self.key
    }

    /// South-west corner of the cell as `(lat, lon)`.
    pub fn south_west(&self) -> (f64, f64) {
        let (lat_cells, lon_cells) = self.cell_offsets();
        (
            -90.0 + f64::from(lat_cells) * CELL_DEGREES,
            -180.0 + f64::from(lon_cells) * CELL_DEGREES,
        )
    }

    /// Offsets of the 5-minute cell from the south pole and the antimeridian, in cells.
    fn cell_offsets(&self) -> (u32, u32) {
        let key_row_from_top = u32::from(self.key - 1) / 3;
        let key_col = u32::from(self.key - 1) % 3;
        let (quadrant_north, quadrant_east) = match self.quadrant {
            1 => (1, 0),
            2 => (1, 1),
            3 => (0, 0),
            _ => (0, 1),
        };

        let lat_cells =
            u32::from(self.lat_band) * SUBDIVISIONS + quadrant_north * 3 + 2 - key_row_from_top;
        let lon_cells = u32::from(self.lon_band - 1) * SUBDIVISIONS + quadrant_east * 3 + key_col;
        (lat_cells, lon_cells)
    }
}

fn parse_lat_band(letters: &str) -> Result<u16, CoordinateError> {
    let mut index = 0u16;
    let mut count = 0;
    for letter in letters.chars() {
        let position = LAT_BAND_LETTERS
            .iter()
            .position(|&l| char::from(l) == letter)
            .ok_or(CoordinateError::InvalidLetter {
                field: "latitude band",
                letter,
            })?;
        index = index * 24 + position as u16;
        count += 1;
        if count > 2 {
            return Err(CoordinateError::InvalidLetter {
                field: "latitude band",
                letter,
            });
        }
    }

    if count != 2 || index >= LAT_BANDS {
        return Err(out_of_range("latitude band", index));
    }

    Ok(index)
}

impl From<CoordinateDd> for CoordinateGars {
    fn from(value: CoordinateDd) -> Self {
        let max_lat_cells = u32::from(LAT_BANDS) * SUBDIVISIONS - 1;
        let max_lon_cells = u32::from(LON_BANDS) * SUBDIVISIONS - 1;
        let lat_cells = (((value.lat() + 90.0) / CELL_DEGREES).floor() as u32).min(max_lat_cells);
        let lon_cells = (((value.lon() + 180.0) / CELL_DEGREES).floor() as u32).min(max_lon_cells);

        let lat_sub = lat_cells % SUBDIVISIONS;
        let lon_sub = lon_cells % SUBDIVISIONS;
        let north = lat_sub >= 3;
        let east = lon_sub >= 3;
        let quadrant = match (north, east) {
            (true, false) => 1,
            (true, true) => 2,
            (false, false) => 3,
            (false, true) => 4,
        };
        let key_row_from_top = 2 - lat_sub % 3;
        let key = key_row_from_top * 3 + lon_sub % 3 + 1;

        Self {
            lon_band: (lon_cells / SUBDIVISIONS + 1) as u16,
            lat_band: (lat_cells / SUBDIVISIONS) as u16,
            quadrant,
            key: key as u8,
        }
    }
}

impl From<CoordinateGars> for CoordinateDd {
    /// Centre of the cell.
    fn from(value: CoordinateGars) -> Self {
        CoordinateDd::new_unchecked(value.lat(), value.lon())
    }
}

/// Position of the cell centre.
impl GeoPoint for CoordinateGars {
    fn lat(&self) -> f64 {
        self.south_west().0 + CELL_DEGREES / 2.0
    }

    fn lon(&self) -> f64 {
        self.south_west().1 + CELL_DEGREES / 2.0
    }
}
