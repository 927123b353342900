//! Position on the surface of the Earth in latitude and longitude.

/// A value that can be expressed as latitude and longitude in decimal degrees.
pub trait GeoPoint {
    /// Latitude in degrees, positive to the north.
    fn lat(&self) -> f64;
    /// Longitude in degrees, positive to the east.
    fn lon(&self) -> f64;

    /// Latitude in radians.
    fn lat_rad(&self) -> f64 {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> f64 {
        self.lon().to_radians()
    }
}
