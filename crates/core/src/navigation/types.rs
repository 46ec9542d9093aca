//! Navigation type definitions
//!
//! - `GeoPosition`: WGS84 position with altitude
//! - `Distance`: Split horizontal/vertical distance between two positions

/// Geodetic position
///
/// Latitude and longitude are kept in `f64`: at `f32` a degree of latitude
/// only resolves to roughly a metre, which is coarser than a loiter step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoPosition {
    /// Latitude in degrees (-90 to +90)
    pub lat: f64,
    /// Longitude in degrees (-180 to +180)
    pub lon: f64,
    /// Altitude in meters (AMSL)
    pub alt: f32,
}

impl GeoPosition {
    /// Create a new geodetic position
    pub const fn new(lat: f64, lon: f64, alt: f32) -> Self {
        Self { lat, lon, alt }
    }

    /// Same latitude/longitude at a different altitude
    pub fn with_alt(self, alt: f32) -> Self {
        Self { alt, ..self }
    }
}

/// Distance between two geodetic positions
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Distance {
    /// Great-circle distance in meters
    pub horizontal: f32,
    /// Altitude difference in meters (first minus second)
    pub vertical: f32,
    /// Straight-line 3-D distance in meters
    pub total: f32,
}
