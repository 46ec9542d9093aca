//! Geodesy helpers
//!
//! Conversions between geodetic positions and local north/east offsets on a
//! spherical earth, plus distances between positions. The local frame is
//! x = north, y = east, in meters.

use libm::{atan2, atan2f, cos, sin, sqrt, sqrtf};
use nalgebra::Vector2;

use super::types::{Distance, GeoPosition};

/// Mean earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

const DEG_TO_RAD: f64 = core::f64::consts::PI / 180.0;
const RAD_TO_DEG: f64 = 180.0 / core::f64::consts::PI;

/// North/east vector in meters pointing from `from` to `to`
pub fn vector_to(from: &GeoPosition, to: &GeoPosition) -> Vector2<f32> {
    let lat_from = from.lat * DEG_TO_RAD;
    let lat_to = to.lat * DEG_TO_RAD;
    let delta_lon = (to.lon - from.lon) * DEG_TO_RAD;

    let north = EARTH_RADIUS_M
        * (cos(lat_from) * sin(lat_to) - sin(lat_from) * cos(lat_to) * cos(delta_lon));
    let east = EARTH_RADIUS_M * sin(delta_lon) * cos(lat_to);

    Vector2::new(north as f32, east as f32)
}

/// Position reached by moving `offset` (north, east) away from `origin`
///
/// The altitude of `origin` is carried over unchanged.
pub fn add_vector(origin: &GeoPosition, offset: &Vector2<f32>) -> GeoPosition {
    let lat_rad = origin.lat * DEG_TO_RAD;

    let lat = (lat_rad + offset.x as f64 / EARTH_RADIUS_M) * RAD_TO_DEG;
    let lon = origin.lon + (offset.y as f64 / (EARTH_RADIUS_M * cos(lat_rad))) * RAD_TO_DEG;

    GeoPosition::new(lat, lon, origin.alt)
}

/// Horizontal (haversine), vertical and 3-D distance from `a` to `b`
pub fn distance(a: &GeoPosition, b: &GeoPosition) -> Distance {
    let lat_a = a.lat * DEG_TO_RAD;
    let lat_b = b.lat * DEG_TO_RAD;
    let delta_lat = (b.lat - a.lat) * DEG_TO_RAD;
    let delta_lon = (b.lon - a.lon) * DEG_TO_RAD;

    let sin_dlat = sin(delta_lat / 2.0);
    let sin_dlon = sin(delta_lon / 2.0);
    let h = sin_dlat * sin_dlat + cos(lat_a) * cos(lat_b) * sin_dlon * sin_dlon;
    let c = 2.0 * atan2(sqrt(h), sqrt(1.0 - h));

    let horizontal = (EARTH_RADIUS_M * c) as f32;
    let vertical = a.alt - b.alt;

    Distance {
        horizontal,
        vertical,
        total: sqrtf(horizontal * horizontal + vertical * vertical),
    }
}

/// Bearing of a north/east vector in radians, 0 = north, positive towards east
pub fn bearing(offset: &Vector2<f32>) -> f32 {
    atan2f(offset.y, offset.x)
}

/// Wrap an angle in radians to -PI..=PI
pub fn wrap_pi(angle: f32) -> f32 {
    use core::f32::consts::{PI, TAU};

    if !angle.is_finite() {
        return angle;
    }

    let mut a = angle % TAU;
    if a > PI {
        a -= TAU;
    } else if a < -PI {
        a += TAU;
    }
    a
}
