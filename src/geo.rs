//! # Great-Circle Helpers
//!
//! Distance and bearing between two positions on a spherical Earth. Because
//! the Earth is no exact sphere, distances may be off by up to 0.5%.

use libm::{atan2, cos, floor, sin, sqrt};

/// Mean Earth radius in meters.
pub const EARTH_MEAN_RADIUS: f64 = 6_371_009.0;

const CARDINALS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Distance in meters between two positions given in signed decimal degrees.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::geo::distance_between;
///
/// // London to Paris
/// let meters = distance_between(51.508131, -0.128002, 48.856614, 2.352222);
/// assert!((meters - 343_550.0).abs() < 1_000.0);
/// ```
pub fn distance_between(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let delta = (lng1 - lng2).to_radians();
    let (sin_dlng, cos_dlng) = (sin(delta), cos(delta));
    let (lat1, lat2) = (lat1.to_radians(), lat2.to_radians());
    let (sin_lat1, cos_lat1) = (sin(lat1), cos(lat1));
    let (sin_lat2, cos_lat2) = (sin(lat2), cos(lat2));

    let x = cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_dlng;
    let y = cos_lat2 * sin_dlng;
    let numerator = sqrt(x * x + y * y);
    let denominator = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_dlng;

    atan2(numerator, denominator) * EARTH_MEAN_RADIUS
}

/// Initial bearing in degrees from the first position to the second, in
/// `[0, 360)` with north at 0 and west at 270.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::geo::course_to;
///
/// let due_east = course_to(0.0, 0.0, 0.0, 1.0);
/// assert!((due_east - 90.0).abs() < 1e-9);
/// ```
pub fn course_to(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let dlng = (lng2 - lng1).to_radians();
    let (lat1, lat2) = (lat1.to_radians(), lat2.to_radians());

    let y = sin(dlng) * cos(lat2);
    let x = cos(lat1) * sin(lat2) - sin(lat1) * cos(lat2) * cos(dlng);
    let mut bearing = atan2(y, x);
    if bearing < 0.0 {
        bearing += core::f64::consts::TAU;
    }

    bearing.to_degrees()
}

/// The 16-point compass label (`"N"`, `"NNE"`, ... `"NNW"`) of a course.
///
/// # Examples
///
/// ```rust
/// use nmea0183_stream::geo::cardinal;
///
/// assert_eq!(cardinal(0.0), "N");
/// assert_eq!(cardinal(84.4), "E");
/// assert_eq!(cardinal(350.0), "N");
/// ```
pub fn cardinal(course: f64) -> &'static str {
    let bucket = floor((course + 11.25) / 22.5) as i64;
    CARDINALS[bucket.rem_euclid(16) as usize]
}
