pub mod adapter;
pub mod types;

pub use adapter::{EphemerisError, SwissEphemerisAdapter};
pub use types::{Body, BodyPosition, GeoLocation, HouseCusps, HouseSystem};

use chrono::{DateTime, Utc};

/// Julian day of the Unix epoch (1970-01-01T00:00:00Z)
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Astronomical ephemeris service.
///
/// Everything the chart needs from the sky goes through this trait, so the
/// rest of the crate can be driven by a fixed table in tests.
pub trait Ephemeris {
    /// Ecliptic position and daily motion of `body` at Julian day `jd` (UT)
    fn body_position(&mut self, jd: f64, body: Body) -> Result<BodyPosition, EphemerisError>;

    /// House cusps, Ascendant and Midheaven for a place and time
    fn houses(
        &mut self,
        jd: f64,
        location: GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError>;
}

/// Convert a UTC instant to a Julian day (UT)
pub fn julian_day(dt: DateTime<Utc>) -> f64 {
    let millis = dt.timestamp_millis() as f64;
    UNIX_EPOCH_JD + millis / 86_400_000.0
}

/// Wrap any angle into [0, 360)
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
