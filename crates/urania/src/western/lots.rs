//! Arabic parts. Only the Part of Fortune is drawn.

use crate::ephemeris::normalize_degrees;
use crate::western::houses::forward_arc;

/// A chart is diurnal when the Sun is above the horizon, i.e. in houses
/// 7 to 12: at least half a circle past the Ascendant in zodiacal order.
pub fn is_day_chart(sun: f64, ascendant: f64) -> bool {
    forward_arc(ascendant, sun) >= 180.0
}

/// Part of Fortune: Asc + Moon - Sun by day, Asc - Moon + Sun by night
pub fn part_of_fortune(ascendant: f64, sun: f64, moon: f64, day: bool) -> f64 {
    if day {
        normalize_degrees(ascendant + moon - sun)
    } else {
        normalize_degrees(ascendant - moon + sun)
    }
}
