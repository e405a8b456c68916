//! House membership and house-arc geometry.

use crate::ephemeris::normalize_degrees;
use crate::ephemeris::HouseCusps;

/// Forward arc length from `from` to `to` in zodiacal order, in [0, 360)
pub fn forward_arc(from: f64, to: f64) -> f64 {
    normalize_degrees(to - from)
}

/// House (1..12) containing a longitude
pub fn house_of(longitude: f64, houses: &HouseCusps) -> u8 {
    let lon = normalize_degrees(longitude);
    for i in 0..12 {
        let start = houses.cusps[i];
        let span = forward_arc(start, houses.cusps[(i + 1) % 12]);
        if forward_arc(start, lon) < span {
            return (i + 1) as u8;
        }
    }
    // Degenerate cusp sets (all cusps equal) put everything in the first house
    1
}

/// Centre of the arc of house `index` (0-based), used to place house numbers
pub fn house_midpoint(index: usize, houses: &HouseCusps) -> f64 {
    let start = houses.cusps[index % 12];
    let end = houses.cusps[(index + 1) % 12];
    normalize_degrees(start + forward_arc(start, end) / 2.0)
}
