use crate::ephemeris::normalize_degrees;
use serde::{Deserialize, Serialize};

/// Slack for bounds that meet after rounding, e.g. `6.1 - 2.0` against `2.1 + 2.0`
const BOUNDARY_EPSILON: f64 = 1e-9;

/// Half-open arc `[min, max)` on the circle, in degrees.
///
/// `min > max` means the arc runs through 0°/360°. A full or
/// over-full arc is stored with `width >= 360` and overlaps everything.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcInterval {
    pub min: f64,
    pub max: f64,
    width: f64,
}

impl ArcInterval {
    /// Arc of `width` degrees centred on `center`
    pub fn centered(center: f64, width: f64) -> Self {
        let width = width.max(0.0);
        Self {
            min: normalize_degrees(center - width / 2.0),
            max: normalize_degrees(center + width / 2.0),
            width,
        }
    }

    /// Arc from `min` to `max` in zodiacal order
    pub fn from_bounds(min: f64, max: f64) -> Self {
        let min = normalize_degrees(min);
        let max = normalize_degrees(max);
        Self {
            min,
            max,
            width: normalize_degrees(max - min),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn wraps(&self) -> bool {
        self.min > self.max
    }

    /// Whether `angle` lies inside the arc.
    ///
    /// Angles within [`BOUNDARY_EPSILON`] of `max` count as outside, so arcs
    /// built from fractional longitudes still meet without overlapping.
    pub fn contains(&self, angle: f64) -> bool {
        self.width >= 360.0 || normalize_degrees(angle - self.min) < self.width - BOUNDARY_EPSILON
    }

    /// Two arcs overlap iff they share at least one point on the circle.
    ///
    /// Arcs that only touch end-to-start do not overlap, and empty arcs
    /// overlap nothing.
    pub fn overlaps(&self, other: &ArcInterval) -> bool {
        if self.width <= 0.0 || other.width <= 0.0 {
            return false;
        }
        // Two arcs intersect exactly when one of them starts inside the other
        self.contains(other.min) || other.contains(self.min)
    }
}
