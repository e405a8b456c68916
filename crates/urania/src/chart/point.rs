use crate::ephemeris::{normalize_degrees, Body};
use crate::western::SignPosition;
use serde::{Deserialize, Serialize};

/// A named position on the chart.
///
/// The true longitude is fixed at construction. Glyph displacement lives
/// in [`crate::layout::Placement`], never here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    body: Body,
    true_longitude: f64,
    speed: f64,
    retrograde: bool,
}

impl ChartPoint {
    /// A point computed by the ephemeris, with its daily speed in longitude
    pub fn new(body: Body, longitude: f64, speed: f64) -> Self {
        Self {
            body,
            true_longitude: normalize_degrees(longitude),
            speed,
            retrograde: body.can_retrograde() && speed < 0.0,
        }
    }

    /// A point derived from other points; never retrograde
    pub fn derived(body: Body, longitude: f64) -> Self {
        Self::new(body, longitude, 0.0)
    }

    pub fn body(&self) -> Body {
        self.body
    }

    pub fn name(&self) -> &'static str {
        self.body.name()
    }

    pub fn true_longitude(&self) -> f64 {
        self.true_longitude
    }

    /// Degrees per day; zero for derived points
    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn retrograde(&self) -> bool {
        self.retrograde
    }

    pub fn sign_position(&self) -> SignPosition {
        SignPosition::from_longitude(self.true_longitude)
    }
}
