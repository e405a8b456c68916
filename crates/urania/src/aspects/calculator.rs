use crate::aspects::types::{Aspect, AspectKind, AspectSettings};
use crate::chart::ChartPoint;
use crate::ephemeris::Body;

/// Orb under which an aspect counts as exact
const EXACT_ORB: f64 = 0.1;

/// Shortest angular separation between two longitudes, in 0..=180
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (lon1 - lon2).abs() % 360.0;
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// Scan every pair of aspectable points with a single orb for all kinds
pub fn detect_aspects(points: &[ChartPoint], orb_degrees: f64) -> Vec<Aspect> {
    AspectCalculator::new(AspectSettings::with_orb(orb_degrees)).compute(points)
}

/// Aspect calculator
pub struct AspectCalculator {
    settings: AspectSettings,
}

impl AspectCalculator {
    pub fn new(settings: AspectSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AspectSettings {
        &self.settings
    }

    /// Aspects between all pairs `i < j` in input order.
    ///
    /// Derived points and the lunar nodes are skipped; they are drawn on the
    /// wheel but never aspected.
    pub fn compute(&self, points: &[ChartPoint]) -> Vec<Aspect> {
        let candidates: Vec<&ChartPoint> = points.iter().filter(|p| p.body().takes_aspects()).collect();

        let mut aspects = Vec::new();
        for i in 0..candidates.len() {
            for j in (i + 1)..candidates.len() {
                let p1 = candidates[i];
                let p2 = candidates[j];
                if p1.body() == p2.body() {
                    continue;
                }

                if let Some(aspect) = self.calculate_aspect(
                    (p1.body(), p1.true_longitude(), p1.speed()),
                    (p2.body(), p2.true_longitude(), p2.speed()),
                ) {
                    aspects.push(aspect);
                }
            }
        }

        log::debug!("Found {} aspects among {} points", aspects.len(), candidates.len());
        aspects
    }

    /// Aspect between two `(body, longitude, speed)` triples, if any
    pub fn calculate_aspect(
        &self,
        (body1, lon1, speed1): (Body, f64, f64),
        (body2, lon2, speed2): (Body, f64, f64),
    ) -> Option<Aspect> {
        let angle_diff = angular_separation(lon1, lon2);

        for kind in AspectKind::ALL {
            let orb_value = (angle_diff - kind.angle()).abs();
            if orb_value <= self.settings.orb_for(kind) {
                return Some(Aspect {
                    point1: body1,
                    point2: body2,
                    kind,
                    angular_distance: angle_diff,
                    orb: orb_value,
                    exact: orb_value < EXACT_ORB,
                    applying: is_aspect_applying(lon1, lon2, speed1, speed2, kind.angle(), angle_diff),
                });
            }
        }

        None
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new(AspectSettings::default())
    }
}

/// Determine if an aspect is applying (approaching exact) or separating
fn is_aspect_applying(
    lon1: f64,
    lon2: f64,
    speed1: f64,
    speed2: f64,
    aspect_angle: f64,
    current_angle: f64,
) -> bool {
    let relative_speed = speed1 - speed2;

    // Points moving together never change their separation
    if relative_speed.abs() < 0.01 {
        return current_angle < aspect_angle + 0.5;
    }

    let mut signed_diff = lon1 - lon2;
    if signed_diff > 180.0 {
        signed_diff -= 360.0;
    } else if signed_diff < -180.0 {
        signed_diff += 360.0;
    }

    let current_distance = (current_angle - aspect_angle).abs();

    // Project forward a small amount (days)
    let time_step = 0.1;
    let mut future_signed_diff = signed_diff + relative_speed * time_step;
    if future_signed_diff > 180.0 {
        future_signed_diff -= 360.0;
    } else if future_signed_diff < -180.0 {
        future_signed_diff += 360.0;
    }

    let future_distance = (future_signed_diff.abs() - aspect_angle).abs();
    future_distance < current_distance
}
