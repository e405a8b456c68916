use crate::rendering::primitives::{Color, Point, Shape};
use serde::{Deserialize, Serialize};

/// Chart specification - declarative description of chart to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub width: f32,
    pub height: f32,
    pub center: Point,
    /// Radius of the zodiac ring; every other radius is a fraction of it
    pub radius: f32,
    /// Added to an ecliptic longitude to get its screen angle
    pub rotation_offset: f64,
    pub background_color: Color,
    pub title: String,
    pub shapes: Vec<Shape>,
}

impl ChartSpec {
    /// Create a new empty chart spec
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            center: Point {
                x: width / 2.0,
                y: height / 2.0,
            },
            radius: width.min(height) / 2.0,
            rotation_offset: 0.0,
            background_color: Color::WHITE,
            title: String::new(),
            shapes: Vec::new(),
        }
    }

    /// Screen angle of an ecliptic longitude
    pub fn screen_angle(&self, longitude: f64) -> f64 {
        longitude + self.rotation_offset
    }

    /// Position at `fraction` of the ring radius for an ecliptic longitude
    pub fn at(&self, fraction: f32, longitude: f64) -> Point {
        Point::polar(self.center, self.radius * fraction, self.screen_angle(longitude))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Rotation that puts the Ascendant at 9 o'clock
pub fn rotation_offset(ascendant: f64) -> f64 {
    (180.0 - ascendant + 360.0).rem_euclid(360.0)
}
