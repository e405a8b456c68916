use crate::ephemeris::Body;
use crate::rendering::primitives::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Major aspects, in the order they are tested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

impl AspectKind {
    /// Priority order: the first kind within orb wins
    pub const ALL: [AspectKind; 5] = [
        AspectKind::Conjunction,
        AspectKind::Opposition,
        AspectKind::Trine,
        AspectKind::Square,
        AspectKind::Sextile,
    ];

    /// Exact angle for this aspect
    pub fn angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Opposition => 180.0,
            AspectKind::Trine => 120.0,
            AspectKind::Square => 90.0,
            AspectKind::Sextile => 60.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::Opposition => "Opposition",
            AspectKind::Trine => "Trine",
            AspectKind::Square => "Square",
            AspectKind::Sextile => "Sextile",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "☌",
            AspectKind::Opposition => "☍",
            AspectKind::Trine => "△",
            AspectKind::Square => "□",
            AspectKind::Sextile => "⚹",
        }
    }

    /// Conjunction, opposition and square are hard; trine and sextile soft
    pub fn is_hard(self) -> bool {
        matches!(
            self,
            AspectKind::Conjunction | AspectKind::Opposition | AspectKind::Square
        )
    }

    /// Line colour on the wheel
    pub fn color(self) -> Color {
        if self.is_hard() {
            Color::rgb(255, 0, 0)
        } else {
            Color::rgb(0, 128, 0)
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An aspect between two distinct points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub point1: Body,
    pub point2: Body,
    pub kind: AspectKind,
    /// Shortest separation between the true longitudes, 0..=180
    pub angular_distance: f64,
    /// Deviation from the exact angle
    pub orb: f64,
    /// Within 0.1 degrees of exact
    pub exact: bool,
    /// Whether the separation is moving towards the exact angle
    pub applying: bool,
}

impl Aspect {
    pub fn involves(&self, body: Body) -> bool {
        self.point1 == body || self.point2 == body
    }
}

/// Settings for aspect calculations
#[derive(Debug, Clone, PartialEq)]
pub struct AspectSettings {
    /// Orb used for every kind without an override
    pub orb: f64,
    /// Per-kind orb overrides, indexed by `AspectKind as usize`
    pub overrides: [Option<f64>; 5],
}

impl AspectSettings {
    pub fn with_orb(orb: f64) -> Self {
        Self {
            orb,
            overrides: [None; 5],
        }
    }

    pub fn set_orb(&mut self, kind: AspectKind, orb: f64) {
        self.overrides[kind as usize] = Some(orb);
    }

    pub fn orb_for(&self, kind: AspectKind) -> f64 {
        self.overrides[kind as usize].unwrap_or(self.orb)
    }
}

impl Default for AspectSettings {
    fn default() -> Self {
        Self::with_orb(8.0)
    }
}
