use crate::chart::ChartPoint;
use crate::ephemeris::{normalize_degrees, Body};
use crate::layout::interval::ArcInterval;
use serde::{Deserialize, Serialize};

/// Tuning for glyph displacement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutSettings {
    /// Angular width reserved around each glyph, in degrees
    pub overlap_threshold: f64,
    /// How far a glyph is pushed forward on each retry
    pub offset_step: f64,
    /// Retries per point before accepting an overlapping slot
    pub max_attempts: u32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            overlap_threshold: 4.0,
            offset_step: 4.0,
            max_attempts: 30,
        }
    }
}

/// Where a point's glyph goes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub point: ChartPoint,
    pub display_longitude: f64,
    /// The slot search ran out of attempts; the glyph may overlap a neighbour
    pub exhausted: bool,
}

impl Placement {
    pub fn body(&self) -> Body {
        self.point.body()
    }

    pub fn true_longitude(&self) -> f64 {
        self.point.true_longitude()
    }

    pub fn displaced(&self) -> bool {
        self.display_longitude != self.point.true_longitude()
    }
}

/// Result of one layout pass, ordered by ascending true longitude.
/// Look placements up by body rather than by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    placements: Vec<Placement>,
}

impl Layout {
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn get(&self, body: Body) -> Option<&Placement> {
        self.placements.iter().find(|p| p.body() == body)
    }

    pub fn display_longitude(&self, body: Body) -> Option<f64> {
        self.get(body).map(|p| p.display_longitude)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter()
    }
}

/// Greedy slot search: lower longitudes claim their slot first, later
/// points step forward until their arc is free.
pub struct LayoutResolver {
    settings: LayoutSettings,
}

impl LayoutResolver {
    pub fn new(settings: LayoutSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    pub fn resolve(&self, points: &[ChartPoint]) -> Layout {
        let threshold = self.settings.overlap_threshold;
        let step = self.settings.offset_step;

        let mut sorted: Vec<ChartPoint> = points.to_vec();
        // Stable sort: points at identical longitudes keep their input order
        sorted.sort_by(|a, b| a.true_longitude().total_cmp(&b.true_longitude()));

        let mut occupied: Vec<ArcInterval> = Vec::with_capacity(sorted.len());
        let mut placements = Vec::with_capacity(sorted.len());

        for point in sorted {
            let mut candidate = point.true_longitude();
            let mut found_slot = false;

            for _ in 0..self.settings.max_attempts {
                let slot = ArcInterval::centered(candidate, threshold);
                if occupied.iter().any(|taken| taken.overlaps(&slot)) {
                    candidate = normalize_degrees(candidate + step);
                } else {
                    found_slot = true;
                    break;
                }
            }

            if !found_slot {
                log::warn!(
                    "Could not find a free slot for {} after {} attempts; using {:.2}°",
                    point.name(),
                    self.settings.max_attempts,
                    candidate
                );
            } else if candidate != point.true_longitude() {
                log::debug!(
                    "Moved {} glyph from {:.2}° to {:.2}°",
                    point.name(),
                    point.true_longitude(),
                    candidate
                );
            }

            occupied.push(ArcInterval::centered(candidate, threshold));
            placements.push(Placement {
                point,
                display_longitude: candidate,
                exhausted: !found_slot,
            });
        }

        Layout { placements }
    }
}

impl Default for LayoutResolver {
    fn default() -> Self {
        Self::new(LayoutSettings::default())
    }
}

/// Assign display longitudes to `points`
pub fn resolve_layout(points: &[ChartPoint], settings: LayoutSettings) -> Layout {
    LayoutResolver::new(settings).resolve(points)
}
