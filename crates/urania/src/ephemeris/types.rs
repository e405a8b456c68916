use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Every point that can appear on a chart.
///
/// The first ten are computed directly by the ephemeris. `TrueNode` is
/// computed too but is never part of the aspect scan; `SouthNode` and
/// `Fortune` are derived from other points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    TrueNode,
    SouthNode,
    Fortune,
}

struct BodyInfo {
    name: &'static str,
    glyph: &'static str,
    /// Swiss Ephemeris body number (SE_SUN = 0 ... SE_TRUE_NODE = 11)
    swe_code: Option<u32>,
    can_retrograde: bool,
    takes_aspects: bool,
}

const BODY_TABLE: [BodyInfo; 13] = [
    BodyInfo { name: "Sun", glyph: "☉", swe_code: Some(0), can_retrograde: false, takes_aspects: true },
    BodyInfo { name: "Moon", glyph: "☽", swe_code: Some(1), can_retrograde: false, takes_aspects: true },
    BodyInfo { name: "Mercury", glyph: "☿", swe_code: Some(2), can_retrograde: true, takes_aspects: true },
    BodyInfo { name: "Venus", glyph: "♀", swe_code: Some(3), can_retrograde: true, takes_aspects: true },
    BodyInfo { name: "Mars", glyph: "♂", swe_code: Some(4), can_retrograde: true, takes_aspects: true },
    BodyInfo { name: "Jupiter", glyph: "♃", swe_code: Some(5), can_retrograde: true, takes_aspects: true },
    BodyInfo { name: "Saturn", glyph: "♄", swe_code: Some(6), can_retrograde: true, takes_aspects: true },
    BodyInfo { name: "Uranus", glyph: "♅", swe_code: Some(7), can_retrograde: true, takes_aspects: true },
    BodyInfo { name: "Neptune", glyph: "♆", swe_code: Some(8), can_retrograde: true, takes_aspects: true },
    BodyInfo { name: "Pluto", glyph: "♇", swe_code: Some(9), can_retrograde: true, takes_aspects: true },
    BodyInfo { name: "True Node", glyph: "☊", swe_code: Some(11), can_retrograde: false, takes_aspects: false },
    BodyInfo { name: "True Node South", glyph: "☋", swe_code: None, can_retrograde: false, takes_aspects: false },
    BodyInfo { name: "Fortune", glyph: "⊗", swe_code: None, can_retrograde: false, takes_aspects: false },
];

impl Body {
    pub const ALL: [Body; 13] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::TrueNode,
        Body::SouthNode,
        Body::Fortune,
    ];

    /// Bodies computed for a natal chart, in report order
    pub const NATAL: [Body; 11] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::TrueNode,
    ];

    /// Horary charts stop at Saturn
    pub const HORARY: [Body; 8] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::TrueNode,
    ];

    fn info(self) -> &'static BodyInfo {
        &BODY_TABLE[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn glyph(self) -> &'static str {
        self.info().glyph
    }

    pub fn swe_code(self) -> Option<u32> {
        self.info().swe_code
    }

    /// Whether a negative daily speed marks this body as retrograde
    pub fn can_retrograde(self) -> bool {
        self.info().can_retrograde
    }

    /// Derived points and the lunar nodes are drawn but never aspected
    pub fn takes_aspects(self) -> bool {
        self.info().takes_aspects
    }

    pub fn is_derived(self) -> bool {
        self.swe_code().is_none()
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Position of a body as returned by the ephemeris
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Longitude in degrees (0-360)
    pub lon: f64,
    /// Latitude in degrees
    pub lat: f64,
    /// Distance in AU
    pub distance: f64,
    /// Speed in longitude (degrees per day)
    pub speed_lon: f64,
}

/// House systems understood by the house computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    Placidus,
    Regiomontanus,
    Koch,
    Equal,
    WholeSign,
    Campanus,
}

impl HouseSystem {
    pub const ALL: [HouseSystem; 6] = [
        HouseSystem::Placidus,
        HouseSystem::Regiomontanus,
        HouseSystem::Koch,
        HouseSystem::Equal,
        HouseSystem::WholeSign,
        HouseSystem::Campanus,
    ];

    /// One-byte system code passed to the house computation
    pub fn code(self) -> u8 {
        match self {
            HouseSystem::Placidus => b'P',
            HouseSystem::Regiomontanus => b'R',
            HouseSystem::Koch => b'K',
            HouseSystem::Equal => b'E',
            HouseSystem::WholeSign => b'W',
            HouseSystem::Campanus => b'C',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HouseSystem::Placidus => "Placidus",
            HouseSystem::Regiomontanus => "Regiomontanus",
            HouseSystem::Koch => "Koch",
            HouseSystem::Equal => "Equal",
            HouseSystem::WholeSign => "Whole Sign",
            HouseSystem::Campanus => "Campanus",
        }
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HouseSystem {
    type Err = super::EphemerisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "placidus" | "p" => Ok(HouseSystem::Placidus),
            "regiomontanus" | "r" => Ok(HouseSystem::Regiomontanus),
            "koch" | "k" => Ok(HouseSystem::Koch),
            "equal" | "e" => Ok(HouseSystem::Equal),
            "wholesign" | "w" => Ok(HouseSystem::WholeSign),
            "campanus" | "c" => Ok(HouseSystem::Campanus),
            _ => Err(super::EphemerisError::InvalidHouseSystem {
                system: s.to_string(),
                valid: HouseSystem::ALL.iter().map(|h| h.name().to_string()).collect(),
            }),
        }
    }
}

/// House cusps and angles for one chart. Read-only once computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    pub system: HouseSystem,
    /// Cusps of houses 1..12, in degrees
    pub cusps: [f64; 12],
    pub ascendant: f64,
    pub midheaven: f64,
}

impl HouseCusps {
    pub fn descendant(&self) -> f64 {
        (self.ascendant + 180.0) % 360.0
    }

    pub fn imum_coeli(&self) -> f64 {
        (self.midheaven + 180.0) % 360.0
    }

    /// Cusp of house `n` (1-based)
    pub fn cusp(&self, n: u8) -> Option<f64> {
        match n {
            1..=12 => Some(self.cusps[usize::from(n) - 1]),
            _ => None,
        }
    }
}
