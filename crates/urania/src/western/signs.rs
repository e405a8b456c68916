//! Zodiac signs and positions within a sign.

use crate::ephemeris::normalize_degrees;
use crate::rendering::primitives::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub fn color(self) -> Color {
        match self {
            Element::Fire => Color::rgb(255, 0, 0),
            Element::Earth => Color::rgb(0, 128, 0),
            Element::Air => Color::rgb(0xeb, 0x82, 0x04),
            Element::Water => Color::rgb(0, 0, 255),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Sign names and glyphs
const SIGNS: [(&str, &str); 12] = [
    ("Aries", "♈"),
    ("Taurus", "♉"),
    ("Gemini", "♊"),
    ("Cancer", "♋"),
    ("Leo", "♌"),
    ("Virgo", "♍"),
    ("Libra", "♎"),
    ("Scorpio", "♏"),
    ("Sagittarius", "♐"),
    ("Capricorn", "♑"),
    ("Aquarius", "♒"),
    ("Pisces", "♓"),
];

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    pub fn from_index(index: usize) -> Sign {
        Sign::ALL[index % 12]
    }

    /// Sign containing an ecliptic longitude
    pub fn from_longitude(longitude: f64) -> Sign {
        let normalized = normalize_degrees(longitude);
        Sign::from_index((normalized / 30.0).floor() as usize)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        SIGNS[self.index()].0
    }

    pub fn glyph(self) -> &'static str {
        SIGNS[self.index()].1
    }

    /// Longitude of 0° of this sign
    pub fn start_longitude(self) -> f64 {
        self.index() as f64 * 30.0
    }

    pub fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A longitude expressed as whole degrees and minutes inside a sign.
/// Both components are truncated, never rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignPosition {
    pub sign: Sign,
    pub degrees: u8,
    pub minutes: u8,
}

impl SignPosition {
    pub fn from_longitude(longitude: f64) -> Self {
        let normalized = normalize_degrees(longitude);
        let sign = Sign::from_longitude(normalized);
        let in_sign = normalized - sign.start_longitude();
        let degrees = in_sign.floor();
        let minutes = ((in_sign - degrees) * 60.0).floor();
        Self {
            sign,
            degrees: degrees.clamp(0.0, 29.0) as u8,
            minutes: minutes.clamp(0.0, 59.0) as u8,
        }
    }
}

impl fmt::Display for SignPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°{:02}' {}", self.degrees, self.minutes, self.sign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_from_longitude() {
        assert_eq!(Sign::from_longitude(0.0), Sign::Aries);
        assert_eq!(Sign::from_longitude(29.999), Sign::Aries);
        assert_eq!(Sign::from_longitude(30.0), Sign::Taurus);
        assert_eq!(Sign::from_longitude(359.5), Sign::Pisces);
        assert_eq!(Sign::from_longitude(360.0), Sign::Aries);
        assert_eq!(Sign::from_longitude(-15.0), Sign::Pisces);
    }

    #[test]
    fn test_elements_cycle() {
        assert_eq!(Sign::Aries.element(), Element::Fire);
        assert_eq!(Sign::Virgo.element(), Element::Earth);
        assert_eq!(Sign::Aquarius.element(), Element::Air);
        assert_eq!(Sign::Pisces.element(), Element::Water);
    }

    #[test]
    fn test_sign_position_truncates() {
        let pos = SignPosition::from_longitude(142.9999);
        assert_eq!(pos.sign, Sign::Leo);
        assert_eq!(pos.degrees, 22);
        assert_eq!(pos.minutes, 59);
        assert_eq!(pos.to_string(), "22°59' Leo");
    }
}
