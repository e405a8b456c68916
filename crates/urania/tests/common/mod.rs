#![allow(dead_code)]

use std::collections::HashMap;
use urania::ephemeris::{
    normalize_degrees, Body, BodyPosition, Ephemeris, EphemerisError, GeoLocation, HouseCusps,
    HouseSystem,
};
use urania::geo::{Gazetteer, Place};
use urania::ChartPoint;

/// Fixed sky for tests: every body sits at the same longitude whatever the date
pub struct FixedEphemeris {
    positions: HashMap<Body, (f64, f64)>,
    ascendant: f64,
    pub calls: Vec<f64>,
}

impl FixedEphemeris {
    /// Mid-August evening sky, roughly as seen from Rio de Janeiro
    pub fn august_evening() -> Self {
        let positions = [
            (Body::Sun, 142.99, 0.96),
            (Body::Moon, 355.40, 12.8),
            (Body::Mercury, 159.25, -0.55),
            (Body::Venus, 140.20, 1.23),
            (Body::Mars, 335.80, -0.12),
            (Body::Jupiter, 138.70, 0.22),
            (Body::Saturn, 99.30, 0.09),
            (Body::Uranus, 329.50, -0.04),
            (Body::Neptune, 311.70, -0.02),
            (Body::Pluto, 257.40, -0.01),
            (Body::TrueNode, 29.80, -0.05),
        ];
        Self::new(positions, 343.0)
    }

    pub fn new(positions: impl IntoIterator<Item = (Body, f64, f64)>, ascendant: f64) -> Self {
        Self {
            positions: positions
                .into_iter()
                .map(|(body, lon, speed)| (body, (lon, speed)))
                .collect(),
            ascendant,
            calls: Vec::new(),
        }
    }
}

impl Ephemeris for FixedEphemeris {
    fn body_position(&mut self, jd: f64, body: Body) -> Result<BodyPosition, EphemerisError> {
        self.calls.push(jd);
        let &(lon, speed) = self.positions.get(&body).ok_or(EphemerisError::CalculationFailed {
            body,
            jd,
            message: "not in table".to_string(),
        })?;
        Ok(BodyPosition {
            lon,
            lat: 0.0,
            distance: 1.0,
            speed_lon: speed,
        })
    }

    fn houses(
        &mut self,
        _jd: f64,
        _location: GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError> {
        let mut cusps = [0.0; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            *cusp = normalize_degrees(self.ascendant + 30.0 * i as f64);
        }
        Ok(HouseCusps {
            system,
            cusps,
            ascendant: self.ascendant,
            midheaven: normalize_degrees(self.ascendant + 270.0),
        })
    }
}

pub fn gazetteer() -> Gazetteer {
    Gazetteer::new(vec![
        Place {
            name: "Rio de Janeiro, Brazil".to_string(),
            aliases: vec!["Rio".to_string()],
            lat: -22.9035,
            lon: -43.2096,
            timezone: Some("America/Sao_Paulo".to_string()),
        },
        Place {
            name: "Bouvet Island".to_string(),
            aliases: vec![],
            lat: -54.4208,
            lon: 3.3464,
            timezone: None,
        },
    ])
}

pub fn point(body: Body, lon: f64) -> ChartPoint {
    ChartPoint::new(body, lon, 1.0)
}
