use crate::aspects::{Aspect, AspectCalculator, AspectSettings};
use crate::chart::error::ChartError;
use crate::chart::point::ChartPoint;
use crate::chart::request::{ChartKind, ResolvedRequest};
use crate::ephemeris::{julian_day, Body, Ephemeris, GeoLocation, HouseCusps, HouseSystem};
use crate::western::{is_day_chart, part_of_fortune};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything computed for one chart. Built once per request and read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub kind: ChartKind,
    pub house_system: HouseSystem,
    pub instant: DateTime<Utc>,
    pub local: NaiveDateTime,
    pub zone: String,
    pub location: GeoLocation,
    pub place: Option<String>,
    pub julian_day: f64,
    /// Ephemeris bodies in report order, then the South Node and Fortune
    pub points: Vec<ChartPoint>,
    pub houses: HouseCusps,
    pub aspects: Vec<Aspect>,
    pub day_chart: bool,
    pub warnings: Vec<String>,
}

impl ChartData {
    /// Query the ephemeris and derive nodes, Fortune and aspects
    pub fn compute(
        request: &ResolvedRequest,
        ephemeris: &mut dyn Ephemeris,
        aspect_settings: &AspectSettings,
    ) -> Result<Self, ChartError> {
        let jd = julian_day(request.instant);
        log::debug!("Computing {} chart for JD {:.6}", request.kind, jd);

        let bodies = request.kind.bodies();
        let mut points = Vec::with_capacity(bodies.len() + 2);
        for &body in bodies {
            let pos = ephemeris.body_position(jd, body)?;
            points.push(ChartPoint::new(body, pos.lon, pos.speed_lon));
        }

        let houses = ephemeris.houses(jd, request.location, request.house_system)?;

        let sun = longitude_of(&points, Body::Sun)?;
        let moon = longitude_of(&points, Body::Moon)?;
        let node = longitude_of(&points, Body::TrueNode)?;

        points.push(ChartPoint::derived(Body::SouthNode, node + 180.0));

        let day_chart = is_day_chart(sun, houses.ascendant);
        points.push(ChartPoint::derived(
            Body::Fortune,
            part_of_fortune(houses.ascendant, sun, moon, day_chart),
        ));

        let aspects = AspectCalculator::new(aspect_settings.clone()).compute(&points);

        Ok(Self {
            kind: request.kind,
            house_system: request.house_system,
            instant: request.instant,
            local: request.local,
            zone: request.zone.name().to_string(),
            location: request.location,
            place: request.place.clone(),
            julian_day: jd,
            points,
            houses,
            aspects,
            day_chart,
            warnings: request.warnings.clone(),
        })
    }

    pub fn point(&self, body: Body) -> Option<&ChartPoint> {
        self.points.iter().find(|p| p.body() == body)
    }

    pub fn ascendant(&self) -> f64 {
        self.houses.ascendant
    }

    pub fn midheaven(&self) -> f64 {
        self.houses.midheaven
    }
}

fn longitude_of(points: &[ChartPoint], body: Body) -> Result<f64, ChartError> {
    points
        .iter()
        .find(|p| p.body() == body)
        .map(|p| p.true_longitude())
        .ok_or(ChartError::MissingInput(match body {
            Body::Sun => "Sun position",
            Body::Moon => "Moon position",
            _ => "lunar node position",
        }))
}
