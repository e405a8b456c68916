use crate::chart::error::ChartError;
use crate::chart::resolution::Resolution;
use crate::ephemeris::{Body, GeoLocation, HouseSystem};
use crate::geo::{resolve_location, Geocoder, TimezoneLookup};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Fixed birth or event date and time
    Natal,
    /// The moment the question is asked
    Horary,
}

impl ChartKind {
    /// Bodies requested from the ephemeris for this kind of chart
    pub fn bodies(self) -> &'static [Body] {
        match self {
            ChartKind::Natal => &Body::NATAL,
            ChartKind::Horary => &Body::HORARY,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::Natal => "Natal Chart",
            ChartKind::Horary => "Horary Chart",
        }
    }

    /// House system used when the user does not pick one
    pub fn default_house_system(self) -> HouseSystem {
        match self {
            ChartKind::Natal => HouseSystem::Placidus,
            ChartKind::Horary => HouseSystem::Regiomontanus,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChartKind::Natal => "natal",
            ChartKind::Horary => "horary",
        })
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "natal" => Ok(ChartKind::Natal),
            "horary" => Ok(ChartKind::Horary),
            other => Err(format!("unknown chart type '{}', expected natal or horary", other)),
        }
    }
}

/// Where the chart is cast
#[derive(Debug, Clone, PartialEq)]
pub enum LocationInput {
    Coordinates(GeoLocation),
    /// Free text resolved by a geocoder, e.g. "São Paulo, Brazil"
    Place(String),
}

/// Raw user input for one chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    pub kind: ChartKind,
    /// `YYYY-MM-DD`; ignored for horary charts
    pub date: Option<String>,
    /// `HH:MM`, 24-hour; ignored for horary charts
    pub time: Option<String>,
    /// IANA zone name; overrides the zone found for the location
    pub timezone: Option<String>,
    pub location: LocationInput,
    pub house_system: HouseSystem,
}

/// A request with every input turned into concrete values
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    pub kind: ChartKind,
    pub house_system: HouseSystem,
    pub location: GeoLocation,
    pub place: Option<String>,
    pub zone: Tz,
    pub instant: DateTime<Utc>,
    /// Wall-clock time in `zone`
    pub local: NaiveDateTime,
    /// Fallbacks taken while resolving, for the report
    pub warnings: Vec<String>,
}

impl ChartRequest {
    /// Resolve location, zone and instant.
    ///
    /// `now` is the instant used for horary charts; it is passed in so the
    /// caller owns the clock.
    pub fn resolve(
        &self,
        geocoder: &dyn Geocoder,
        timezones: &dyn TimezoneLookup,
        now: DateTime<Utc>,
    ) -> Result<ResolvedRequest, ChartError> {
        let mut warnings = Vec::new();

        let (location, place, located_zone) = match &self.location {
            LocationInput::Coordinates(loc) => (*loc, None, None),
            LocationInput::Place(query) => {
                let (resolved, warning) = resolve_location(query, geocoder, timezones)?.into_parts();
                // An explicit zone makes the geocoder's zone (or lack of one) irrelevant
                if self.timezone.is_none() {
                    warnings.extend(warning);
                }
                (resolved.location, Some(resolved.label), Some(resolved.timezone))
            }
        };

        let zone_resolution = match (&self.timezone, located_zone) {
            (Some(name), _) => parse_timezone(name),
            (None, Some(zone)) => parse_timezone(&zone),
            (None, None) => match timezones.timezone_at(location.lat, location.lon) {
                Some(zone) => parse_timezone(&zone),
                None => Resolution::Fallback {
                    value: Tz::UTC,
                    reason: format!(
                        "Could not determine the timezone at {:.4}, {:.4}. Using UTC.",
                        location.lat, location.lon
                    ),
                },
            },
        };
        let (zone, warning) = zone_resolution.into_parts();
        warnings.extend(warning);

        let (instant, local) = match self.kind {
            ChartKind::Natal => {
                let date = self.date.as_deref().ok_or(ChartError::MissingInput("date"))?;
                let time = self.time.as_deref().ok_or(ChartError::MissingInput("time"))?;
                let local = NaiveDateTime::new(parse_date(date)?, parse_time(time)?);
                (local_to_utc(zone, local, time)?, local)
            }
            ChartKind::Horary => (now, now.with_timezone(&zone).naive_local()),
        };

        log::debug!(
            "Resolved {} chart: {} local ({}) = {} UTC at {:.4}, {:.4}",
            self.kind,
            local,
            zone.name(),
            instant,
            location.lat,
            location.lon
        );

        Ok(ResolvedRequest {
            kind: self.kind,
            house_system: self.house_system,
            location,
            place,
            zone,
            instant,
            local,
            warnings,
        })
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate, ChartError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|e| ChartError::InvalidDate {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// Parse an `HH:MM` 24-hour time
pub fn parse_time(input: &str) -> Result<NaiveTime, ChartError> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M").map_err(|e| ChartError::InvalidTime {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// Look up an IANA zone name, falling back to UTC when it is unknown
pub fn parse_timezone(name: &str) -> Resolution<Tz> {
    match name.trim().parse::<Tz>() {
        Ok(zone) => Resolution::Exact(zone),
        Err(_) => Resolution::Fallback {
            value: Tz::UTC,
            reason: format!("Unknown timezone '{}'. Using UTC.", name.trim()),
        },
    }
}

/// Wall-clock time in `zone` to UTC. Repeated local times (DST fold) take
/// the earlier instant; skipped local times (DST gap) are rejected.
fn local_to_utc(zone: Tz, local: NaiveDateTime, input: &str) -> Result<DateTime<Utc>, ChartError> {
    zone.from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| ChartError::InvalidTime {
            input: input.to_string(),
            reason: format!("{} does not exist in {} (daylight saving gap)", local, zone.name()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_date_rejects_malformed() {
        assert!(parse_date("2003-08-15").is_ok());
        assert!(matches!(parse_date("15/08/2003"), Err(ChartError::InvalidDate { .. })));
        assert!(matches!(parse_date("2003-02-30"), Err(ChartError::InvalidDate { .. })));
    }

    #[test]
    fn test_parse_time_rejects_malformed() {
        let t = parse_time("21:30").unwrap();
        assert_eq!((t.hour(), t.minute()), (21, 30));
        assert!(matches!(parse_time("25:00"), Err(ChartError::InvalidTime { .. })));
        assert!(matches!(parse_time("9pm"), Err(ChartError::InvalidTime { .. })));
    }

    #[test]
    fn test_unknown_timezone_falls_back_to_utc() {
        let res = parse_timezone("Mars/Olympus_Mons");
        assert!(res.is_fallback());
        assert_eq!(*res.value(), Tz::UTC);
        assert!(parse_timezone("America/Sao_Paulo").warning().is_none());
    }

    #[test]
    fn test_dst_gap_is_rejected() {
        // 2023-03-12 02:30 does not exist in New York
        let zone: Tz = "America/New_York".parse().unwrap();
        let local = NaiveDateTime::new(parse_date("2023-03-12").unwrap(), parse_time("02:30").unwrap());
        assert!(local_to_utc(zone, local, "02:30").is_err());
    }

    #[test]
    fn test_kind_defaults() {
        assert_eq!(ChartKind::Horary.default_house_system(), HouseSystem::Regiomontanus);
        assert_eq!(ChartKind::Horary.bodies().len(), 8);
        assert_eq!("Natal".parse::<ChartKind>().unwrap(), ChartKind::Natal);
    }
}
