//! Place-name and timezone lookup.
//!
//! The chart pipeline only sees the two traits below; the shipped
//! implementation is the offline [`Gazetteer`].

pub mod gazetteer;

pub use gazetteer::{Gazetteer, Place};

use crate::chart::{ChartError, Resolution};
use crate::ephemeris::GeoLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoError {
    #[error("Empty location query")]
    EmptyQuery,
}

/// A geocoder match
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    pub location: GeoLocation,
    /// Canonical name of the match, shown in the report
    pub label: String,
}

/// Place name to coordinates
pub trait Geocoder {
    /// `Ok(None)` means the service answered but knows no such place
    fn geocode(&self, query: &str) -> Result<Option<GeocodedPlace>, GeoError>;
}

/// Coordinates to IANA timezone id
pub trait TimezoneLookup {
    fn timezone_at(&self, lat: f64, lon: f64) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub location: GeoLocation,
    pub label: String,
    pub timezone: String,
}

/// Geocode `query` and find its timezone.
///
/// No match aborts the request; a match without a timezone falls back to UTC.
pub fn resolve_location(
    query: &str,
    geocoder: &dyn Geocoder,
    timezones: &dyn TimezoneLookup,
) -> Result<Resolution<ResolvedLocation>, ChartError> {
    if query.trim().is_empty() {
        return Err(GeoError::EmptyQuery.into());
    }

    let place = geocoder
        .geocode(query)?
        .ok_or_else(|| ChartError::LocationNotFound {
            query: query.to_string(),
        })?;
    log::debug!(
        "Geocoded '{}' to {} ({:.4}, {:.4})",
        query,
        place.label,
        place.location.lat,
        place.location.lon
    );

    Ok(match timezones.timezone_at(place.location.lat, place.location.lon) {
        Some(timezone) => Resolution::Exact(ResolvedLocation {
            location: place.location,
            label: place.label,
            timezone,
        }),
        None => Resolution::Fallback {
            reason: format!("Could not determine the timezone for {}. Using UTC.", place.label),
            value: ResolvedLocation {
                location: place.location,
                label: place.label,
                timezone: "UTC".to_string(),
            },
        },
    })
}
