use crate::ephemeris::GeoLocation;
use crate::geo::{GeoError, GeocodedPlace, Geocoder, TimezoneLookup};
use serde::{Deserialize, Serialize};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default reach of a place's timezone for coordinate lookups
pub const DEFAULT_TIMEZONE_RADIUS_KM: f64 = 150.0;

/// A known place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// e.g. "São Paulo, Brazil"
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub lat: f64,
    pub lon: f64,
    /// IANA zone id
    #[serde(default)]
    pub timezone: Option<String>,
}

impl Place {
    pub fn location(&self) -> GeoLocation {
        GeoLocation {
            lat: self.lat,
            lon: self.lon,
        }
    }

    fn matches(&self, folded_query: &str) -> bool {
        let name = fold(&self.name);
        if name == folded_query {
            return true;
        }
        // "Sao Paulo" matches "São Paulo, Brazil"
        if name.split(',').next().map(str::trim) == Some(folded_query) {
            return true;
        }
        self.aliases.iter().any(|alias| fold(alias) == folded_query)
    }
}

/// Offline geocoder and timezone lookup over a fixed list of places
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    places: Vec<Place>,
    timezone_radius_km: f64,
}

impl Gazetteer {
    pub fn new(places: Vec<Place>) -> Self {
        Self {
            places,
            timezone_radius_km: DEFAULT_TIMEZONE_RADIUS_KM,
        }
    }

    pub fn with_timezone_radius(mut self, km: f64) -> Self {
        self.timezone_radius_km = km;
        self
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn find(&self, query: &str) -> Option<&Place> {
        let folded = fold(query);
        self.places.iter().find(|p| p.matches(&folded))
    }
}

impl Geocoder for Gazetteer {
    fn geocode(&self, query: &str) -> Result<Option<GeocodedPlace>, GeoError> {
        if query.trim().is_empty() {
            return Err(GeoError::EmptyQuery);
        }
        Ok(self.find(query).map(|place| GeocodedPlace {
            location: place.location(),
            label: place.name.clone(),
        }))
    }
}

impl TimezoneLookup for Gazetteer {
    fn timezone_at(&self, lat: f64, lon: f64) -> Option<String> {
        let here = GeoLocation { lat, lon };
        self.places
            .iter()
            .filter_map(|p| p.timezone.as_ref().map(|tz| (haversine_km(here, p.location()), tz)))
            .filter(|(distance, _)| *distance <= self.timezone_radius_km)
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, tz)| tz.clone())
    }
}

/// Great-circle distance in kilometres
pub fn haversine_km(a: GeoLocation, b: GeoLocation) -> f64 {
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let dlat = lat2 - lat1;
    let dlon = (b.lon - a.lon).to_radians();
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Lowercase, strip Latin diacritics and collapse whitespace
fn fold(s: &str) -> String {
    let mapped: String = s
        .chars()
        .flat_map(|c| c.to_lowercase())
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            'ý' | 'ÿ' => 'y',
            other => other,
        })
        .collect();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}
