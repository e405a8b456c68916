use crate::ephemeris::EphemerisError;
use crate::geo::GeoError;
use thiserror::Error;

/// Everything that aborts a chart request
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Location not found: {query}")]
    LocationNotFound { query: String },
    #[error("Location lookup failed: {0}")]
    Geocoding(#[from] GeoError),
    #[error("Invalid date '{input}': {reason}. Use YYYY-MM-DD")]
    InvalidDate { input: String, reason: String },
    #[error("Invalid time '{input}': {reason}. Use HH:MM (24h)")]
    InvalidTime { input: String, reason: String },
    #[error("Missing input: {0}")]
    MissingInput(&'static str),
    #[error("Astrological calculation failed: {0}")]
    Ephemeris(#[from] EphemerisError),
}
