pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod geo;
pub mod layout;
pub mod rendering;
pub mod report;
pub mod session;
pub mod western;

pub use aspects::{detect_aspects, Aspect, AspectKind, AspectSettings};
pub use chart::{ChartData, ChartError, ChartKind, ChartPoint, ChartRequest, LocationInput, Resolution};
pub use ephemeris::{Body, Ephemeris, GeoLocation, HouseSystem, SwissEphemerisAdapter};
pub use layout::{resolve_layout, Layout, LayoutSettings, Placement};
pub use session::RenderSession;

use chrono::{DateTime, Utc};

/// Resolve a request and compute its chart in one call
pub fn compute_chart(
    request: &ChartRequest,
    geocoder: &dyn geo::Geocoder,
    timezones: &dyn geo::TimezoneLookup,
    ephemeris: &mut dyn Ephemeris,
    aspect_settings: &AspectSettings,
    now: DateTime<Utc>,
) -> Result<ChartData, ChartError> {
    let resolved = request.resolve(geocoder, timezones, now)?;
    ChartData::compute(&resolved, ephemeris, aspect_settings)
}
