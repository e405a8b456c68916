mod common;

use chrono::{TimeZone, Utc};
use common::{gazetteer, FixedEphemeris};
use urania::chart::ResolvedRequest;
use urania::report::text_report;
use urania::{
    compute_chart, resolve_layout, AspectSettings, Body, ChartData, ChartError, ChartKind,
    ChartRequest, GeoLocation, HouseSystem, LayoutSettings, LocationInput,
};

const RIO: GeoLocation = GeoLocation {
    lat: -22.9035,
    lon: -43.2096,
};

fn natal_request() -> ChartRequest {
    ChartRequest {
        kind: ChartKind::Natal,
        date: Some("2003-08-15".to_string()),
        time: Some("21:30".to_string()),
        timezone: Some("America/Sao_Paulo".to_string()),
        location: LocationInput::Coordinates(RIO),
        house_system: HouseSystem::Placidus,
    }
}

fn resolve(request: &ChartRequest) -> Result<ResolvedRequest, ChartError> {
    let places = gazetteer();
    request.resolve(&places, &places, Utc::now())
}

fn compute(request: &ChartRequest) -> ChartData {
    let places = gazetteer();
    let mut ephemeris = FixedEphemeris::august_evening();
    compute_chart(
        request,
        &places,
        &places,
        &mut ephemeris,
        &AspectSettings::default(),
        Utc::now(),
    )
    .unwrap()
}

#[test]
fn test_local_time_converted_to_utc() {
    let resolved = resolve(&natal_request()).unwrap();
    assert_eq!(resolved.instant, Utc.with_ymd_and_hms(2003, 8, 16, 0, 30, 0).unwrap());
    assert_eq!(resolved.zone.name(), "America/Sao_Paulo");
    assert!(resolved.warnings.is_empty());
}

#[test]
fn test_ephemeris_queried_at_request_julian_day() {
    let resolved = resolve(&natal_request()).unwrap();
    let mut ephemeris = FixedEphemeris::august_evening();
    ChartData::compute(&resolved, &mut ephemeris, &AspectSettings::default()).unwrap();

    let expected = 2_452_867.5 + 0.5 / 24.0;
    assert_eq!(ephemeris.calls.len(), Body::NATAL.len());
    assert!(ephemeris.calls.iter().all(|jd| (jd - expected).abs() < 1e-9));
}

#[test]
fn test_natal_chart_points_and_derived_points() {
    let data = compute(&natal_request());
    assert_eq!(data.points.len(), 13);

    let node = data.point(Body::TrueNode).unwrap().true_longitude();
    let south = data.point(Body::SouthNode).unwrap().true_longitude();
    assert!((south - (node + 180.0)).abs() < 1e-9);

    // Sun below the horizon: night formula Asc - Moon + Sun
    assert!(!data.day_chart);
    let fortune = data.point(Body::Fortune).unwrap().true_longitude();
    assert!((fortune - 130.59).abs() < 1e-6);

    assert!(data.point(Body::Mercury).unwrap().retrograde());
    assert!(!data.point(Body::Sun).unwrap().retrograde());
    assert!(data
        .aspects
        .iter()
        .all(|a| a.point1.takes_aspects() && a.point2.takes_aspects()));
}

#[test]
fn test_end_to_end_is_deterministic() {
    let first = compute(&natal_request());
    let second = compute(&natal_request());
    assert_eq!(first, second);

    let layout_a = resolve_layout(&first.points, LayoutSettings::default());
    let layout_b = resolve_layout(&second.points, LayoutSettings::default());
    assert_eq!(layout_a, layout_b);
}

#[test]
fn test_unknown_timezone_falls_back_to_utc_with_warning() {
    let mut request = natal_request();
    request.timezone = Some("Atlantis/Poseidonis".to_string());
    let resolved = resolve(&request).unwrap();
    assert_eq!(resolved.zone.name(), "UTC");
    assert_eq!(resolved.instant, Utc.with_ymd_and_hms(2003, 8, 15, 21, 30, 0).unwrap());
    assert_eq!(resolved.warnings.len(), 1);
    assert!(resolved.warnings[0].contains("Atlantis/Poseidonis"));
}

#[test]
fn test_timezone_looked_up_from_coordinates() {
    let mut request = natal_request();
    request.timezone = None;
    let resolved = resolve(&request).unwrap();
    assert_eq!(resolved.zone.name(), "America/Sao_Paulo");

    request.location = LocationInput::Coordinates(GeoLocation { lat: 64.1, lon: -21.9 });
    let resolved = resolve(&request).unwrap();
    assert_eq!(resolved.zone.name(), "UTC");
    assert_eq!(resolved.warnings.len(), 1);
}

#[test]
fn test_place_name_resolves_location_and_zone() {
    let mut request = natal_request();
    request.timezone = None;
    request.location = LocationInput::Place("rio".to_string());
    let resolved = resolve(&request).unwrap();
    assert_eq!(resolved.place.as_deref(), Some("Rio de Janeiro, Brazil"));
    assert_eq!(resolved.location, RIO);
    assert_eq!(resolved.zone.name(), "America/Sao_Paulo");
}

#[test]
fn test_place_without_zone_falls_back_to_utc() {
    let mut request = natal_request();
    request.timezone = None;
    request.location = LocationInput::Place("Bouvet Island".to_string());
    let resolved = resolve(&request).unwrap();
    assert_eq!(resolved.zone.name(), "UTC");
    assert_eq!(resolved.warnings.len(), 1);
}

#[test]
fn test_unknown_place_aborts() {
    let mut request = natal_request();
    request.location = LocationInput::Place("Atlantis".to_string());
    match resolve(&request) {
        Err(ChartError::LocationNotFound { query }) => assert_eq!(query, "Atlantis"),
        other => panic!("expected LocationNotFound, got {:?}", other),
    }
}

#[test]
fn test_malformed_date_and_time_abort() {
    let mut request = natal_request();
    request.date = Some("2003-13-01".to_string());
    assert!(matches!(resolve(&request), Err(ChartError::InvalidDate { .. })));

    let mut request = natal_request();
    request.time = Some("21h30".to_string());
    assert!(matches!(resolve(&request), Err(ChartError::InvalidTime { .. })));

    let mut request = natal_request();
    request.date = None;
    assert!(matches!(resolve(&request), Err(ChartError::MissingInput("date"))));
}

#[test]
fn test_dst_fold_takes_earlier_instant() {
    let request = ChartRequest {
        kind: ChartKind::Natal,
        date: Some("2023-11-05".to_string()),
        time: Some("01:30".to_string()),
        timezone: Some("America/New_York".to_string()),
        location: LocationInput::Coordinates(GeoLocation { lat: 40.71, lon: -74.0 }),
        house_system: HouseSystem::Placidus,
    };
    let resolved = resolve(&request).unwrap();
    // 01:30 EDT, before the clocks go back
    assert_eq!(resolved.instant, Utc.with_ymd_and_hms(2023, 11, 5, 5, 30, 0).unwrap());
}

#[test]
fn test_horary_uses_now_and_traditional_bodies() {
    let now = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
    let request = ChartRequest {
        kind: ChartKind::Horary,
        date: None,
        time: None,
        timezone: Some("America/Sao_Paulo".to_string()),
        location: LocationInput::Coordinates(RIO),
        house_system: HouseSystem::Regiomontanus,
    };
    let places = gazetteer();
    let resolved = request.resolve(&places, &places, now).unwrap();
    assert_eq!(resolved.instant, now);
    assert_eq!(resolved.local.format("%H:%M").to_string(), "09:00");

    let mut ephemeris = FixedEphemeris::august_evening();
    let data = ChartData::compute(&resolved, &mut ephemeris, &AspectSettings::default()).unwrap();
    assert_eq!(data.points.len(), 10);
    assert!(data.point(Body::Uranus).is_none());
    assert_eq!(data.houses.system, HouseSystem::Regiomontanus);
}

#[test]
fn test_ephemeris_failure_is_reported() {
    let resolved = resolve(&natal_request()).unwrap();
    let mut ephemeris = FixedEphemeris::new([(Body::Sun, 100.0, 1.0)], 0.0);
    let err = ChartData::compute(&resolved, &mut ephemeris, &AspectSettings::default()).unwrap_err();
    assert!(matches!(err, ChartError::Ephemeris(_)));
}

#[test]
fn test_text_report_lines() {
    let data = compute(&natal_request());
    let report = text_report(&data, 8.0);

    assert!(report.contains("Sun ☉: 22°59' Leo (142.99°)"));
    assert!(report.contains("Mercury ☿: 9°15' Virgo (R) (159.25°)"));
    assert!(report.contains("House 1: 13°00' Pisces"));
    assert!(report.contains("Ascendant: 13°00' Pisces"));
    assert!(report.contains("Sun - Jupiter: Conjunction (4.29°)"));

    let mut quiet = data.clone();
    quiet.aspects.clear();
    assert!(text_report(&quiet, 8.0).contains("No major aspects within 8° orb."));
}
