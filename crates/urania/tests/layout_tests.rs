mod common;

use common::point;
use urania::ephemeris::normalize_degrees;
use urania::layout::{ArcInterval, LayoutResolver};
use urania::{resolve_layout, Body, LayoutSettings};

fn circular_gap(a: f64, b: f64) -> f64 {
    let d = normalize_degrees(a - b);
    d.min(360.0 - d)
}

#[test]
fn test_single_point_keeps_true_longitude() {
    let layout = resolve_layout(&[point(Body::Sun, 123.45)], LayoutSettings::default());
    let placement = layout.get(Body::Sun).unwrap();
    assert_eq!(placement.display_longitude, 123.45);
    assert!(!placement.displaced());
    assert!(!placement.exhausted);
}

#[test]
fn test_close_pair_is_spread_apart() {
    let layout = resolve_layout(
        &[point(Body::Sun, 10.0), point(Body::Moon, 11.0)],
        LayoutSettings::default(),
    );
    let sun = layout.get(Body::Sun).unwrap();
    let moon = layout.get(Body::Moon).unwrap();

    assert_eq!(sun.true_longitude(), 10.0);
    assert_eq!(moon.true_longitude(), 11.0);
    assert_eq!(sun.display_longitude, 10.0);
    assert_eq!(moon.display_longitude, 15.0);
    assert!(circular_gap(sun.display_longitude, moon.display_longitude) >= 4.0);
}

#[test]
fn test_pair_exactly_one_threshold_apart_stays_put() {
    for (a, b) in [(2.1, 6.1), (2.6, 6.6), (3.1, 7.1), (3.6, 7.6)] {
        let layout = resolve_layout(
            &[point(Body::Sun, a), point(Body::Moon, b)],
            LayoutSettings::default(),
        );
        let moon = layout.get(Body::Moon).unwrap();
        assert!(!moon.displaced(), "Moon at {} moved to {}", b, moon.display_longitude);
        assert_eq!(moon.display_longitude, b);
    }
}

#[test]
fn test_cluster_resolved_in_longitude_order() {
    // Input order deliberately differs from longitude order
    let points = [
        point(Body::Mars, 2.0),
        point(Body::Sun, 0.0),
        point(Body::Venus, 1.0),
    ];
    let layout = resolve_layout(&points, LayoutSettings::default());

    assert_eq!(layout.display_longitude(Body::Sun), Some(0.0));
    assert_eq!(layout.display_longitude(Body::Venus), Some(5.0));
    assert_eq!(layout.display_longitude(Body::Mars), Some(10.0));

    let order: Vec<Body> = layout.iter().map(|p| p.body()).collect();
    assert_eq!(order, vec![Body::Sun, Body::Venus, Body::Mars]);

    let displays: Vec<f64> = layout.iter().map(|p| p.display_longitude).collect();
    for i in 0..displays.len() {
        for j in (i + 1)..displays.len() {
            assert!(circular_gap(displays[i], displays[j]) >= 4.0);
        }
    }
}

#[test]
fn test_displacement_wraps_past_360() {
    let layout = resolve_layout(
        &[point(Body::Sun, 358.0), point(Body::Moon, 359.0)],
        LayoutSettings::default(),
    );
    let moon = layout.display_longitude(Body::Moon).unwrap();
    assert!(moon < 360.0);
    assert!((moon - 3.0).abs() < 1e-9);
    assert!(circular_gap(358.0, moon) >= 4.0);
}

#[test]
fn test_points_near_zero_see_points_near_360() {
    let layout = resolve_layout(
        &[point(Body::Sun, 359.0), point(Body::Moon, 0.5)],
        LayoutSettings::default(),
    );
    // Moon is processed first (0.5 < 359) and keeps its place
    assert_eq!(layout.display_longitude(Body::Moon), Some(0.5));
    let sun = layout.display_longitude(Body::Sun).unwrap();
    assert!(circular_gap(sun, 0.5) >= 4.0);
}

#[test]
fn test_true_longitude_never_changes() {
    let points = [
        point(Body::Sun, 100.0),
        point(Body::Mercury, 100.5),
        point(Body::Venus, 101.0),
        point(Body::Mars, 101.5),
    ];
    let resolver = LayoutResolver::default();
    for _ in 0..3 {
        let layout = resolver.resolve(&points);
        for original in &points {
            let placed = layout.get(original.body()).unwrap();
            assert_eq!(placed.true_longitude(), original.true_longitude());
        }
    }
    assert_eq!(points[1].true_longitude(), 100.5);
}

#[test]
fn test_resolution_is_deterministic() {
    let points = [
        point(Body::Jupiter, 138.7),
        point(Body::Venus, 140.2),
        point(Body::Sun, 142.99),
        point(Body::Mercury, 159.1),
    ];
    let first = resolve_layout(&points, LayoutSettings::default());
    let second = resolve_layout(&points, LayoutSettings::default());
    assert_eq!(first, second);
}

#[test]
fn test_overcrowded_arc_degrades_without_panicking() {
    let settings = LayoutSettings {
        overlap_threshold: 30.0,
        offset_step: 30.0,
        max_attempts: 30,
    };
    // 13 glyphs of 30° cannot fit on a 360° circle
    let points: Vec<_> = Body::ALL.iter().map(|&b| point(b, 50.0)).collect();
    let layout = resolve_layout(&points, settings);
    assert_eq!(layout.len(), 13);
    assert!(layout.iter().any(|p| p.exhausted));
}

#[test]
fn test_wrapping_interval_overlaps_interval_at_zero() {
    let wrapping = ArcInterval::from_bounds(358.0, 2.0);
    let at_zero = ArcInterval::from_bounds(0.0, 1.0);
    assert!(wrapping.overlaps(&at_zero));
    assert!(at_zero.overlaps(&wrapping));
}
