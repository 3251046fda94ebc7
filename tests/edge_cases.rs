use proximityhash::{
    Config, CoverageQuery, LongitudeWrap, ProximityError, ProximityHasher, ProximityHasherBuilder,
    create_geohash_set,
};
use std::sync::Arc;
use std::thread;

/// Test 1: Coverage crossing the antimeridian from the west
#[test]
fn test_antimeridian_normalized_wrap() {
    let query = CoverageQuery::new(0.0, -179.99, 5000.0, 5);
    let (cells, stats) = ProximityHasher::new()
        .cover_with_stats(&query, ())
        .expect("Coverage failed");

    assert_eq!(stats.points_skipped, 0);

    // Western mirrors wrap to the far east of the map
    let east: Vec<_> = cells.keys().filter(|h| h.starts_with('x')).collect();
    let west: Vec<_> = cells.keys().filter(|h| h.starts_with('8')).collect();
    assert!(!east.is_empty());
    assert!(!west.is_empty());
}

/// Test 2: Legacy wrap keeps the latitude-keyed underflow check
///
/// The legacy check compares latitude against -180, which never triggers, so
/// western overflow past the antimeridian is not corrected and the codec
/// rejects those points.
#[test]
fn test_antimeridian_legacy_wrap() {
    let query = CoverageQuery::new(0.0, -179.99, 5000.0, 5);
    let hasher = ProximityHasherBuilder::new()
        .longitude_wrap(LongitudeWrap::Legacy)
        .build()
        .expect("Failed to build hasher");

    let (cells, stats) = hasher.cover_with_stats(&query, ()).unwrap();

    assert_eq!(stats.points_skipped, stats.cells_accepted * 2);
    assert!(cells.keys().all(|h| h.starts_with('8') || h.starts_with('2')));
}

/// Test 3: Eastern overflow wraps in both modes
#[test]
fn test_antimeridian_from_the_east() {
    let query = CoverageQuery::new(0.0, 179.99, 5000.0, 5);

    for wrap in [LongitudeWrap::Normalized, LongitudeWrap::Legacy] {
        let hasher = ProximityHasherBuilder::new()
            .longitude_wrap(wrap)
            .build()
            .unwrap();
        let (cells, stats) = hasher.cover_with_stats(&query, ()).unwrap();

        assert_eq!(stats.points_skipped, 0, "{:?}", wrap);
        assert!(cells.keys().any(|h| h.starts_with('8')), "{:?}", wrap);
    }
}

/// Test 4: Centers on the poles do not fail, they produce nothing
#[test]
fn test_poles() {
    for latitude in [90.0, -90.0] {
        let query = CoverageQuery::new(latitude, 0.0, 1000.0, 5);
        let (cells, stats) = ProximityHasher::new()
            .cover_with_stats(&query, 1.0)
            .expect("Pole coverage should not error");

        assert!(cells.is_empty());
        assert_eq!(stats.points_skipped, stats.cells_accepted * 4);
    }
}

/// Test 5: Near the pole but not on it
#[test]
fn test_near_pole() {
    let cells = create_geohash_set(89.9, 45.0, 1000.0, 5).expect("Coverage failed");
    assert!(!cells.is_empty());
    assert!(cells.iter().all(|h| h.len() == 5));
}

/// Test 6: Radius so large the grid exceeds the limit
#[test]
fn test_grid_limit() {
    let result = create_geohash_set(51.5074, -0.1278, 50_000.0, 11);
    match result {
        Err(ProximityError::GridTooLarge {
            lat_steps,
            lon_steps,
            limit,
        }) => {
            assert!(lat_steps * lon_steps > limit);
        }
        other => panic!("expected GridTooLarge, got {:?}", other),
    }

    let hasher = ProximityHasherBuilder::new()
        .max_grid_cells(u64::MAX)
        .build()
        .unwrap();
    let query = CoverageQuery::new(51.5074, -0.1278, 20.0, 11);
    assert!(hasher.cover_set(&query).is_ok());
}

/// Test 7: Invalid inputs fail fast
#[test]
fn test_invalid_inputs() {
    let cases = [
        CoverageQuery::new(91.0, 0.0, 100.0, 5),
        CoverageQuery::new(0.0, 181.0, 100.0, 5),
        CoverageQuery::new(f64::NAN, 0.0, 100.0, 5),
        CoverageQuery::new(0.0, 0.0, -100.0, 5),
        CoverageQuery::new(0.0, 0.0, f64::INFINITY, 5),
    ];

    for query in cases {
        assert!(
            matches!(
                ProximityHasher::new().cover_set(&query),
                Err(ProximityError::InvalidInput(_))
            ),
            "{:?}",
            query
        );
    }
}

/// Test 8: Hasher shared across threads gives identical results
#[test]
fn test_shared_hasher() {
    let hasher = Arc::new(ProximityHasher::new());
    let query = CoverageQuery::new(37.7749, -122.4194, 1500.0, 6);
    let expected = hasher.cover_set(&query).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let hasher = Arc::clone(&hasher);
            thread::spawn(move || hasher.cover_set(&query).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("Thread panicked"), expected);
    }
}

/// Test 9: Configuration loaded from JSON drives the hasher
#[test]
fn test_config_from_json() {
    let config = Config::from_json(
        r#"{
            "earth_radius_m": 6371000.0,
            "longitude_wrap": "legacy",
            "max_grid_cells": 100
        }"#,
    )
    .expect("Failed to parse config");

    let hasher = ProximityHasher::with_config(config).unwrap();
    assert_eq!(hasher.config().longitude_wrap, LongitudeWrap::Legacy);

    let query = CoverageQuery::new(0.0, 0.0, 50_000.0, 5);
    assert!(matches!(
        hasher.cover_set(&query),
        Err(ProximityError::GridTooLarge { limit: 100, .. })
    ));
}

/// Test 10: Larger sphere shrinks the angular offsets
#[test]
fn test_custom_earth_radius() {
    let query = CoverageQuery::new(10.0, 10.0, 3000.0, 6);

    let default = ProximityHasher::new().cover_set(&query).unwrap();
    let huge = ProximityHasherBuilder::new()
        .earth_radius(6_371_000.0 * 1000.0)
        .build()
        .unwrap()
        .cover_set(&query)
        .unwrap();

    // On a sphere a thousand times larger every offset collapses onto the center cell
    assert_eq!(huge.len(), 1);
    assert!(default.len() > huge.len());
    assert!(huge.contains(&query.center_geohash().unwrap()));
}
