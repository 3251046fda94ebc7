//! Radius search over geohash keys.
//!
//! Places are stored under their precision-7 geohash. A radius query is
//! answered by covering the circle with geohashes and looking each one up.

use proximityhash::prelude::*;
use rustc_hash::FxHashMap;

fn main() -> Result<()> {
    println!("=== Nearby Search with Geohash Coverage ===\n");

    let precision = 7;
    let places = [
        ("Trafalgar Square", 51.5080, -0.1281),
        ("Covent Garden", 51.5117, -0.1240),
        ("Westminster Abbey", 51.4994, -0.1273),
        ("Tower of London", 51.5081, -0.0759),
        ("Greenwich", 51.4826, -0.0077),
    ];

    // Index: geohash -> place names
    let mut index: FxHashMap<String, Vec<&str>> = FxHashMap::default();
    for (name, lat, lon) in places {
        let hash = CoverageQuery::new(lat, lon, 0.0, precision).center_geohash()?;
        println!("  indexed {:<18} under {}", name, hash);
        index.entry(hash).or_default().push(name);
    }

    let hasher = ProximityHasherBuilder::new().build()?;
    let query = CoverageQuery::new(51.5074, -0.1278, 1_500.0, precision);
    let (cells, stats) = hasher.cover_with_stats(&query, 1.0)?;

    println!(
        "\nCovered {}m around ({}, {}) with {} geohashes ({} grid cells accepted of {})",
        query.radius,
        query.latitude(),
        query.longitude(),
        stats.unique_hashes,
        stats.cells_accepted,
        stats.candidates_tested
    );

    let mut found: Vec<&str> = cells
        .keys()
        .filter_map(|hash| index.get(hash))
        .flatten()
        .copied()
        .collect();
    found.sort_unstable();

    println!("\nPlaces within ~{}m:", query.radius);
    for name in &found {
        println!("  - {}", name);
    }

    Ok(())
}
