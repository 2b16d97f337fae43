//! Population floor example for geotext-rs
//!
//! This example demonstrates per-call floors, engine-wide floors, and that
//! engines sharing one gazetteer do not affect each other.

use geotext_core::{GeoText, ReadOptions, Result};
use std::sync::Arc;

const TEXT: &str = "Trabzon is home to Of, far smaller than Munich";

fn city_names(geo: &GeoText) -> Vec<&str> {
    geo.results().cities().map(|c| c.name.as_str()).collect()
}

fn main() -> Result<()> {
    println!("=== geotext-rs Population Floor Example ===\n");

    let mut geo = GeoText::load_default()?;

    // Example 1: Per-call floor
    println!("--- Example 1: Per-call floor ---");
    for floor in [0, 100_000, 2_000_000] {
        geo.read(TEXT, &ReadOptions::default().min_population(floor));
        println!("floor {floor:>9}: {:?}", city_names(&geo));
    }
    println!();

    // Example 2: Engine floor
    println!("--- Example 2: Engine floor ---");
    let mut other = GeoText::new(Arc::clone(geo.gazetteer()));
    geo.set_population_limit(500_000);
    geo.read(TEXT, &ReadOptions::default());
    other.read(TEXT, &ReadOptions::default());
    println!("raised engine: {:?}", city_names(&geo));
    println!("other engine:  {:?}", city_names(&other));
    println!();

    // Example 3: A per-call floor below the engine floor has no effect
    println!("--- Example 3: Lower per-call floor ---");
    geo.read(TEXT, &ReadOptions::default().min_population(1));
    println!("engine floor {}: {:?}", geo.gazetteer().population_floor(), city_names(&geo));

    Ok(())
}
