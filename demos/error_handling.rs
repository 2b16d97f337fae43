//! Error handling example for geotext-rs
//!
//! This example demonstrates load errors and the inputs that are not errors.

use geotext_core::{Gazetteer, GazetteerBuilder, GazetteerPaths, GeoError, GeoText, ReadOptions, Result};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== geotext-rs Error Handling Example ===\n");

    // Example 1: Missing data directory
    println!("--- Example 1: Loading from a missing directory ---");
    match Gazetteer::build_from_paths(&GazetteerPaths::in_dir("/no/such/dir"), 0) {
        Ok(_) => println!("✓ unexpectedly loaded"),
        Err(GeoError::NotFound(msg)) => println!("✗ not found: {msg}"),
        Err(e) => return Err(e),
    }
    println!();

    // Example 2: Dangling references are rejected at build time
    println!("--- Example 2: Abbreviation pointing nowhere ---");
    let result = GazetteerBuilder::new()
        .country("US", "United States", 327_167_434)
        .city_abbreviation("SF", "San Francisco")
        .build();
    match result {
        Err(GeoError::InvalidData(msg)) => println!("✗ invalid data: {msg}"),
        other => println!("unexpected: {other:?}"),
    }
    println!();

    // Example 3: Misses and empty text are not errors
    println!("--- Example 3: Nothing to find ---");
    let gazetteer = Gazetteer::load_cached(&GazetteerPaths::default(), 0)?;
    let mut geo = GeoText::new(Arc::new(gazetteer));
    for text in ["", "Nothing to see here", "Atlantis"] {
        let found = geo.read(text, &ReadOptions::default()).is_empty();
        println!("{text:?}: empty = {found}");
    }

    Ok(())
}
