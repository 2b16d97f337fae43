//! Basic usage example for geotext-rs
//!
//! This example demonstrates how to:
//! - Load the bundled gazetteer
//! - Read a text and list the places found
//! - Count country mentions

use geotext_core::{GeoText, ReadOptions, Result};

fn main() -> Result<()> {
    println!("=== geotext-rs Basic Usage Example ===\n");

    println!("Loading gazetteer...");
    let mut geo = GeoText::load_default()?;
    let stats = geo.gazetteer().stats();
    println!(
        "✓ Loaded {} countries, {} states, {} cities\n",
        stats.countries, stats.states, stats.cities
    );

    // Example 1: Places in a sentence
    println!("--- Example 1: Places in a sentence ---");
    let results = geo.read("Voronezh and New York", &ReadOptions::default());
    for city in results.cities() {
        let country = results.gazetteer().country(city.country);
        println!("City: {} ({}, population {})", city.name, country.code, city.population);
    }
    println!();

    // Example 2: Abbreviations come first
    println!("--- Example 2: LA is Los Angeles, CA is California ---");
    let results = geo.read("It is sunny in LA CA", &ReadOptions::default());
    for city in results.cities() {
        println!("City: {}", city.name);
    }
    for state in results.states() {
        println!("State: {} ({})", state.name, state.key);
    }
    println!();

    // Example 3: Country mentions
    println!("--- Example 3: Country mentions ---");
    geo.read("New York, Texas, and also China", &ReadOptions::default());
    for mention in geo.country_mentions() {
        println!("{} ({}): {}", mention.country.name, mention.country.code, mention.count);
    }
    println!();

    // Example 4: Capitalized runs only
    println!("--- Example 4: Strict mode ---");
    let strict = ReadOptions::default().fuzzy(false);
    let results = geo.read("I met an American in Washington and Manchester", &strict);
    println!(
        "Cities: {:?}",
        results.cities().map(|c| c.name.as_str()).collect::<Vec<_>>()
    );
    println!(
        "Nationalities: {:?}",
        results.nationalities().map(|c| c.code.as_str()).collect::<Vec<_>>()
    );

    Ok(())
}
