#![allow(dead_code)]

use geotext_core::{Gazetteer, GazetteerPaths, GeoText, ReadOptions};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Built straight from the bundled files, without touching the on-disk cache.
pub static GAZETTEER: Lazy<Arc<Gazetteer>> = Lazy::new(|| {
    Arc::new(Gazetteer::build_from_paths(&GazetteerPaths::default(), 0).unwrap())
});

pub fn engine() -> GeoText {
    GeoText::new(Arc::clone(&GAZETTEER))
}

pub fn fuzzy() -> ReadOptions {
    ReadOptions::default()
}

pub fn strict() -> ReadOptions {
    ReadOptions::default().fuzzy(false)
}

pub fn cities(geo: &GeoText) -> Vec<String> {
    geo.results().cities().map(|c| c.name.clone()).collect()
}

pub fn states(geo: &GeoText) -> Vec<String> {
    geo.results().states().map(|s| s.name.clone()).collect()
}

pub fn countries(geo: &GeoText) -> Vec<String> {
    geo.results().countries().map(|c| c.name.clone()).collect()
}

pub fn nationalities(geo: &GeoText) -> Vec<String> {
    geo.results().nationalities().map(|c| c.code.clone()).collect()
}

/// Mentions as `(code, count)` in reported order.
pub fn mentions(geo: &GeoText) -> Vec<(String, usize)> {
    geo.country_mentions()
        .into_iter()
        .map(|m| (m.country.code.clone(), m.count))
        .collect()
}

/// Mentions ignoring the order of equal counts.
pub fn mention_map(geo: &GeoText) -> BTreeMap<String, usize> {
    mentions(geo).into_iter().collect()
}
