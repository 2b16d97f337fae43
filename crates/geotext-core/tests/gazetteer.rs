mod common;

use common::GAZETTEER;
use geotext_core::{Gazetteer, GazetteerPaths, GeoError, Place, Table};
use std::fs;
use std::path::Path;

fn copy_sources(to: &Path) -> GazetteerPaths {
    let from = GazetteerPaths::default();
    let paths = GazetteerPaths::in_dir(to);
    for (src, dst) in from.sources().iter().zip(paths.sources()) {
        fs::copy(src, dst).unwrap();
    }
    paths
}

#[test]
fn bundled_tables_after_conflict_resolution() {
    let stats = GAZETTEER.stats();
    assert_eq!(stats.countries, 12);
    assert_eq!(stats.states, 20);
    // Paris (US) loses to Paris (FR).
    assert_eq!(stats.cities, 22);
    assert_eq!(stats.nationalities, 13);
    assert_eq!(stats.city_abbreviations, 3);
    assert_eq!(stats.country_abbreviations, 3);
    assert_eq!(GAZETTEER.phrase_lengths(), &[3, 2, 1]);
}

#[test]
fn generic_lookup_uses_key_then_search_key() {
    let g = &*GAZETTEER;
    assert_eq!(g.lookup(Table::Country, "DE").map(|p| p.name()), Some("Germany"));
    assert_eq!(g.lookup(Table::Country, "germany").map(|p| p.key()), Some("DE"));
    assert_eq!(g.lookup(Table::State, "US.CA").map(|p| p.name()), Some("California"));
    assert_eq!(g.lookup(Table::City, "new york").map(|p| p.key()), Some("New York"));
    assert_eq!(g.lookup(Table::CityAbbreviation, "LA").map(|p| p.key()), Some("LA"));
    assert!(g.lookup(Table::Nationality, "German").is_none());
    assert!(g.lookup(Table::City, "Atlantis").is_none());
}

#[test]
fn cities_link_to_state_and_country() {
    let g = &*GAZETTEER;
    let munich = g.city(g.find_city("munich").unwrap());
    assert_eq!(g.country(munich.country).name, "Germany");
    assert_eq!(g.state(munich.state.unwrap()).name, "Bavaria");

    let monaco = g.city(g.find_city("monaco").unwrap());
    assert_eq!(monaco.state, None);
}

#[test]
fn cache_is_written_and_reused() {
    let dir = tempfile::tempdir().unwrap();
    let paths = copy_sources(dir.path());

    let built = Gazetteer::load_cached(&paths, 0).unwrap();
    assert!(paths.cache_path().exists());

    let cached = Gazetteer::load_cached(&paths, 25_000).unwrap();
    assert_eq!(cached.stats(), built.stats());
    assert_eq!(cached.population_floor(), 25_000);
}

#[test]
fn unreadable_cache_falls_back_to_sources() {
    let dir = tempfile::tempdir().unwrap();
    let paths = copy_sources(dir.path());
    fs::write(paths.cache_path(), b"not a snapshot").unwrap();

    let g = Gazetteer::load_cached(&paths, 0).unwrap();
    assert_eq!(g.stats(), GAZETTEER.stats());
    assert!(Gazetteer::load_binary(paths.cache_path()).is_ok());
}

#[test]
fn snapshot_round_trip_through_save_as() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.bin");
    GAZETTEER.save_as(&path).unwrap();

    let back = Gazetteer::load_binary(&path).unwrap();
    assert_eq!(back.stats(), GAZETTEER.stats());
    assert_eq!(back.find_city("washington dc"), GAZETTEER.find_city("washington dc"));
}

#[test]
fn missing_source_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = Gazetteer::build_from_paths(&GazetteerPaths::in_dir(dir.path()), 0).unwrap_err();
    assert!(matches!(err, GeoError::NotFound(_)), "{err}");
}

#[test]
fn dangling_abbreviation_is_invalid_data() {
    let dir = tempfile::tempdir().unwrap();
    let paths = copy_sources(dir.path());
    fs::write(&paths.city_abbreviations, "SF\tSan Francisco\n").unwrap();

    let err = Gazetteer::build_from_paths(&paths, 0).unwrap_err();
    assert!(matches!(err, GeoError::InvalidData(_)), "{err}");
}

#[test]
fn malformed_population_is_invalid_data() {
    let dir = tempfile::tempdir().unwrap();
    let paths = copy_sources(dir.path());
    let broken = fs::read_to_string(&paths.countries)
        .unwrap()
        .replace("38682", "lots");
    fs::write(&paths.countries, broken).unwrap();

    let err = Gazetteer::build_from_paths(&paths, 0).unwrap_err();
    assert!(matches!(err, GeoError::InvalidData(_)), "{err}");
}
