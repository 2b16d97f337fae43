// crates/geotext-core/src/raw.rs
//! Source rows as they come out of the data files, before folding,
//! canonicalization and conflict resolution.

/// `countryInfo.txt`: name, ISO code, population.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRow {
    pub name: String,
    pub code: String,
    pub population: u64,
}

/// `admin1CodesASCII.txt`: `"US.CA"`, name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateRow {
    pub key: String,
    pub name: String,
}

/// `cities15000.txt`: name, country code, admin1 code (may be empty), population.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityRow {
    pub name: String,
    pub country_code: String,
    pub admin1: String,
    pub population: u64,
}

/// Alias files: alias text and the key (or name) of the place it points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRow {
    pub alias: String,
    pub target: String,
}

/// Everything needed to build a [`Gazetteer`](crate::Gazetteer).
#[derive(Debug, Clone, Default)]
pub struct SourceRows {
    pub countries: Vec<CountryRow>,
    pub states: Vec<StateRow>,
    pub cities: Vec<CityRow>,
    pub nationalities: Vec<AliasRow>,
    pub city_abbreviations: Vec<AliasRow>,
    pub country_abbreviations: Vec<AliasRow>,
}
