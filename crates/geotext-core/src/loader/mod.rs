// crates/geotext-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file discovery, decompression, delimited
//! rows) and hands typed rows to the converter in [`crate::model`].

use crate::error::{GeoError, Result};
use crate::model::Gazetteer;
use crate::raw::{AliasRow, CityRow, CountryRow, SourceRows, StateRow};
use once_cell::sync::OnceCell;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

pub mod builder;
pub mod common_io;

static GAZETTEER_CACHE: OnceCell<Arc<Gazetteer>> = OnceCell::new();

/// The six source files of a data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GazetteerPaths {
    pub dir: PathBuf,
    pub countries: PathBuf,
    pub states: PathBuf,
    pub cities: PathBuf,
    pub nationalities: PathBuf,
    pub city_abbreviations: PathBuf,
    pub country_abbreviations: PathBuf,
}

impl GazetteerPaths {
    pub const COUNTRIES: &'static str = "countryInfo.txt";
    pub const STATES: &'static str = "admin1CodesASCII.txt";
    pub const CITIES: &'static str = "cities15000.txt";
    pub const NATIONALITIES: &'static str = "nationalities.txt";
    pub const CITY_ABBREVIATIONS: &'static str = "cities_abbreviations.txt";
    pub const COUNTRY_ABBREVIATIONS: &'static str = "countries_abbreviations.txt";
    pub const CACHE_STEM: &'static str = "gazetteer";

    /// Default file names inside `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            countries: dir.join(Self::COUNTRIES),
            states: dir.join(Self::STATES),
            cities: dir.join(Self::CITIES),
            nationalities: dir.join(Self::NATIONALITIES),
            city_abbreviations: dir.join(Self::CITY_ABBREVIATIONS),
            country_abbreviations: dir.join(Self::COUNTRY_ABBREVIATIONS),
            dir,
        }
    }

    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn sources(&self) -> [&Path; 6] {
        [
            &self.countries,
            &self.states,
            &self.cities,
            &self.nationalities,
            &self.city_abbreviations,
            &self.country_abbreviations,
        ]
    }

    pub fn cache_path(&self) -> PathBuf {
        common_io::get_cache_path(&self.dir, Self::CACHE_STEM, crate::model::CACHE_SUFFIX)
    }
}

impl Default for GazetteerPaths {
    fn default() -> Self {
        Self::in_dir(Self::default_data_dir())
    }
}

/// Reads a delimited file and returns the selected columns of every row.
///
/// Lines starting with `#` and blank lines are skipped. Values are trimmed
/// but otherwise untouched; folding happens in the converter.
pub fn read_rows(path: &Path, separator: char, columns: &[usize]) -> Result<Vec<Vec<String>>> {
    let reader = BufReader::new(common_io::open_stream(path)?);
    let mut rows = Vec::new();

    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split(separator).collect();
        let row = columns
            .iter()
            .map(|&c| {
                fields.get(c).map(|v| v.trim().to_string()).ok_or_else(|| {
                    GeoError::InvalidData(format!(
                        "{}:{}: missing column {c}",
                        path.display(),
                        n + 1
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
    }

    debug!(path = %path.display(), rows = rows.len(), "read source rows");
    Ok(rows)
}

fn parse_population(value: &str, path: &Path) -> Result<u64> {
    if value.is_empty() {
        return Ok(0);
    }
    value.parse().map_err(|_| {
        GeoError::InvalidData(format!(
            "{}: population {value:?} is not an integer",
            path.display()
        ))
    })
}

/// Reads all six files into typed rows using the GeoNames column layouts.
pub fn read_source_rows(paths: &GazetteerPaths) -> Result<SourceRows> {
    let countries = read_rows(&paths.countries, '\t', &[4, 0, 7])?
        .into_iter()
        .map(|r| {
            Ok(CountryRow {
                population: parse_population(&r[2], &paths.countries)?,
                name: r[0].clone(),
                code: r[1].clone(),
            })
        })
        .collect::<Result<_>>()?;

    let states = read_rows(&paths.states, '\t', &[0, 1])?
        .into_iter()
        .map(|mut r| StateRow {
            name: r.swap_remove(1),
            key: r.swap_remove(0),
        })
        .collect();

    let cities = read_rows(&paths.cities, '\t', &[1, 8, 10, 14])?
        .into_iter()
        .map(|r| {
            Ok(CityRow {
                population: parse_population(&r[3], &paths.cities)?,
                name: r[0].clone(),
                country_code: r[1].clone(),
                admin1: r[2].clone(),
            })
        })
        .collect::<Result<_>>()?;

    Ok(SourceRows {
        countries,
        states,
        cities,
        nationalities: read_aliases(&paths.nationalities, ':')?,
        city_abbreviations: read_aliases(&paths.city_abbreviations, '\t')?,
        country_abbreviations: read_aliases(&paths.country_abbreviations, '\t')?,
    })
}

fn read_aliases(path: &Path, separator: char) -> Result<Vec<AliasRow>> {
    Ok(read_rows(path, separator, &[0, 1])?
        .into_iter()
        .map(|mut r| AliasRow {
            target: r.swap_remove(1),
            alias: r.swap_remove(0),
        })
        .collect())
}

impl Gazetteer {
    /// The store built from the crate's bundled data directory, loaded once
    /// per process and shared.
    pub fn bundled() -> Result<Arc<Self>> {
        GAZETTEER_CACHE
            .get_or_try_init(|| Self::load_cached(&GazetteerPaths::default(), 0).map(Arc::new))
            .cloned()
    }
}
