// crates/geotext-core/src/model/convert.rs
use super::flat::{AliasLink, City, CityId, Country, CountryId, Gazetteer, State, StateId};
use super::table::PlaceTable;
use crate::error::{GeoError, Result};
use crate::raw::{AliasRow, CityRow, CountryRow, SourceRows, StateRow};
use crate::text::{canonicalize, strip_city_suffix, word_count};
use std::collections::{BTreeSet, HashMap};
use tracing::info;

/// **Standard Converter:** Raw rows -> Flat tables.
///
/// Every value is ASCII-folded and the identifying column loses a trailing
/// ` city`. Rows sharing a canonical identifier collapse to one: the higher
/// population wins, otherwise the later row. The surviving row keeps the
/// position of the first one.
pub fn from_rows(rows: SourceRows, population_floor: u64) -> Result<Gazetteer> {
    let SourceRows {
        countries: country_rows,
        states: state_rows,
        cities: city_rows,
        nationalities: nationality_rows,
        city_abbreviations: city_abbreviation_rows,
        country_abbreviations: country_abbreviation_rows,
    } = rows;

    // 1. Countries
    let mut countries = PlaceTable::new();
    for row in keep_most_populous(
        country_rows,
        |r: &CountryRow| canonicalize(&r.name),
        |r| Some(r.population),
    ) {
        let name = fold_name(&row.name);
        countries.insert(Country {
            code: fold(&row.code),
            search_key: canonicalize(&name),
            name,
            population: row.population,
        });
    }

    // 2. States (parent: country code before the dot)
    let mut states = PlaceTable::new();
    for row in keep_most_populous(state_rows, |r: &StateRow| fold(&r.key), |_| None) {
        let key = fold(&row.key);
        let code = key.split('.').next().unwrap_or_default();
        let country = find_country(&countries, code, &key)?;
        let name = fold(&row.name);
        states.insert(State {
            search_key: canonicalize(&name),
            name,
            key,
            country,
        });
    }

    // 3. Cities (parents: country code, optional admin1)
    let mut cities = PlaceTable::new();
    for row in keep_most_populous(
        city_rows,
        |r: &CityRow| canonicalize(&r.name),
        |r| Some(r.population),
    ) {
        let name = fold_name(&row.name);
        let country_code = fold(&row.country_code);
        let country = find_country(&countries, &country_code, &name)?;
        let admin1 = fold(&row.admin1);
        let state = if admin1.is_empty() {
            None
        } else {
            states
                .lookup(&format!("{country_code}.{admin1}"))
                .map(StateId::from_index)
        };
        cities.insert(City {
            search_key: canonicalize(&name),
            name,
            population: row.population,
            country,
            state,
        });
    }

    // 4. Aliases
    let mut nationalities = PlaceTable::new();
    for row in dedup_aliases(nationality_rows) {
        let alias = fold_name(&row.alias);
        let target = find_country(&countries, &fold(&row.target), &alias)?;
        nationalities.insert(AliasLink {
            search_key: canonicalize(&alias),
            alias,
            target,
        });
    }

    let mut city_abbreviations = PlaceTable::new();
    for row in dedup_aliases(city_abbreviation_rows) {
        let alias = fold_name(&row.alias);
        let target = cities
            .lookup(&canonicalize(&row.target))
            .map(CityId::from_index)
            .ok_or_else(|| {
                GeoError::InvalidData(format!(
                    "abbreviation {alias:?} points to unknown city {:?}",
                    row.target
                ))
            })?;
        city_abbreviations.insert(AliasLink {
            search_key: alias.clone(),
            alias,
            target,
        });
    }

    let mut country_abbreviations = PlaceTable::new();
    for row in dedup_aliases(country_abbreviation_rows) {
        let alias = fold_name(&row.alias);
        let target = find_country(&countries, &fold(&row.target), &alias)?;
        country_abbreviations.insert(AliasLink {
            search_key: alias.clone(),
            alias,
            target,
        });
    }

    let mut lengths = BTreeSet::new();
    lengths.extend(countries.phrases().map(word_count));
    lengths.extend(states.phrases().map(word_count));
    lengths.extend(cities.phrases().map(word_count));
    lengths.extend(nationalities.phrases().map(word_count));
    lengths.extend(city_abbreviations.phrases().map(word_count));
    lengths.extend(country_abbreviations.phrases().map(word_count));
    let phrase_lengths: Vec<usize> = lengths.into_iter().rev().filter(|&n| n > 0).collect();

    info!(
        countries = countries.len(),
        states = states.len(),
        cities = cities.len(),
        nationalities = nationalities.len(),
        city_abbreviations = city_abbreviations.len(),
        country_abbreviations = country_abbreviations.len(),
        population_floor,
        "gazetteer built"
    );

    Ok(Gazetteer {
        countries,
        states,
        cities,
        nationalities,
        city_abbreviations,
        country_abbreviations,
        phrase_lengths,
        population_floor,
    })
}

fn fold(s: &str) -> String {
    deunicode::deunicode(s.trim())
}

fn fold_name(s: &str) -> String {
    strip_city_suffix(&fold(s)).to_string()
}

fn find_country(countries: &PlaceTable<Country>, code: &str, referrer: &str) -> Result<CountryId> {
    countries
        .lookup(code)
        .map(CountryId::from_index)
        .ok_or_else(|| {
            GeoError::InvalidData(format!("{referrer:?} points to unknown country {code:?}"))
        })
}

fn dedup_aliases(rows: Vec<AliasRow>) -> Vec<AliasRow> {
    keep_most_populous(rows, |r: &AliasRow| canonicalize(&r.alias), |_| None)
}

/// Collapses rows with the same identifier. A row only loses to an earlier
/// one when both have a population and the earlier one is strictly larger.
fn keep_most_populous<R>(
    rows: Vec<R>,
    key: impl Fn(&R) -> String,
    population: impl Fn(&R) -> Option<u64>,
) -> Vec<R> {
    let mut out: Vec<R> = Vec::with_capacity(rows.len());
    let mut seen: HashMap<String, usize> = HashMap::new();
    for row in rows {
        let k = key(&row);
        match seen.get(&k) {
            Some(&i) => {
                let keep_old = matches!(
                    (population(&out[i]), population(&row)),
                    (Some(old), Some(new)) if old > new
                );
                if !keep_old {
                    out[i] = row;
                }
            }
            None => {
                seen.insert(k, out.len());
                out.push(row);
            }
        }
    }
    out
}

/// Builds a [`Gazetteer`] from in-memory rows.
///
/// ```rust
/// use geotext_core::GazetteerBuilder;
///
/// let gazetteer = GazetteerBuilder::new()
///     .country("DE", "Germany", 82_927_922)
///     .state("DE.02", "Bavaria")
///     .city("Munich", "DE", "02", 1_260_391)
///     .nationality("German", "DE")
///     .build()
///     .unwrap();
///
/// assert_eq!(gazetteer.stats().cities, 1);
/// assert!(gazetteer.find_city("munich").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GazetteerBuilder {
    rows: SourceRows,
    population_floor: u64,
}

impl GazetteerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: SourceRows) -> Self {
        Self {
            rows,
            population_floor: 0,
        }
    }

    pub fn country(mut self, code: &str, name: &str, population: u64) -> Self {
        self.rows.countries.push(CountryRow {
            name: name.into(),
            code: code.into(),
            population,
        });
        self
    }

    pub fn state(mut self, key: &str, name: &str) -> Self {
        self.rows.states.push(StateRow {
            key: key.into(),
            name: name.into(),
        });
        self
    }

    /// `admin1` may be empty for cities outside any state.
    pub fn city(mut self, name: &str, country_code: &str, admin1: &str, population: u64) -> Self {
        self.rows.cities.push(CityRow {
            name: name.into(),
            country_code: country_code.into(),
            admin1: admin1.into(),
            population,
        });
        self
    }

    pub fn nationality(mut self, alias: &str, country_code: &str) -> Self {
        self.rows.nationalities.push(alias_row(alias, country_code));
        self
    }

    pub fn city_abbreviation(mut self, alias: &str, city_name: &str) -> Self {
        self.rows.city_abbreviations.push(alias_row(alias, city_name));
        self
    }

    pub fn country_abbreviation(mut self, alias: &str, country_code: &str) -> Self {
        self.rows.country_abbreviations.push(alias_row(alias, country_code));
        self
    }

    pub fn population_floor(mut self, floor: u64) -> Self {
        self.population_floor = floor;
        self
    }

    pub fn build(self) -> Result<Gazetteer> {
        from_rows(self.rows, self.population_floor)
    }
}

fn alias_row(alias: &str, target: &str) -> AliasRow {
    AliasRow {
        alias: alias.into(),
        target: target.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Place;

    fn base() -> GazetteerBuilder {
        GazetteerBuilder::new()
            .country("US", "United States", 327_167_434)
            .country("FR", "France", 66_987_244)
            .state("US.TX", "Texas")
            .state("US.DC", "District of Columbia")
            .state("FR.11", "Île-de-France")
    }

    #[test]
    fn larger_population_wins_a_name_collision() {
        let gaz = base()
            .city("Paris", "FR", "11", 2_138_551)
            .city("Paris", "US", "TX", 25_171)
            .build()
            .unwrap();

        assert_eq!(gaz.stats().cities, 1);
        let id = gaz.find_city("paris").unwrap();
        assert_eq!(gaz.country(gaz.city(id).country).code, "FR");
    }

    #[test]
    fn later_row_wins_when_population_ties() {
        let gaz = base()
            .city("Springfield", "US", "TX", 100)
            .city("Springfield", "FR", "11", 100)
            .build()
            .unwrap();
        let id = gaz.find_city("springfield").unwrap();
        assert_eq!(gaz.country(gaz.city(id).country).code, "FR");
    }

    #[test]
    fn names_are_folded_and_canonicalized() {
        let gaz = base()
            .city("Washington, D.C.", "US", "DC", 689_545)
            .city("New York City", "US", "", 8_175_133)
            .build()
            .unwrap();

        let dc = gaz.city(gaz.find_city("washington dc").unwrap());
        assert_eq!(dc.name, "Washington, D.C.");
        assert_eq!(gaz.state(dc.state.unwrap()).name, "District of Columbia");

        let ny = gaz.city(gaz.find_city("new york").unwrap());
        assert_eq!(ny.name, "New York");
        assert_eq!(ny.state, None);

        let idf = gaz.state(gaz.find_state("ile de france").unwrap());
        assert_eq!(idf.name, "Ile-de-France");
        assert_eq!(idf.code(), "11");
    }

    #[test]
    fn unknown_admin1_leaves_city_without_state() {
        let gaz = base().city("Austin", "US", "ZZ", 961_855).build().unwrap();
        let austin = gaz.city(gaz.find_city("austin").unwrap());
        assert_eq!(austin.state, None);
    }

    #[test]
    fn dangling_references_are_rejected() {
        let err = base().city("Lyon", "XX", "", 500_000).build().unwrap_err();
        assert!(matches!(err, GeoError::InvalidData(_)));

        let err = base().city_abbreviation("NYC", "New York City").build().unwrap_err();
        assert!(matches!(err, GeoError::InvalidData(_)));

        let err = base().state("XX.01", "Nowhere").build().unwrap_err();
        assert!(matches!(err, GeoError::InvalidData(_)));
    }

    #[test]
    fn abbreviations_keep_their_case() {
        let gaz = base()
            .city("Los Angeles", "US", "", 3_971_883)
            .city_abbreviation("LA", "Los Angeles")
            .country_abbreviation("USA", "US")
            .nationality("American", "US")
            .build()
            .unwrap();

        assert!(gaz.find_city_abbreviation("LA").is_some());
        assert!(gaz.find_city_abbreviation("la").is_none());
        assert!(gaz.find_country_abbreviation("USA").is_some());
        assert!(gaz.find_nationality("american").is_some());
        assert_eq!(gaz.nationalities().iter().next().map(|n| n.key()), Some("American"));
    }

    #[test]
    fn phrase_lengths_are_distinct_and_descending() {
        let gaz = base()
            .city("Rio de Janeiro", "FR", "", 6_023_699)
            .build()
            .unwrap();
        assert_eq!(gaz.phrase_lengths(), &[3, 2, 1]);
    }

    #[test]
    fn empty_rows_build_an_empty_store() {
        let gaz = GazetteerBuilder::new().build().unwrap();
        assert_eq!(gaz.stats().countries, 0);
        assert!(gaz.phrase_lengths().is_empty());
    }
}
