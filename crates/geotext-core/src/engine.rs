// crates/geotext-core/src/engine.rs
use crate::candidates;
use crate::error::Result;
use crate::mentions::{self, CountryMention};
use crate::model::{City, CityId, Country, CountryId, Gazetteer, State, StateId};
use crate::overlap::CityOverlap;
use crate::resolver::{Hit, Resolver};
use crate::text::normalize_text;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tracing::{debug, trace};

/// Settings of one [`GeoText::read`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOptions {
    /// Matches below this population are dropped. Never lowers the store's
    /// own floor.
    pub min_population: u64,
    /// Ignore nationality words ("German").
    pub skip_nationalities: bool,
    /// Every word window (`true`) or only capitalized runs (`false`).
    pub fuzzy: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            min_population: 0,
            skip_nationalities: false,
            fuzzy: true,
        }
    }
}

impl ReadOptions {
    pub fn min_population(mut self, min_population: u64) -> Self {
        self.min_population = min_population;
        self
    }

    pub fn skip_nationalities(mut self, skip: bool) -> Self {
        self.skip_nationalities = skip;
        self
    }

    pub fn fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = fuzzy;
        self
    }
}

/// Places found by the last read, each kind ordered by where it first
/// appears in the text.
#[derive(Debug, Clone)]
pub struct ResultSet {
    gazetteer: Arc<Gazetteer>,
    countries: Vec<CountryId>,
    states: Vec<StateId>,
    cities: Vec<CityId>,
    nationalities: Vec<CountryId>,
}

impl ResultSet {
    fn empty(gazetteer: Arc<Gazetteer>) -> Self {
        Self {
            gazetteer,
            countries: Vec::new(),
            states: Vec::new(),
            cities: Vec::new(),
            nationalities: Vec::new(),
        }
    }

    pub fn countries(&self) -> impl Iterator<Item = &Country> + '_ {
        self.countries.iter().map(|&id| self.gazetteer.country(id))
    }

    pub fn states(&self) -> impl Iterator<Item = &State> + '_ {
        self.states.iter().map(|&id| self.gazetteer.state(id))
    }

    pub fn cities(&self) -> impl Iterator<Item = &City> + '_ {
        self.cities.iter().map(|&id| self.gazetteer.city(id))
    }

    /// Countries referred to by nationality words.
    pub fn nationalities(&self) -> impl Iterator<Item = &Country> + '_ {
        self.nationalities.iter().map(|&id| self.gazetteer.country(id))
    }

    pub fn country_ids(&self) -> &[CountryId] {
        &self.countries
    }

    pub fn state_ids(&self) -> &[StateId] {
        &self.states
    }

    pub fn city_ids(&self) -> &[CityId] {
        &self.cities
    }

    pub fn nationality_ids(&self) -> &[CountryId] {
        &self.nationalities
    }

    /// The store these results point into.
    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
            && self.states.is_empty()
            && self.cities.is_empty()
            && self.nationalities.is_empty()
    }

    /// Per-country mention counts, most frequent first.
    pub fn country_mentions(&self) -> Vec<CountryMention<'_>> {
        let attributions = mentions::attributions(
            &self.gazetteer,
            &self.countries,
            &self.states,
            &self.cities,
            &self.nationalities,
        );
        mentions::tally(&attributions)
            .into_iter()
            .map(|(id, count)| CountryMention {
                country: self.gazetteer.country(id),
                count,
            })
            .collect()
    }
}

/// Extracts countries, states, cities and nationalities from text.
///
/// ```rust
/// use geotext_core::{GeoText, ReadOptions};
///
/// let mut geo = GeoText::load_default().unwrap();
/// geo.read("London is a great city", &ReadOptions::default());
///
/// let cities: Vec<_> = geo.results().cities().map(|c| c.name.as_str()).collect();
/// assert_eq!(cities, ["London"]);
///
/// let mentions = geo.country_mentions();
/// assert_eq!(mentions[0].country.code, "GB");
/// assert_eq!(mentions[0].count, 1);
/// ```
#[derive(Debug, Clone)]
pub struct GeoText {
    gazetteer: Arc<Gazetteer>,
    text: String,
    results: ResultSet,
}

impl GeoText {
    pub fn new(gazetteer: Arc<Gazetteer>) -> Self {
        Self {
            results: ResultSet::empty(Arc::clone(&gazetteer)),
            gazetteer,
            text: String::new(),
        }
    }

    /// Creates an engine and reads `text` with default options.
    pub fn with_text(gazetteer: Arc<Gazetteer>, text: &str) -> Self {
        let mut geo = Self::new(gazetteer);
        if !text.is_empty() {
            geo.read(text, &ReadOptions::default());
        }
        geo
    }

    /// An engine over the bundled data set, built once per process.
    pub fn load_default() -> Result<Self> {
        Ok(Self::new(Gazetteer::bundled()?))
    }

    /// Replaces the current results with the places found in `text`.
    pub fn read(&mut self, text: &str, options: &ReadOptions) -> &ResultSet {
        self.text = text.to_string();
        self.results = extract(&self.gazetteer, text, options);
        &self.results
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    /// The text given to the last [`GeoText::read`].
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn gazetteer(&self) -> &Arc<Gazetteer> {
        &self.gazetteer
    }

    pub fn country_mentions(&self) -> Vec<CountryMention<'_>> {
        self.results.country_mentions()
    }

    /// Rebinds this engine to a copy of its store with another floor. Other
    /// engines sharing the old store, and the current results, are untouched.
    pub fn set_population_limit(&mut self, min_population: u64) {
        debug!(min_population, "rebinding gazetteer to new population floor");
        self.gazetteer = Arc::new(self.gazetteer.with_population_floor(min_population));
    }
}

/// One full pass: normalize, generate candidates, resolve, dedupe cities.
pub fn extract(gazetteer: &Arc<Gazetteer>, text: &str, options: &ReadOptions) -> ResultSet {
    let normalized = normalize_text(text);
    let candidates =
        candidates::generate(&normalized, gazetteer.phrase_lengths(), options.fuzzy);
    let resolver = Resolver::new(gazetteer, options.min_population, options.skip_nationalities);

    let mut countries = Vec::new();
    let mut states = Vec::new();
    let mut nationalities = Vec::new();
    let mut cities = CityOverlap::new();

    for candidate in &candidates {
        match resolver.resolve(candidate) {
            Some((_, Hit::City(id))) => {
                let outcome = cities.offer(gazetteer, id, candidate.position);
                trace!(candidate = %candidate.text, ?outcome, "city overlap");
            }
            Some((_, Hit::State(id))) => states.push((id, candidate.position)),
            Some((_, Hit::Country(id))) => countries.push((id, candidate.position)),
            Some((_, Hit::Nationality(id))) => nationalities.push((id, candidate.position)),
            None => {}
        }
    }

    let results = ResultSet {
        gazetteer: Arc::clone(gazetteer),
        countries: in_text_order(countries),
        states: in_text_order(states),
        cities: in_text_order(cities.into_entries()),
        nationalities: in_text_order(nationalities),
    };
    debug!(
        candidates = candidates.len(),
        floor = resolver.floor(),
        countries = results.countries.len(),
        states = results.states.len(),
        cities = results.cities.len(),
        nationalities = results.nationalities.len(),
        "text read"
    );
    results
}

/// Unique ids ordered by their earliest position; ids starting at the same
/// position keep discovery order.
fn in_text_order<T: Copy + Eq + Hash>(hits: Vec<(T, usize)>) -> Vec<T> {
    let mut ordered: Vec<(T, usize)> = Vec::with_capacity(hits.len());
    let mut slot: HashMap<T, usize> = HashMap::new();
    for (id, pos) in hits {
        match slot.get(&id) {
            Some(&i) => ordered[i].1 = ordered[i].1.min(pos),
            None => {
                slot.insert(id, ordered.len());
                ordered.push((id, pos));
            }
        }
    }
    ordered.sort_by_key(|&(_, pos)| pos);
    ordered.into_iter().map(|(id, _)| id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GazetteerBuilder;

    fn engine() -> GeoText {
        let gaz = GazetteerBuilder::new()
            .country("US", "United States", 327_167_434)
            .country("RU", "Russia", 144_478_050)
            .country("DE", "Germany", 82_927_922)
            .state("US.NY", "New York")
            .state("US.TX", "Texas")
            .state("RU.86", "Voronezh Oblast")
            .city("New York City", "US", "NY", 8_175_133)
            .city("Voronezh", "RU", "86", 889_680)
            .nationality("German", "DE")
            .build()
            .unwrap();
        GeoText::new(Arc::new(gaz))
    }

    fn names<'a>(it: impl Iterator<Item = &'a City>) -> Vec<&'a str> {
        it.map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn results_follow_text_order() {
        let mut geo = engine();
        geo.read("Voronezh and New York", &ReadOptions::default());
        assert_eq!(names(geo.results().cities()), ["Voronezh", "New York"]);

        let m: Vec<_> = geo
            .country_mentions()
            .iter()
            .map(|m| (m.country.code.clone(), m.count))
            .collect();
        assert_eq!(m, [("RU".to_string(), 1), ("US".to_string(), 1)]);
    }

    #[test]
    fn same_position_hits_keep_discovery_order() {
        let gaz = GazetteerBuilder::new()
            .country("GN", "Guinea", 12_414_318)
            .country("GW", "Guinea-Bissau", 1_874_309)
            .build()
            .unwrap();
        let gaz = Arc::new(gaz);

        for _ in 0..50 {
            let mut geo = GeoText::new(Arc::clone(&gaz));
            let codes: Vec<_> = geo
                .read("Guinea-Bissau", &ReadOptions::default())
                .countries()
                .map(|c| c.code.clone())
                .collect();
            assert_eq!(codes, ["GW", "GN"]);

            let mentions: Vec<_> = geo
                .country_mentions()
                .iter()
                .map(|m| (m.country.code.clone(), m.count))
                .collect();
            assert_eq!(mentions, [("GW".to_string(), 1), ("GN".to_string(), 1)]);
        }
    }

    #[test]
    fn text_order_breaks_position_ties_by_discovery() {
        let hits = vec![(7u32, 0), (3, 0), (9, 4), (7, 2), (1, 0)];
        assert_eq!(in_text_order(hits), [7, 3, 1, 9]);
    }

    #[test]
    fn empty_text_gives_empty_results() {
        let mut geo = engine();
        assert!(geo.read("", &ReadOptions::default()).is_empty());
        assert!(geo.country_mentions().is_empty());
        assert!(geo.read("   ?! ", &ReadOptions::default()).is_empty());
    }

    #[test]
    fn read_replaces_previous_results() {
        let mut geo = engine();
        geo.read("Voronezh", &ReadOptions::default());
        geo.read("Germany", &ReadOptions::default());
        assert_eq!(geo.text(), "Germany");
        assert_eq!(geo.results().cities().count(), 0);
        assert_eq!(geo.results().countries().count(), 1);
    }

    #[test]
    fn nationalities_follow_options() {
        let mut geo = engine();
        let r = geo.read("a German engineer", &ReadOptions::default());
        assert_eq!(r.nationalities().map(|c| c.code.as_str()).collect::<Vec<_>>(), ["DE"]);

        let r = geo.read("a German engineer", &ReadOptions::default().skip_nationalities(true));
        assert!(r.is_empty());
    }

    #[test]
    fn population_limit_rebinds_only_this_engine() {
        let mut geo = engine();
        let other = GeoText::new(Arc::clone(geo.gazetteer()));
        geo.set_population_limit(1_000_000);

        assert_eq!(geo.gazetteer().population_floor(), 1_000_000);
        assert_eq!(other.gazetteer().population_floor(), 0);
        assert!(geo.read("Voronezh", &ReadOptions::default()).is_empty());
    }

    #[test]
    fn with_text_reads_immediately() {
        let geo = GeoText::with_text(engine().gazetteer().clone(), "Texas");
        assert_eq!(geo.results().states().count(), 1);
        assert_eq!(geo.text(), "Texas");
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let opts: ReadOptions = serde_json::from_str(r#"{"fuzzy": false}"#).unwrap();
        assert_eq!(opts, ReadOptions::default().fuzzy(false));
    }
}
