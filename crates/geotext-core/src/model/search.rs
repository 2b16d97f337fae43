// crates/geotext-core/src/model/search.rs
use super::flat::{AliasLink, City, CityId, Country, CountryId, Gazetteer, State, StateId};
use super::table::PlaceTable;
use crate::common::GazetteerStats;
use crate::traits::Place;

/// Selects one of the six gazetteer tables for [`Gazetteer::lookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Country,
    State,
    City,
    Nationality,
    CityAbbreviation,
    CountryAbbreviation,
}

impl Gazetteer {
    pub fn stats(&self) -> GazetteerStats {
        GazetteerStats {
            countries: self.countries.len(),
            states: self.states.len(),
            cities: self.cities.len(),
            nationalities: self.nationalities.len(),
            city_abbreviations: self.city_abbreviations.len(),
            country_abbreviations: self.country_abbreviations.len(),
        }
    }

    /// Distinct phrase word counts, largest first.
    pub fn phrase_lengths(&self) -> &[usize] {
        &self.phrase_lengths
    }

    pub fn population_floor(&self) -> u64 {
        self.population_floor
    }

    /// A copy of this store bound to another floor. `self` is untouched, so
    /// readers holding the old store keep their results.
    pub fn with_population_floor(&self, floor: u64) -> Self {
        Self {
            population_floor: floor,
            ..self.clone()
        }
    }

    // Ids only come from this store, so indexing cannot go out of bounds.
    pub fn country(&self, id: CountryId) -> &Country {
        &self.countries[id.index()]
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    pub fn city(&self, id: CityId) -> &City {
        &self.cities[id.index()]
    }

    pub fn countries(&self) -> &PlaceTable<Country> {
        &self.countries
    }

    pub fn states(&self) -> &PlaceTable<State> {
        &self.states
    }

    pub fn cities(&self) -> &PlaceTable<City> {
        &self.cities
    }

    pub fn nationalities(&self) -> &PlaceTable<AliasLink<CountryId>> {
        &self.nationalities
    }

    pub fn city_abbreviations(&self) -> &PlaceTable<AliasLink<CityId>> {
        &self.city_abbreviations
    }

    pub fn country_abbreviations(&self) -> &PlaceTable<AliasLink<CountryId>> {
        &self.country_abbreviations
    }

    /// Country by ISO code (`"DE"`) or canonical name (`"germany"`).
    pub fn find_country(&self, text: &str) -> Option<CountryId> {
        self.countries.lookup(text).map(CountryId::from_index)
    }

    /// State by full key (`"US.CA"`) or canonical name (`"california"`).
    pub fn find_state(&self, text: &str) -> Option<StateId> {
        self.states.lookup(text).map(StateId::from_index)
    }

    pub fn find_city(&self, text: &str) -> Option<CityId> {
        self.cities.lookup(text).map(CityId::from_index)
    }

    /// Country a nationality word points to.
    pub fn find_nationality(&self, text: &str) -> Option<CountryId> {
        self.nationalities
            .lookup(text)
            .and_then(|i| self.nationalities.get(i))
            .map(|link| link.target)
    }

    /// City behind a case-sensitive abbreviation.
    pub fn find_city_abbreviation(&self, text: &str) -> Option<CityId> {
        self.city_abbreviations
            .lookup(text)
            .and_then(|i| self.city_abbreviations.get(i))
            .map(|link| link.target)
    }

    pub fn find_country_abbreviation(&self, text: &str) -> Option<CountryId> {
        self.country_abbreviations
            .lookup(text)
            .and_then(|i| self.country_abbreviations.get(i))
            .map(|link| link.target)
    }

    /// Untyped lookup: exact key first, then search key. Alias tables return
    /// the alias record itself, not its target.
    pub fn lookup(&self, table: Table, text: &str) -> Option<&dyn Place> {
        fn hit<'a, T: Place>(t: &'a PlaceTable<T>, text: &str) -> Option<&'a dyn Place> {
            t.lookup(text).and_then(|i| t.get(i)).map(|p| p as &dyn Place)
        }
        match table {
            Table::Country => hit(&self.countries, text),
            Table::State => hit(&self.states, text),
            Table::City => hit(&self.cities, text),
            Table::Nationality => hit(&self.nationalities, text),
            Table::CityAbbreviation => hit(&self.city_abbreviations, text),
            Table::CountryAbbreviation => hit(&self.country_abbreviations, text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GazetteerBuilder;

    fn sample() -> Gazetteer {
        GazetteerBuilder::new()
            .country("GB", "United Kingdom", 66_488_991)
            .state("GB.ENG", "England")
            .city("London", "GB", "ENG", 7_556_900)
            .nationality("British", "GB")
            .country_abbreviation("UK", "GB")
            .build()
            .unwrap()
    }

    #[test]
    fn generic_lookup_returns_the_record() {
        let gaz = sample();
        let p = gaz.lookup(Table::Country, "GB").unwrap();
        assert_eq!(p.name(), "United Kingdom");
        assert_eq!(p.population(), Some(66_488_991));

        let p = gaz.lookup(Table::Nationality, "british").unwrap();
        assert_eq!(p.key(), "British");
        assert_eq!(p.population(), None);

        assert!(gaz.lookup(Table::CountryAbbreviation, "uk").is_none());
        assert!(gaz.lookup(Table::City, "Paris").is_none());
    }

    #[test]
    fn typed_finders_follow_aliases() {
        let gaz = sample();
        let gb = gaz.find_country("GB").unwrap();
        assert_eq!(gaz.find_nationality("british"), Some(gb));
        assert_eq!(gaz.find_country_abbreviation("UK"), Some(gb));
        assert_eq!(gaz.find_country("united kingdom"), Some(gb));

        let london = gaz.city(gaz.find_city("london").unwrap());
        assert_eq!(gaz.state(london.state.unwrap()).name, "England");
    }

    #[test]
    fn floor_copy_leaves_original_alone() {
        let gaz = sample();
        let raised = gaz.with_population_floor(1_000);
        assert_eq!(gaz.population_floor(), 0);
        assert_eq!(raised.population_floor(), 1_000);
        assert_eq!(raised.stats(), gaz.stats());
    }
}
