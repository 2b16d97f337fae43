// crates/geotext-core/src/resolver.rs
//! The seven-tier lookup chain.
//!
//! Each candidate is tried against the tiers in order and stops at the first
//! one that both matches and clears the population floor. Abbreviations come
//! before full names so a short code is never swallowed by a longer reading:
//! `"LA"` is Los Angeles (tier 1) and never reaches Louisiana (tier 2).

use crate::candidates::Candidate;
use crate::model::{CityId, CountryId, Gazetteer, StateId};
use tracing::trace;

/// The lookup stage that produced a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// `"NYC"`, `"LA"`; case-sensitive.
    CityAbbreviation = 1,
    /// Two-letter US state codes, looked up as `"US.<text>"`.
    UsStateCode = 2,
    /// ISO code as written, or the lower-cased name.
    Country = 3,
    /// `"german"` -> DE.
    Nationality = 4,
    /// `"USA"`, `"UK"`; case-sensitive.
    CountryAbbreviation = 5,
    City = 6,
    StateName = 7,
}

/// What a candidate resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hit {
    Country(CountryId),
    State(StateId),
    City(CityId),
    /// A nationality word, recorded as its country.
    Nationality(CountryId),
}

/// The chain bound to one store and one read's settings.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'g> {
    gazetteer: &'g Gazetteer,
    floor: u64,
    skip_nationalities: bool,
}

impl<'g> Resolver<'g> {
    /// `min_population` only raises the store's own floor, never lowers it.
    pub fn new(gazetteer: &'g Gazetteer, min_population: u64, skip_nationalities: bool) -> Self {
        Self {
            gazetteer,
            floor: gazetteer.population_floor().max(min_population),
            skip_nationalities,
        }
    }

    pub fn floor(&self) -> u64 {
        self.floor
    }

    /// First tier that matches and clears the floor, or `None`.
    pub fn resolve(&self, candidate: &Candidate) -> Option<(Tier, Hit)> {
        let hit = self.try_resolve(candidate);
        if let Some((tier, hit)) = hit {
            trace!(candidate = %candidate.text, ?tier, ?hit, "resolved");
        }
        hit
    }

    fn try_resolve(&self, c: &Candidate) -> Option<(Tier, Hit)> {
        let g = self.gazetteer;
        let raw = c.text.as_str();
        let lower = c.lower.as_str();

        if let Some(id) = g.find_city_abbreviation(raw).filter(|&id| self.city_ok(id)) {
            return Some((Tier::CityAbbreviation, Hit::City(id)));
        }

        if let Some(id) = g
            .find_state(&format!("US.{raw}"))
            .filter(|&id| self.state_ok(id))
        {
            return Some((Tier::UsStateCode, Hit::State(id)));
        }

        if let Some(id) = g
            .find_country(raw)
            .or_else(|| g.find_country(lower))
            .filter(|&id| self.country_ok(id))
        {
            return Some((Tier::Country, Hit::Country(id)));
        }

        if !self.skip_nationalities {
            if let Some(id) = g.find_nationality(lower).filter(|&id| self.country_ok(id)) {
                return Some((Tier::Nationality, Hit::Nationality(id)));
            }
        }

        if let Some(id) = g
            .find_country_abbreviation(raw)
            .filter(|&id| self.country_ok(id))
        {
            return Some((Tier::CountryAbbreviation, Hit::Country(id)));
        }

        if let Some(id) = g.find_city(lower).filter(|&id| self.city_ok(id)) {
            return Some((Tier::City, Hit::City(id)));
        }

        g.find_state(lower)
            .filter(|&id| self.state_ok(id))
            .map(|id| (Tier::StateName, Hit::State(id)))
    }

    fn city_ok(&self, id: CityId) -> bool {
        self.gazetteer.city(id).population >= self.floor
    }

    fn country_ok(&self, id: CountryId) -> bool {
        self.gazetteer.country(id).population >= self.floor
    }

    /// States have no population of their own; their country's counts.
    fn state_ok(&self, id: StateId) -> bool {
        self.country_ok(self.gazetteer.state(id).country)
    }
}
