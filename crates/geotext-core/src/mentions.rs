// crates/geotext-core/src/mentions.rs
use crate::model::{CityId, Country, CountryId, Gazetteer, StateId};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// How often a country is referred to in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryMention<'a> {
    pub country: &'a Country,
    pub count: usize,
}

/// Country attributions in the order they are collected.
///
/// Every city contributes its country and covers its state and country.
/// A state contributes only if no city covered it, and then covers its
/// country. A country contributes only if nothing covered it. Nationalities
/// always contribute.
pub fn attributions(
    gazetteer: &Gazetteer,
    countries: &[CountryId],
    states: &[StateId],
    cities: &[CityId],
    nationalities: &[CountryId],
) -> Vec<CountryId> {
    let mut covered_states = HashSet::new();
    let mut covered_countries = HashSet::new();
    let mut out = Vec::with_capacity(cities.len() + states.len() + countries.len());

    for &id in cities {
        let city = gazetteer.city(id);
        out.push(city.country);
        if let Some(state) = city.state {
            covered_states.insert(state);
        }
        covered_countries.insert(city.country);
    }

    for &id in states {
        if covered_states.contains(&id) {
            continue;
        }
        let country = gazetteer.state(id).country;
        out.push(country);
        covered_countries.insert(country);
    }

    out.extend(countries.iter().filter(|&id| !covered_countries.contains(id)));
    out.extend_from_slice(nationalities);
    out
}

/// Counts attributions, most frequent first; ties keep first-seen order.
pub fn tally(attributions: &[CountryId]) -> Vec<(CountryId, usize)> {
    let mut counts: Vec<(CountryId, usize)> = Vec::new();
    let mut slot: HashMap<CountryId, usize> = HashMap::new();
    for &id in attributions {
        match slot.get(&id) {
            Some(&i) => counts[i].1 += 1,
            None => {
                slot.insert(id, counts.len());
                counts.push((id, 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
