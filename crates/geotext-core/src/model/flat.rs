// crates/geotext-core/src/model/flat.rs
use super::table::PlaceTable;
use crate::traits::Place;
use serde::{Deserialize, Serialize};

macro_rules! place_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub(crate) u32);

        impl $name {
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub(crate) fn from_index(idx: usize) -> Self {
                Self(idx as u32)
            }
        }
    };
}

place_id!(
    /// Index of a [`Country`] in its gazetteer.
    CountryId
);
place_id!(
    /// Index of a [`State`] in its gazetteer.
    StateId
);
place_id!(
    /// Index of a [`City`] in its gazetteer.
    CityId
);

/// The master lookup store.
///
/// Six flat tables, each an array plus two hash indexes. Parent links are
/// ids into the sibling tables, never owning pointers, so the whole store
/// serializes as one value and can be shared behind an `Arc` for concurrent
/// read-only resolution.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Gazetteer {
    pub(crate) countries: PlaceTable<Country>,
    pub(crate) states: PlaceTable<State>,
    pub(crate) cities: PlaceTable<City>,
    pub(crate) nationalities: PlaceTable<AliasLink<CountryId>>,
    pub(crate) city_abbreviations: PlaceTable<AliasLink<CityId>>,
    pub(crate) country_abbreviations: PlaceTable<AliasLink<CountryId>>,
    /// Distinct word counts over every key and search key, largest first.
    pub(crate) phrase_lengths: Vec<usize>,
    /// Lowest population a match may have; every `read` applies it.
    pub(crate) population_floor: u64,
}

/// A Country entry. `key` is the ISO 3166 alpha-2 code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    pub search_key: String,
    pub population: u64,
}

/// A first-order administrative division. `key` is `"<country>.<code>"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub key: String,
    pub name: String,
    pub search_key: String,
    pub country: CountryId,
}

/// A City entry. Its key is the display name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub search_key: String,
    pub population: u64,
    pub country: CountryId,
    pub state: Option<StateId>,
}

/// Alternate text for another place: a nationality ("German" -> DE) or an
/// abbreviation ("NYC" -> New York, "UK" -> GB).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasLink<T> {
    pub alias: String,
    pub search_key: String,
    pub target: T,
}

impl Country {
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl State {
    /// The state part of the key: `"CA"` for `"US.CA"`.
    pub fn code(&self) -> &str {
        self.key.split_once('.').map_or(self.key.as_str(), |(_, code)| code)
    }
}

impl Place for Country {
    fn key(&self) -> &str {
        &self.code
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn search_key(&self) -> &str {
        &self.search_key
    }
    fn population(&self) -> Option<u64> {
        Some(self.population)
    }
}

impl Place for State {
    fn key(&self) -> &str {
        &self.key
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn search_key(&self) -> &str {
        &self.search_key
    }
    fn population(&self) -> Option<u64> {
        None
    }
}

impl Place for City {
    fn key(&self) -> &str {
        &self.name
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn search_key(&self) -> &str {
        &self.search_key
    }
    fn population(&self) -> Option<u64> {
        Some(self.population)
    }
}

impl<T> Place for AliasLink<T> {
    fn key(&self) -> &str {
        &self.alias
    }
    fn name(&self) -> &str {
        &self.alias
    }
    fn search_key(&self) -> &str {
        &self.search_key
    }
    fn population(&self) -> Option<u64> {
        None
    }
}
