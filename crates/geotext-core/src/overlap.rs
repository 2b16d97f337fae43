// crates/geotext-core/src/overlap.rs
use crate::model::{CityId, Gazetteer};
use crate::text::contains_words;

/// Accepted city matches, kept free of whole-word containment.
///
/// A city whose search key sits inside another accepted city's key (`"york"`
/// in `"new york"`) is the same mention seen through a shorter window, so only
/// the longer one is kept. The outcome does not depend on the order cities are
/// offered in.
#[derive(Debug, Default, Clone)]
pub struct CityOverlap {
    accepted: Vec<(CityId, usize)>,
}

/// What [`CityOverlap::offer`] did with a city.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    Accepted,
    /// Same key already accepted.
    Duplicate,
    /// Contained in an accepted city.
    Shadowed,
    /// Accepted after removing this many shorter cities.
    Replaced(usize),
}

impl CityOverlap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a city found at `position` in the text.
    pub fn offer(&mut self, gazetteer: &Gazetteer, id: CityId, position: usize) -> Offer {
        let key = gazetteer.city(id).search_key.as_str();

        for (existing, pos) in self.accepted.iter_mut() {
            let other = gazetteer.city(*existing).search_key.as_str();
            if other == key {
                *pos = (*pos).min(position);
                return Offer::Duplicate;
            }
            if contains_words(other, key) {
                return Offer::Shadowed;
            }
        }

        let before = self.accepted.len();
        self.accepted
            .retain(|(existing, _)| !contains_words(key, &gazetteer.city(*existing).search_key));
        let removed = before - self.accepted.len();
        self.accepted.push((id, position));

        if removed == 0 {
            Offer::Accepted
        } else {
            Offer::Replaced(removed)
        }
    }

    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }

    /// Accepted cities with the position each was found at.
    pub fn into_entries(self) -> Vec<(CityId, usize)> {
        self.accepted
    }
}
