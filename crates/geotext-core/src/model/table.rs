// crates/geotext-core/src/model/table.rs
use crate::traits::Place;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One gazetteer table: contiguous records plus two indexes.
///
/// `by_key` is unique. `by_search_key` is not unique in the source data;
/// the builder resolves collisions before insertion and a later insert
/// simply takes over the search key.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaceTable<T> {
    items: Vec<T>,
    by_key: HashMap<String, u32>,
    by_search_key: HashMap<String, u32>,
}

impl<T> Default for PlaceTable<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            by_key: HashMap::new(),
            by_search_key: HashMap::new(),
        }
    }
}

impl<T: Place> PlaceTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record and returns its index. A record whose key is already
    /// present replaces the old one in place.
    pub fn insert(&mut self, item: T) -> usize {
        if let Some(&idx) = self.by_key.get(item.key()) {
            let old_search = self.items[idx as usize].search_key().to_string();
            if self.by_search_key.get(&old_search) == Some(&idx) {
                self.by_search_key.remove(&old_search);
            }
            self.by_search_key.insert(item.search_key().to_string(), idx);
            self.items[idx as usize] = item;
            return idx as usize;
        }

        let idx = self.items.len() as u32;
        self.by_key.insert(item.key().to_string(), idx);
        self.by_search_key.insert(item.search_key().to_string(), idx);
        self.items.push(item);
        idx as usize
    }

    /// Exact key first, then search key.
    pub fn lookup(&self, text: &str) -> Option<usize> {
        self.by_key
            .get(text)
            .or_else(|| self.by_search_key.get(text))
            .map(|&idx| idx as usize)
    }

    pub fn get(&self, idx: usize) -> Option<&T> {
        self.items.get(idx)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Every key and search key in the table.
    pub(crate) fn phrases(&self) -> impl Iterator<Item = &str> + '_ {
        self.items
            .iter()
            .flat_map(|item| [item.key(), item.search_key()])
    }
}

impl<T> std::ops::Index<usize> for PlaceTable<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        &self.items[idx]
    }
}
