// crates/geotext-core/src/lib.rs
//! Rule-based extraction of geographic mentions from free text.
//!
//! A [`Gazetteer`] holds six lookup tables built from GeoNames-style files.
//! [`GeoText`] cuts candidate phrases from a text, resolves each through a
//! fixed chain of lookups, and reports the countries, states, cities and
//! nationalities it found, plus per-country mention counts.

pub mod candidates;
pub mod common;
pub mod engine;
pub mod error;
pub mod loader;
pub mod mentions;
pub mod model;
pub mod overlap;
pub mod resolver;
pub mod text;
pub mod traits;
// Source rows as read from disk, before folding and conflict resolution.
#[doc(hidden)]
pub mod raw;

pub use crate::common::GazetteerStats;
pub use crate::engine::{GeoText, ReadOptions, ResultSet};
pub use crate::error::{GeoError, Result};
pub use crate::loader::GazetteerPaths;
pub use crate::mentions::CountryMention;
pub use crate::model::{
    AliasLink, City, CityId, Country, CountryId, Gazetteer, GazetteerBuilder, State, StateId,
    Table,
};
pub use crate::resolver::Tier;
pub use crate::traits::Place;
