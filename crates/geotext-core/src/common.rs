// crates/geotext-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a gazetteer.
///
/// Returned by [`Gazetteer::stats`](crate::Gazetteer::stats), these counts
/// reflect the tables after construction-time conflict resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteerStats {
    pub countries: usize,
    pub states: usize,
    pub cities: usize,
    pub nationalities: usize,
    pub city_abbreviations: usize,
    pub country_abbreviations: usize,
}
