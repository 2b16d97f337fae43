// crates/geotext-core/src/model/mod.rs
pub mod convert;
pub mod flat;
pub mod load;
pub mod search;
pub mod table;

pub use convert::GazetteerBuilder;
pub use flat::{AliasLink, City, CityId, Country, CountryId, Gazetteer, State, StateId};
pub use search::Table;
pub use table::PlaceTable;

#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = ".bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = ".comp.bin";
