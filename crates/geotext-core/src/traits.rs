// crates/geotext-core/src/traits.rs
/// Common view over every gazetteer record.
///
/// A place has a `key` that is unique within its table, a display `name`,
/// and a canonical `search_key` used for lower-case lookups. Alias records
/// (nationalities, abbreviations) carry no population of their own; the
/// population floor is checked against the place they resolve to.
pub trait Place {
    fn key(&self) -> &str;
    fn name(&self) -> &str;
    fn search_key(&self) -> &str;
    fn population(&self) -> Option<u64>;
}
