// crates/geotext-core/src/model/load.rs
use super::flat::Gazetteer;
use bincode::Options;

/// Upper bound on a decoded snapshot, guards against corrupt length prefixes.
const SNAPSHOT_LIMIT: u64 = 256 * 1024 * 1024;

/// The one bincode configuration used to write and read snapshots.
pub(crate) fn snapshot_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}

impl Gazetteer {
    /// Reconstructs a store from an uncompressed snapshot produced by
    /// [`Gazetteer::to_bytes`] or `save_as` (after gunzip).
    pub fn from_bytes(data: &[u8]) -> Result<Self, bincode::Error> {
        snapshot_options().deserialize(data)
    }

    /// Serializes the whole store, floor included.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        snapshot_options().serialize(self)
    }
}
