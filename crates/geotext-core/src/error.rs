// crates/geotext-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading or building a gazetteer.
///
/// Resolving text never fails: a candidate that matches nothing is simply
/// dropped, and empty input yields empty results.
#[derive(Debug, Error)]
pub enum GeoError {
    /// A data file could not be found or opened.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The binary snapshot could not be encoded or decoded.
    #[error("binary cache error: {0}")]
    Bincode(#[from] bincode::Error),

    /// A source row is malformed or references a missing place.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, GeoError>;
