// crates/geotext-core/src/loader/builder.rs
use super::common_io;
use super::{read_source_rows, GazetteerPaths};
use crate::error::{GeoError, Result};
use crate::model::{convert, load::snapshot_options, Gazetteer};
use bincode::Options;
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::time::SystemTime;
use tracing::{debug, info, warn};

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    /// Gzip when the `compact` feature is on.
    pub fn active() -> Self {
        #[cfg(feature = "compact")]
        return CompressionMode::Gzip;
        #[cfg(not(feature = "compact"))]
        return CompressionMode::None;
    }
}

impl Gazetteer {
    /// Parses the six source files and builds a fresh store.
    pub fn build_from_paths(paths: &GazetteerPaths, population_floor: u64) -> Result<Self> {
        info!(dir = %paths.dir.display(), "building gazetteer from source files");
        let rows = read_source_rows(paths)?;
        convert::from_rows(rows, population_floor)
    }

    /// **Smart Load:** reuses the binary snapshot next to the sources when it
    /// is at least as new as all of them, otherwise rebuilds and rewrites it.
    ///
    /// A failed cache write is logged and ignored.
    pub fn load_cached(paths: &GazetteerPaths, population_floor: u64) -> Result<Self> {
        let cache_path = paths.cache_path();

        if is_cache_fresh(paths, &cache_path) {
            match Self::load_binary(&cache_path) {
                Ok(mut gaz) => {
                    info!(path = %cache_path.display(), "using cached gazetteer");
                    gaz.population_floor = population_floor;
                    return Ok(gaz);
                }
                Err(e) => warn!(path = %cache_path.display(), error = %e, "ignoring unreadable cache"),
            }
        }

        let gaz = Self::build_from_paths(paths, population_floor)?;
        if let Err(e) = write_atomic(&cache_path, &gaz, CompressionMode::active()) {
            warn!(path = %cache_path.display(), error = %e, "could not write gazetteer cache");
        }
        Ok(gaz)
    }

    /// Writes a snapshot of this store, gzip-compressed under `compact`.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        write_generic(path.as_ref(), self, CompressionMode::active())
    }

    /// Reads a snapshot written by [`Gazetteer::save_as`].
    pub fn load_binary(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            GeoError::NotFound(format!("Snapshot not found at {}: {}", path.display(), e))
        })?;
        let reader = std::io::BufReader::new(file);

        let mut reader: Box<dyn Read> = match CompressionMode::active() {
            #[cfg(feature = "compact")]
            CompressionMode::Gzip => Box::new(GzDecoder::new(reader)),
            _ => Box::new(reader),
        };
        Ok(snapshot_options().deserialize_from(&mut reader)?)
    }
}

fn is_cache_fresh(paths: &GazetteerPaths, cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(m) => m,
        Err(_) => return false,
    };
    paths.sources().iter().all(|src| {
        fs::metadata(src)
            .and_then(|m| m.modified())
            .map_or(false, |t: SystemTime| t <= cache_time)
    })
}

/// Writes through a sibling temp file so concurrent readers never see a
/// half-written snapshot.
fn write_atomic<T: serde::Serialize>(path: &Path, db: &T, compression: CompressionMode) -> Result<()> {
    let tmp = path.with_extension(format!("tmp{}", std::process::id()));
    let written = write_generic(&tmp, db, compression).and_then(|()| Ok(fs::rename(&tmp, path)?));
    if written.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    written
}

fn write_generic<T: serde::Serialize>(
    path: &Path,
    value: &T,
    compression: CompressionMode,
) -> Result<()> {
    let out = BufWriter::new(File::create(path)?);
    let mut out = match compression {
        #[cfg(feature = "compact")]
        CompressionMode::Gzip => {
            encode_into(GzEncoder::new(out, Compression::default()), value)?.finish()?
        }
        #[cfg(not(feature = "compact"))]
        CompressionMode::Gzip => {
            return Err(GeoError::InvalidData(
                "gzip snapshots need the `compact` feature".into(),
            ))
        }
        CompressionMode::None => encode_into(out, value)?,
    };
    out.flush()?;
    debug!(path = %path.display(), ?compression, "wrote gazetteer snapshot");
    Ok(())
}

fn encode_into<W: Write, T: serde::Serialize>(mut sink: W, value: &T) -> Result<W> {
    snapshot_options().serialize_into(&mut sink, value)?;
    Ok(sink)
}
