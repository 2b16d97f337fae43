//! geotext-cli
//! ===========
//!
//! Command-line interface for the `geotext-core` place extractor.
//!
//! This crate primarily provides a binary (`geotext`). The library target
//! only exists so that docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! geotext read "It is sunny in LA CA"
//! geotext --json mentions "New York, Texas, and also China"
//! geotext --min-population 500000 read "Of is smaller than Munich"
//! geotext stats
//! geotext build --out gazetteer.comp.bin
//! ```
//!
//! For programmatic access use the [`geotext-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
