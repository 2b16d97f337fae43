//! geotext: extract places from text on the command line
//!
//! Usage examples
//! --------------
//!
//! - Places found in a sentence
//!   $ geotext read "Voronezh and New York"
//!
//! - Mention counts as JSON
//!   $ geotext --json mentions "New York, Texas, and also China"
//!
//! - Only capitalized runs, with a population floor
//!   $ geotext --strict -p 100000 read "Trabzon and Munich"
//!
//! Data source
//! -----------
//!
//! By default the CLI uses the data directory bundled with `geotext-core`
//! and caches a binary snapshot next to the source files. Use
//! `--data-dir <DIR>` to point at another GeoNames-style directory.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use geotext_core::{Gazetteer, GazetteerPaths, GeoText, ReadOptions, ResultSet};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize)]
struct ReadOutput<'a> {
    text: &'a str,
    countries: Vec<&'a str>,
    states: Vec<&'a str>,
    cities: Vec<&'a str>,
    nationalities: Vec<&'a str>,
}

impl<'a> ReadOutput<'a> {
    fn new(text: &'a str, results: &'a ResultSet) -> Self {
        Self {
            text,
            countries: results.countries().map(|c| c.name.as_str()).collect(),
            states: results.states().map(|s| s.name.as_str()).collect(),
            cities: results.cities().map(|c| c.name.as_str()).collect(),
            nationalities: results.nationalities().map(|c| c.name.as_str()).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct MentionOutput<'a> {
    code: &'a str,
    name: &'a str,
    count: usize,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load(args: &CliArgs) -> anyhow::Result<Arc<Gazetteer>> {
    match &args.data_dir {
        Some(dir) => {
            let paths = GazetteerPaths::in_dir(dir);
            let gaz = Gazetteer::load_cached(&paths, 0)
                .with_context(|| format!("loading gazetteer from {}", dir.display()))?;
            Ok(Arc::new(gaz))
        }
        None => Gazetteer::bundled().context("loading bundled gazetteer"),
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let options = ReadOptions::default()
        .min_population(args.min_population)
        .skip_nationalities(args.skip_nationalities)
        .fuzzy(!args.strict);
    debug!(?options, "read options");

    match &args.command {
        Commands::Read { text } => {
            let text = text.join(" ");
            let mut geo = GeoText::new(load(&args)?);
            geo.read(&text, &options);
            let out = ReadOutput::new(geo.text(), geo.results());

            if args.json {
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("Cities: {}", out.cities.join(", "));
                println!("States: {}", out.states.join(", "));
                println!("Countries: {}", out.countries.join(", "));
                println!("Nationalities: {}", out.nationalities.join(", "));
            }
        }

        Commands::Mentions { text } => {
            let mut geo = GeoText::new(load(&args)?);
            geo.read(&text.join(" "), &options);
            let mentions: Vec<MentionOutput> = geo
                .country_mentions()
                .into_iter()
                .map(|m| MentionOutput {
                    code: &m.country.code,
                    name: &m.country.name,
                    count: m.count,
                })
                .collect();

            if args.json {
                println!("{}", serde_json::to_string_pretty(&mentions)?);
            } else if mentions.is_empty() {
                println!("No places found");
            } else {
                for m in &mentions {
                    println!("{} {} {}", m.code, m.name, m.count);
                }
            }
        }

        Commands::Stats => {
            let stats = load(&args)?.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Gazetteer statistics:");
                println!("  Countries: {}", stats.countries);
                println!("  States/Regions: {}", stats.states);
                println!("  Cities: {}", stats.cities);
                println!("  Nationalities: {}", stats.nationalities);
                println!("  City abbreviations: {}", stats.city_abbreviations);
                println!("  Country abbreviations: {}", stats.country_abbreviations);
            }
        }

        Commands::Build { out } => {
            let paths = args
                .data_dir
                .as_ref()
                .map(GazetteerPaths::in_dir)
                .unwrap_or_default();
            let gaz = Gazetteer::build_from_paths(&paths, 0)
                .with_context(|| format!("building from {}", paths.dir.display()))?;
            gaz.save_as(out)
                .with_context(|| format!("writing snapshot to {}", out.display()))?;
            println!("Wrote {} cities to {}", gaz.stats().cities, out.display());
        }
    }

    Ok(())
}
