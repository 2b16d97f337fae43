use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for geotext
#[derive(Debug, Parser)]
#[command(
    name = "geotext",
    version,
    about = "Extract countries, states, cities and nationalities from text"
)]
pub struct CliArgs {
    /// Directory holding the gazetteer source files (default: bundled data)
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Ignore places with a smaller population
    #[arg(short = 'p', long = "min-population", global = true, default_value_t = 0)]
    pub min_population: u64,

    /// Do not treat nationality words ("German") as country mentions
    #[arg(long = "skip-nationalities", global = true)]
    pub skip_nationalities: bool,

    /// Only consider capitalized word runs instead of every word window
    #[arg(long = "strict", global = true)]
    pub strict: bool,

    /// Print JSON instead of plain text
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the places found in a text
    Read {
        /// Text to scan; words are joined with spaces
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Count country mentions in a text, most frequent first
    Mentions {
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Show the size of every gazetteer table
    Stats,

    /// Build the gazetteer and write a binary snapshot
    Build {
        /// Output path of the snapshot
        #[arg(short = 'o', long = "out")]
        out: PathBuf,
    },
}
