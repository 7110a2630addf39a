//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Root path to search
    pub target: PathBuf,

    /// Extensions to filter by, without the leading dot (e.g. txt sh bat)
    #[arg(short, long, num_args = 1..)]
    pub extensions: Vec<String>,

    /// Phrases that open a header block
    #[arg(short, long, num_args = 1..)]
    pub phrases: Vec<String>,

    /// Logging level (error, warn, info, debug, trace, off)
    #[arg(short = 'l', long = "log", env = "HUNTER_LOG", default_value = "info")]
    pub log_level: LevelFilter,

    /// Log file path [default: archive_results.log]
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Export the heat-map as CSV [default path: output.csv]
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub csv: Option<Option<PathBuf>>,
}
