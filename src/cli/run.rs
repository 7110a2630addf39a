use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use log::{LevelFilter, info};

use super::{
    args::Arguments,
    report::{self, heatmap_rows},
};
use crate::{
    config::{CONFIG_FILE_NAME, Config, DEFAULT_LOG_FILE},
    export::{self, DEFAULT_OUTPUT},
    scan::{Results, find_by_headers},
};

/// Scan parameters after merging CLI arguments over the config file.
#[derive(Debug, PartialEq, Eq)]
pub struct Settings {
    pub target: PathBuf,
    pub extensions: Vec<String>,
    pub phrases: Vec<String>,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub csv: Option<PathBuf>,
}

impl Settings {
    /// CLI values win; config values fill the gaps. Extensions and phrases
    /// must end up non-empty.
    pub fn resolve(args: Arguments, config: Config) -> Result<Self> {
        let extensions = if args.extensions.is_empty() {
            config.extensions
        } else {
            args.extensions
        };
        if extensions.is_empty() {
            bail!(
                "No extensions given. Pass -e/--extensions or set \"extensions\" in {}",
                CONFIG_FILE_NAME
            );
        }

        let phrases = if args.phrases.is_empty() {
            config.phrases
        } else {
            args.phrases
        };
        if phrases.is_empty() {
            bail!(
                "No phrases given. Pass -p/--phrases or set \"phrases\" in {}",
                CONFIG_FILE_NAME
            );
        }

        let log_file = args
            .log_file
            .or(config.log_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        let output = config.output;
        let csv = args
            .csv
            .map(|path| path.or(output).unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)));

        Ok(Self {
            target: args.target,
            extensions,
            phrases,
            log_level: args.log_level,
            log_file,
            csv,
        })
    }
}

/// Scan, print the heat-map, and export it if requested.
pub fn run(settings: &Settings) -> Result<Results> {
    info!("searching for [{}]", settings.phrases.join(", "));
    info!(
        "in *.{{{}}} under {}",
        settings.extensions.join(","),
        settings.target.display()
    );

    let results = find_by_headers(&settings.target, &settings.extensions, &settings.phrases)
        .with_context(|| format!("Failed to scan {}", settings.target.display()))?;

    info!("results [{}]", results);

    let rows = heatmap_rows(&results);
    report::print_heatmap(&rows);

    if let Some(path) = &settings.csv {
        export::write_csv(&rows, path)?;
        info!("wrote {} row(s) to {}", rows.len(), path.display());
    }

    report::print_summary(&results);
    Ok(results)
}
