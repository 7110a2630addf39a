use std::env;

use anyhow::{Context, Result};
use log::info;

use crate::config::load_config;

mod args;
mod exit_status;
pub mod logging;
pub mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use run::{Settings, run};

pub fn run_cli(args: Arguments) -> Result<()> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let loaded = load_config(&cwd)?;
    let settings = Settings::resolve(args, loaded.config)?;

    logging::init(settings.log_level, &settings.log_file)?;
    if let Some(path) = &loaded.path {
        info!("loaded configuration from {}", path.display());
    }

    run(&settings)?;
    Ok(())
}
