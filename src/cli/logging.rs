//! Logger setup for the `hunter` binary.
//!
//! Every record is written to the log file and echoed to stderr. The library
//! itself only uses the `log` macros and never installs a logger.

use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};
use chrono::Local;
use env_logger::{Builder, Target};
use log::{LevelFilter, Record};

/// Duplicates every write to two sinks.
pub struct Tee<A, B> {
    primary: A,
    secondary: B,
}

impl<A: Write, B: Write> Tee<A, B> {
    pub fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }
}

impl<A: Write, B: Write> Write for Tee<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.primary.write_all(buf)?;
        self.secondary.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.primary.flush()?;
        self.secondary.flush()
    }
}

/// `<timestamp> <target> <LEVEL> <message>`, with the target and level
/// padded into columns.
pub fn write_record<W: Write>(writer: &mut W, record: &Record) -> io::Result<()> {
    writeln!(
        writer,
        "{} {:<12} {:<8} {}",
        Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
        record.target(),
        record.level(),
        record.args()
    )
}

/// Open `log_file` for appending, creating it if needed.
pub fn open_log_file(log_file: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file: {}", log_file.display()))
}

/// Install the global logger. Records are appended to `log_file`, so it
/// accumulates a history across runs.
pub fn init(level: LevelFilter, log_file: &Path) -> Result<()> {
    let file = open_log_file(log_file)?;

    Builder::new()
        .filter_level(level)
        .format(|buf, record| write_record(buf, record))
        .target(Target::Pipe(Box::new(Tee::new(file, io::stderr()))))
        .try_init()
        .context("Failed to initialize logger")?;

    Ok(())
}
