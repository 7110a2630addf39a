//! Hunter - header block statistics for source trees
//!
//! Hunter walks a directory tree, pulls out the blocks of lines that follow
//! a trigger phrase (for example a `# Modules:` header in job scripts), and
//! ranks every captured line by how often it occurs.
//!
//! ## Module Structure
//!
//! - `scan`: File enumeration, block extraction and the aggregated results
//! - `cli`: Command-line interface layer (arguments, logging, report printing)
//! - `config`: Configuration file loading
//! - `export`: CSV export of the heat-map

pub mod cli;
pub mod config;
pub mod export;
pub mod scan;
