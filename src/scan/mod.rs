//! The scan pipeline: enumerate files, extract header blocks, aggregate.

mod enumerate;
mod error;
mod extract;
mod results;

use std::path::Path;

pub use enumerate::enumerate;
pub use error::ScanError;
pub use extract::{BlockScanner, CaptureState, extract, extract_lines, split_lines};
pub use results::{Entry, Results, sanitized};

/// Search `root` recursively for files with one of `extensions` and collect
/// the header blocks opened by any of `phrases`.
///
/// `extensions` must not carry a leading dot: `txt`, not `*.txt`.
pub fn find_by_headers<E, S>(root: &Path, extensions: &[E], phrases: &[S]) -> Result<Results, ScanError>
where
    E: AsRef<str>,
    S: AsRef<str>,
{
    let files = enumerate(root, extensions)?;
    extract(&files, phrases)
}

impl Results {
    /// See [`find_by_headers`].
    pub fn find<E, S>(root: &Path, extensions: &[E], phrases: &[S]) -> Result<Self, ScanError>
    where
        E: AsRef<str>,
        S: AsRef<str>,
    {
        find_by_headers(root, extensions, phrases)
    }
}
