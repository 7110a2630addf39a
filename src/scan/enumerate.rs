//! File enumeration.
//!
//! Walks a root directory and collects every file whose name ends with one of
//! the requested extensions.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use super::error::ScanError;

/// Recursively find files under `root` whose names end with `.<ext>`.
///
/// Extensions are given without the leading dot (`txt`, not `.txt` or
/// `*.txt`). Matching is applied per extension and the results are
/// concatenated in extension order, so a redundant extension list produces
/// duplicate paths. Directories are never returned and every path is
/// canonicalized.
///
/// Hidden entries below the root (names starting with `.`) are skipped along
/// with everything under them. Symlinked directories are followed, and a
/// link cycle is reported as a walk error.
///
/// Traversal order within one extension is sorted by file name, which keeps
/// repeated runs over the same tree stable.
pub fn enumerate<S: AsRef<str>>(root: &Path, extensions: &[S]) -> Result<Vec<PathBuf>, ScanError> {
    let root = fs::canonicalize(root).map_err(|source| ScanError::InvalidRoot {
        path: root.to_path_buf(),
        source,
    })?;

    let extensions: Vec<&str> = extensions.iter().map(|ext| ext.as_ref()).collect();
    let candidates = walk_files(&root)?;

    let mut files = Vec::new();
    for ext in &extensions {
        let suffix = format!(".{ext}");
        for path in &candidates {
            if has_suffix(path, &suffix) {
                let resolved = fs::canonicalize(path).map_err(|source| ScanError::Read {
                    path: path.clone(),
                    source,
                })?;
                trace!("matched {}", resolved.display());
                files.push(resolved);
            }
        }
    }

    debug!(
        "found {} file(s) under {} for [{}]",
        files.len(),
        root.display(),
        extensions.join(", ")
    );

    Ok(files)
}

/// Every visible file below `root`, excluding `root` itself.
fn walk_files(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.depth() == 0 {
            continue;
        }
        // `Path::is_file` follows symlinks, so links to files count as files.
        if entry.path().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(suffix))
        .unwrap_or(false)
}
