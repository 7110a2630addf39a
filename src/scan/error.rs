use std::{io, path::PathBuf, string::FromUtf8Error};

use thiserror::Error;

/// Failures that abort a scan.
///
/// Nothing is retried or skipped: the first error ends the run and is handed
/// back to the caller unchanged.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The search root is missing or cannot be resolved.
    #[error("cannot access search root {}", .path.display())]
    InvalidRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Traversal failed somewhere below the root.
    #[error("failed to walk directory tree")]
    Walk(#[from] walkdir::Error),

    /// A matched file could not be read or resolved.
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A matched file is not valid UTF-8 text.
    #[error("{} is not valid UTF-8", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
}
