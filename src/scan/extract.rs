//! Header block extraction.
//!
//! A block opens on any line containing one of the trigger phrases and runs
//! until the next effectively blank line. Lines inside a block are captured
//! unless they look like comment markers (start with `#` or contain `###`).

use std::{fs, path::Path};

use log::debug;

use super::{
    error::ScanError,
    results::{Entry, Results},
};

/// Marker that excludes a line from capture even inside a block.
const COMMENT_MARKER: &str = "###";

/// Whether the scanner is currently inside a block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaptureState {
    #[default]
    Idle,
    Capturing,
}

/// Line-by-line block scanner for a single file.
///
/// Transitions are applied in a fixed order for every line:
///
/// 1. a line containing any phrase switches to [`CaptureState::Capturing`];
/// 2. a line of at most one character (terminator included) switches back to
///    [`CaptureState::Idle`];
/// 3. the line is captured if the state is `Capturing` and the line is not a
///    comment marker.
///
/// So the trigger line itself is captured, and the blank line that closes a
/// block never is.
#[derive(Debug)]
pub struct BlockScanner<'a, S> {
    phrases: &'a [S],
    state: CaptureState,
}

impl<'a, S: AsRef<str>> BlockScanner<'a, S> {
    pub fn new(phrases: &'a [S]) -> Self {
        Self {
            phrases,
            state: CaptureState::Idle,
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Advance over one line. Returns true if the line should be captured.
    pub fn feed(&mut self, line: &str) -> bool {
        if self.phrases.iter().any(|phrase| line.contains(phrase.as_ref())) {
            self.state = CaptureState::Capturing;
        }
        if is_blank(line) {
            self.state = CaptureState::Idle;
        }
        self.state == CaptureState::Capturing && !is_comment(line)
    }

    /// Forget any open block.
    pub fn reset(&mut self) {
        self.state = CaptureState::Idle;
    }
}

/// Length of at most one character: empty, a bare terminator, or a single
/// character at the end of a file.
fn is_blank(line: &str) -> bool {
    line.chars().nth(1).is_none()
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#') || line.contains(COMMENT_MARKER)
}

/// Run a fresh [`BlockScanner`] over `lines` and return the captured ones.
pub fn extract_lines<'l, I, S>(lines: I, phrases: &[S]) -> Vec<&'l str>
where
    I: IntoIterator<Item = &'l str>,
    S: AsRef<str>,
{
    let mut scanner = BlockScanner::new(phrases);
    lines.into_iter().filter(|line| scanner.feed(line)).collect()
}

/// Split text into lines, keeping terminators.
///
/// `\n`, `\r\n` and a lone `\r` all end a line and are normalized to `\n`.
/// The last line keeps no terminator if the text does not end with one.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\n' => {
                current.push('\n');
                lines.push(std::mem::take(&mut current));
            }
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                current.push('\n');
                lines.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Scan every file in `paths`, in order, and collect the captured lines.
///
/// Each file starts with a closed block. The first unreadable or non-UTF-8
/// file aborts the scan and nothing collected so far is returned.
pub fn extract<P, S>(paths: &[P], phrases: &[S]) -> Result<Results, ScanError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let mut results = Results::default();
    let mut scanner = BlockScanner::new(phrases);

    for path in paths {
        let path = path.as_ref();
        let text = read_text(path)?;
        let before = results.len();

        scanner.reset();
        for line in split_lines(&text) {
            if scanner.feed(&line) {
                results.push(Entry::new(path.to_path_buf(), line));
            }
        }

        debug!(
            "{}: {} line(s) captured",
            path.display(),
            results.len() - before
        );
    }

    Ok(results)
}

fn read_text(path: &Path) -> Result<String, ScanError> {
    let bytes = fs::read(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| ScanError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
