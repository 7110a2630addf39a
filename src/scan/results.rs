//! Captured lines and the views computed over them.

use std::{
    collections::HashSet,
    fmt,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;

/// One captured line and the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,
    content: String,
}

impl Entry {
    pub fn new(path: PathBuf, content: String) -> Self {
        Self { path, content }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The line exactly as read, terminator included.
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Strip newlines and surrounding whitespace from a captured line.
///
/// ```
/// use hunter::scan::sanitized;
///
/// assert_eq!(sanitized("  module load gcc\n"), "module load gcc");
/// assert_eq!(sanitized(&sanitized(" a \n")), sanitized(" a \n"));
/// ```
pub fn sanitized(content: &str) -> String {
    content.replace('\n', "").trim().to_string()
}

/// Every captured line, in scan order.
///
/// All views are computed on each call; nothing is cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Results {
    entries: Vec<Entry>,
}

impl Results {
    pub(crate) fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Raw line texts, duplicates kept.
    pub fn contents(&self) -> Vec<&str> {
        self.entries.iter().map(Entry::content).collect()
    }

    /// Raw line text to number of occurrences, in first-seen order.
    ///
    /// Keys are not sanitized, so `"x\n"` and `"x \n"` are counted apart.
    pub fn content_occurrence(&self) -> IndexMap<&str, usize> {
        let mut counts = IndexMap::new();
        for entry in &self.entries {
            *counts.entry(entry.content()).or_insert(0) += 1;
        }
        counts
    }

    /// Distinct sanitized line texts.
    pub fn content_unique(&self) -> HashSet<String> {
        self.entries.iter().map(|e| sanitized(e.content())).collect()
    }

    /// Source path of every entry, duplicates kept.
    pub fn paths(&self) -> Vec<&Path> {
        self.entries.iter().map(Entry::path).collect()
    }

    /// Distinct source paths.
    pub fn paths_unique(&self) -> HashSet<&Path> {
        self.entries.iter().map(Entry::path).collect()
    }

    /// Distinct raw lines ranked by occurrence, most frequent first.
    ///
    /// Lines with equal counts stay in first-seen order.
    pub fn heatmap(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<_> = self.content_occurrence().into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl FromIterator<Entry> for Results {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Results {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Results {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} entries, {} unique lines, {} files",
            self.len(),
            self.content_unique().len(),
            self.paths_unique().len()
        )
    }
}
